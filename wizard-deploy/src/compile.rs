//! Blocking client for the remote compile service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::adjust_solidity_code;

pub const DEFAULT_COMPILE_URL: &str = "http://localhost:3000";

const TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("could not reach compile service at {url}: {message}")]
    Transport { url: String, message: String },

    #[error("compile service rejected the contract ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unreadable response from compile service: {0}")]
    InvalidResponse(#[from] std::io::Error),
}

/// Result of a compile request. Failures are reported here rather than
/// raised, with `success` false and `error` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileOutcome {
    pub abi: Value,
    pub bytecode: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompileOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            abi: Value::String(String::new()),
            bytecode: String::new(),
            success: false,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompileRequest<'a> {
    name: &'a str,
    code: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CompileResponse {
    abi: Value,
    bytecode: String,
    error: Option<String>,
}

impl CompileResponse {
    fn into_outcome(self) -> CompileOutcome {
        CompileOutcome {
            abi: self.abi,
            bytecode: self.bytecode,
            success: true,
            error: None,
        }
    }
}

/// Submits contract source to `<base>/compile`.
#[derive(Debug, Clone)]
pub struct CompileClient {
    agent: ureq::Agent,
    base_url: String,
}

impl Default for CompileClient {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILE_URL)
    }
}

impl CompileClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/compile", self.base_url.trim_end_matches('/'))
    }

    /// Compile `code`, reporting every failure in the outcome.
    pub fn compile(&self, name: &str, code: &str) -> CompileOutcome {
        self.try_compile(name, code).unwrap_or_else(|e| {
            warn!(error = %e, "compile failed");
            CompileOutcome::failure(e.to_string())
        })
    }

    /// Compile `code`, returning transport and service errors.
    pub fn try_compile(&self, name: &str, code: &str) -> Result<CompileOutcome, CompileError> {
        let url = self.endpoint();
        let request = request_body(name, code);
        debug!(%url, contract = name, bytes = request.code.len(), "submitting contract");

        match self.agent.post(&url).send_json(&request) {
            Ok(response) => {
                let body: CompileResponse = response.into_json()?;
                debug!(bytecode = body.bytecode.len(), "compile succeeded");
                Ok(body.into_outcome())
            }
            Err(ureq::Error::Status(status, response)) => {
                let status_text = response.status_text().to_string();
                let message = response
                    .into_json::<CompileResponse>()
                    .ok()
                    .and_then(|body| body.error)
                    .unwrap_or(status_text);
                Err(CompileError::Rejected { status, message })
            }
            Err(e) => Err(CompileError::Transport {
                url,
                message: e.to_string(),
            }),
        }
    }
}

fn request_body<'a>(name: &'a str, code: &str) -> CompileRequest<'a> {
    CompileRequest {
        name,
        code: adjust_solidity_code(code),
    }
}
