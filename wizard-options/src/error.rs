use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use superwizard_contract::ContractError;
use thiserror::Error;

use crate::Kind;

/// Result type for option handling (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the option file content and its name so error factories do not
/// need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn missing_kind_error(&self) -> Box<Error> {
        Box::new(Error::MissingKind {
            src: self.named_source(),
            valid: Kind::names(),
        })
    }

    pub fn unknown_kind_error(&self, kind: impl Into<String>) -> Box<Error> {
        let kind = kind.into();
        Box::new(Error::UnknownKind {
            src: self.named_source(),
            span: find_value_span(&self.src, &kind),
            kind,
            valid: Kind::names(),
        })
    }
}

/// Find a quoted string value, falling back to the bare text.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    let quoted = format!("\"{}\"", value);
    if let Some(offset) = src.find(&quoted) {
        return Some((offset + 1, value.len()).into());
    }
    src.find(value).map(|offset| (offset, value.len()).into())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'sfwizard defaults --kind ERC20' to print a starting point"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse option file")]
    #[diagnostic(code(wizard::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("option file has no 'kind'")]
    #[diagnostic(
        code(wizard::missing_kind),
        help("add e.g. kind = \"ERC20\"; valid kinds are: {valid}")
    )]
    MissingKind {
        #[source_code]
        src: NamedSource<String>,
        valid: String,
    },

    #[error("unknown kind '{kind}'")]
    #[diagnostic(
        code(wizard::unknown_kind),
        help("valid kinds are: {valid}")
    )]
    UnknownKind {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a contract kind")]
        span: Option<SourceSpan>,
        kind: String,
        valid: String,
    },

    #[error("invalid {option} '{value}'")]
    #[diagnostic(code(wizard::invalid_option), help("{reason}"))]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    #[diagnostic(code(wizard::contract))]
    Contract(#[from] ContractError),
}

impl Error {
    pub fn invalid_option(
        option: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidOption {
            option,
            value: value.into(),
            reason: reason.into(),
        })
    }

    /// Whether this error rejects the option file's `kind`.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Error::UnknownKind { .. })
    }
}
