//! File header information: license and security contact.

use serde::{Deserialize, Serialize};
use superwizard_codegen::CodeFragment;

/// Compiler version requirement written into every structured contract.
pub const SOLIDITY_VERSION: &str = "^0.8.9";

/// Header data supplied alongside the options of every contract kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_contact: Option<String>,
    pub license: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            security_contact: None,
            license: "MIT".to_string(),
        }
    }
}

impl Info {
    /// The security contact, treating an empty string as absent.
    pub fn contact(&self) -> Option<&str> {
        self.security_contact
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// License and pragma lines.
    pub fn header(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment(format!("SPDX-License-Identifier: {}", self.license)),
            CodeFragment::line(format!("pragma solidity {};", SOLIDITY_VERSION)),
        ]
    }

    /// NatSpec tag placed above the contract declaration.
    pub fn contact_tag(&self) -> Option<CodeFragment> {
        self.contact()
            .map(|c| CodeFragment::natspec(format!("@custom:security-contact {}", c)))
    }
}
