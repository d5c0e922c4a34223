//! Contract kinds and their option builders.

mod capped;
mod custom;
mod erc1155;
mod erc20;
mod erc721;
mod governor;
mod matic;
mod pure;

use std::{fmt, str::FromStr};

use serde::{Serialize, de::DeserializeOwned};
use superwizard_contract::{Contract, print_contract};

pub use capped::{CappedOptions, CappedSuperToken};
pub use custom::{Custom, CustomOptions};
pub use erc1155::{Erc1155, Erc1155Options};
pub use erc20::{Erc20, Erc20Options};
pub use erc721::{Erc721, Erc721Options};
pub use governor::{Governor, GovernorOptions, QuorumMode, Timelock, VotesKind};
pub use matic::{MaticBridgedOptions, MaticBridgedSuperToken};
pub use pure::{PureOptions, PureSuperToken};

use crate::Result;

/// The kinds of contract the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Pure,
    Erc20,
    Erc721,
    Erc1155,
    Governor,
    Capped,
    MaticBridged,
    Custom,
}

impl Kind {
    pub const ALL: [Kind; 8] = [
        Kind::Pure,
        Kind::Erc20,
        Kind::Erc721,
        Kind::Erc1155,
        Kind::Governor,
        Kind::Capped,
        Kind::MaticBridged,
        Kind::Custom,
    ];

    /// The name used for `kind` in option files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Pure => "PURE",
            Kind::Erc20 => "ERC20",
            Kind::Erc721 => "ERC721",
            Kind::Erc1155 => "ERC1155",
            Kind::Governor => "Governor",
            Kind::Capped => "Capped",
            Kind::MaticBridged => "MaticBridged",
            Kind::Custom => "Custom",
        }
    }

    /// Comma-separated list of every kind name.
    pub fn names() -> String {
        Kind::ALL.map(|k| k.as_str()).join(", ")
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown kind '{}', expected one of: {}", s, Kind::names()))
    }
}

/// A contract kind: its options, defaults and builder.
pub trait ContractKind {
    /// Options accepted by the builder. `Default` yields the kind's defaults.
    type Options: Default + Serialize + DeserializeOwned;

    const KIND: Kind;

    /// Assemble the contract model for `options`.
    fn build(options: &Self::Options) -> Result<Contract>;

    /// Whether any option needs access control, in which case an unset
    /// `access` is treated as ownable.
    fn access_control_required(options: &Self::Options) -> bool;

    fn defaults() -> Self::Options {
        Self::Options::default()
    }

    fn print(options: &Self::Options) -> Result<String> {
        Self::build(options).map(|c| print_contract(&c))
    }
}
