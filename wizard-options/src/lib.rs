// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Contract kinds, their options and builders.
//!
//! Each kind implements [`ContractKind`]: a pure function from an immutable
//! options value to a fresh [`Contract`](superwizard_contract::Contract).
//! [`GenericOptions`] and [`build_generic`] dispatch over every kind, and
//! [`parse_options`] reads them from a TOML option file.

mod access;
mod common;
mod duration;
mod error;
mod features;
mod file;
mod generic;
mod kinds;
mod premint;

pub use access::{RoleGrant, declare_role, require_access_control, set_access_control};
pub use common::{Access, CommonOptions};
pub use duration::duration_to_blocks;
pub use error::{Error, Result, SourceContext};
pub use file::{OptionsFile, parse_options};
pub use generic::{GenericOptions, build_generic, print_generic};
pub use kinds::*;
pub use premint::{DecimalScale, format_premint};
