//! Everything between generated source and a deployed contract.
//!
//! The compile service expects short `@org/repo` import aliases and a
//! `^0.8.0` pragma, so source goes through [`adjust_solidity_code`] before
//! [`CompileClient`] submits it. Signing and broadcasting happen in the
//! user's wallet and are not handled here.

mod adjust;
mod compile;
mod networks;

pub use adjust::adjust_solidity_code;
pub use compile::{CompileClient, CompileError, CompileOutcome, DEFAULT_COMPILE_URL};
pub use networks::{NETWORKS, Network, network_data, shorten_address};
