use thiserror::Error;

use crate::FunctionKey;

/// Caller-contract violations detected by [`Contract::validate`](crate::Contract::validate).
///
/// Builder operations never fail; these are reported afterwards so option
/// builders can refuse to hand a malformed model to the printer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("'{name}' is not a valid contract name")]
    InvalidName { name: String },

    #[error("constructor argument '{name}' is declared more than once")]
    DuplicateConstructorArgument { name: String },

    #[error("function {key} was referenced with conflicting signatures")]
    InconsistentFunction { key: FunctionKey },
}
