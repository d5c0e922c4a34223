//! Core operations.
//!
//! This module contains the business logic for sfwizard commands,
//! separated from CLI argument parsing and output rendering.

pub mod compile;
pub mod generate;
pub mod kinds;
pub mod networks;

pub use compile::compile;
pub use generate::{Overrides, generate, load};
pub use kinds::kinds;
pub use networks::networks;
