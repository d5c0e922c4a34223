//! Contract model, builder operations and printer.
//!
//! A [`Contract`] is created per generation request, mutated through its
//! builder operations while option flags are processed, then handed once to
//! [`print_contract`], which is the only place that produces source text.
//!
//! ```
//! use superwizard_contract::{
//!     Contract, FunctionDescriptor, FunctionKind, ParentReference, print_contract,
//! };
//!
//! let mint = FunctionDescriptor::new("mint", FunctionKind::Public)
//!     .arg("address", "to")
//!     .arg("uint256", "amount");
//!
//! let mut c = Contract::new("MyToken");
//! c.add_parent(ParentReference::new(
//!     "ERC20",
//!     "@openzeppelin/contracts/token/ERC20/ERC20.sol",
//! ));
//! c.add_function_code("_mint(to, amount);", &mint);
//! c.add_modifier("onlyOwner", &mint);
//!
//! let source = print_contract(&c);
//! assert!(source.contains("function mint(address to, uint256 amount) public onlyOwner {"));
//! ```

mod contract;
mod error;
mod function;
mod info;
mod print;

pub use contract::{Contract, ParentReference, Using, string_literal};
pub use error::ContractError;
pub use function::{
    Function, FunctionArgument, FunctionDescriptor, FunctionKey, FunctionKind, Mutability,
};
pub use info::{Info, SOLIDITY_VERSION};
pub use print::print_contract;
