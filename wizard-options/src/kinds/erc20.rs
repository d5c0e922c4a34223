//! ERC20 fungible token.

use serde::{Deserialize, Serialize};
use superwizard_contract::{
    Contract, FunctionDescriptor, FunctionKind, ParentReference, string_literal,
};

use super::{ContractKind, Kind};
use crate::{
    Access, CommonOptions, DecimalScale, Result, RoleGrant, common::amount, features,
    format_premint, require_access_control, set_access_control,
};

const GRANT: RoleGrant = RoleGrant::GrantRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc20Options {
    pub name: String,
    pub symbol: String,
    pub burnable: bool,
    pub snapshots: bool,
    pub pausable: bool,
    #[serde(deserialize_with = "amount")]
    pub premint: String,
    pub mintable: bool,
    pub permit: bool,
    /// Implies `permit`.
    pub votes: bool,
    pub flashmint: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for Erc20Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            burnable: false,
            snapshots: false,
            pausable: false,
            premint: "0".to_string(),
            mintable: false,
            permit: true,
            votes: false,
            flashmint: false,
            common: CommonOptions::default(),
        }
    }
}

pub struct Erc20;

impl ContractKind for Erc20 {
    type Options = Erc20Options;

    const KIND: Kind = Kind::Erc20;

    fn build(opts: &Erc20Options) -> Result<Contract> {
        let access = opts
            .common
            .effective_access(Self::access_control_required(opts));

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        c.add_parent(
            ParentReference::new("ERC20", "@openzeppelin/contracts/token/ERC20/ERC20.sol")
                .with_args([string_literal(&opts.name), string_literal(&opts.symbol)]),
        );

        if opts.burnable {
            c.add_parent(ParentReference::new(
                "ERC20Burnable",
                "@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol",
            ));
        }

        if opts.snapshots {
            add_snapshots(&mut c, access);
        }

        if opts.pausable {
            let hook = functions::before_token_transfer();
            c.add_override_parent("ERC20", &hook);
            features::add_pausable(&mut c, access, GRANT, &[hook]);
        }

        if let Some(amount) = format_premint(&opts.premint, DecimalScale::Decimals) {
            c.add_constructor_code(format!("_mint(msg.sender, {});", amount));
        }

        if opts.mintable {
            let mint = functions::mint();
            require_access_control(&mut c, &mint, access, "MINTER", GRANT);
            c.add_function_code("_mint(to, amount);", &mint);
        }

        if opts.permit || opts.votes {
            c.add_parent(
                ParentReference::new(
                    "ERC20Permit",
                    "@openzeppelin/contracts/token/ERC20/extensions/draft-ERC20Permit.sol",
                )
                .with_args([string_literal(&opts.name)]),
            );
        }

        if opts.votes {
            c.add_parent(ParentReference::new(
                "ERC20Votes",
                "@openzeppelin/contracts/token/ERC20/extensions/ERC20Votes.sol",
            ));
            for hook in [
                functions::after_token_transfer(),
                functions::internal_mint(),
                functions::internal_burn(),
            ] {
                c.add_override_parent("ERC20", &hook);
                c.add_override_parent("ERC20Votes", &hook);
            }
        }

        if opts.flashmint {
            c.add_parent(ParentReference::new(
                "ERC20FlashMint",
                "@openzeppelin/contracts/token/ERC20/extensions/ERC20FlashMint.sol",
            ));
        }

        set_access_control(&mut c, access, GRANT);
        if opts.common.upgradeable {
            features::add_guarded_upgradeable(&mut c, access, GRANT);
        }

        Ok(c)
    }

    fn access_control_required(opts: &Erc20Options) -> bool {
        opts.mintable || opts.pausable || opts.snapshots || opts.common.upgradeable
    }
}

fn add_snapshots(c: &mut Contract, access: Access) {
    c.add_parent(ParentReference::new(
        "ERC20Snapshot",
        "@openzeppelin/contracts/token/ERC20/extensions/ERC20Snapshot.sol",
    ));

    let snapshot = functions::snapshot();
    require_access_control(c, &snapshot, access, "SNAPSHOT", GRANT);
    c.add_function_code("_snapshot();", &snapshot);

    let hook = functions::before_token_transfer();
    c.add_override_parent("ERC20", &hook);
    c.add_override_parent("ERC20Snapshot", &hook);
}

mod functions {
    use super::*;

    fn transfer_hook(name: &str) -> FunctionDescriptor {
        FunctionDescriptor::new(name, FunctionKind::Internal)
            .arg("address", "from")
            .arg("address", "to")
            .arg("uint256", "amount")
    }

    pub fn before_token_transfer() -> FunctionDescriptor {
        transfer_hook("_beforeTokenTransfer")
    }

    pub fn after_token_transfer() -> FunctionDescriptor {
        transfer_hook("_afterTokenTransfer")
    }

    pub fn internal_mint() -> FunctionDescriptor {
        FunctionDescriptor::new("_mint", FunctionKind::Internal)
            .arg("address", "to")
            .arg("uint256", "amount")
    }

    pub fn internal_burn() -> FunctionDescriptor {
        FunctionDescriptor::new("_burn", FunctionKind::Internal)
            .arg("address", "account")
            .arg("uint256", "amount")
    }

    pub fn snapshot() -> FunctionDescriptor {
        FunctionDescriptor::new("snapshot", FunctionKind::Public)
    }

    pub fn mint() -> FunctionDescriptor {
        FunctionDescriptor::new("mint", FunctionKind::Public)
            .arg("address", "to")
            .arg("uint256", "amount")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superwizard_contract::print_contract;

    #[test]
    fn test_default_is_permit_token() {
        let c = Erc20::build(&Erc20Options::default()).unwrap();
        let names: Vec<&str> = c.parents().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ERC20", "ERC20Permit"]);
        assert!(c.constructor_code().is_empty());
    }

    #[test]
    fn test_premint_uses_decimals() {
        let opts = Erc20Options {
            premint: "1.5".to_string(),
            ..Erc20Options::default()
        };
        let c = Erc20::build(&opts).unwrap();
        assert_eq!(
            c.constructor_code(),
            ["_mint(msg.sender, 15 * 10 ** (decimals() - 1));"]
        );
    }

    #[test]
    fn test_snapshots_and_pausable_share_hook() {
        let opts = Erc20Options {
            snapshots: true,
            pausable: true,
            ..Erc20Options::default()
        };
        let c = Erc20::build(&opts).unwrap();
        let hook = c
            .function(&functions::before_token_transfer().key())
            .unwrap();
        let bases: Vec<&str> = hook.override_parents.iter().map(String::as_str).collect();
        assert_eq!(bases, ["ERC20", "ERC20Snapshot"]);
        assert_eq!(hook.modifiers, vec!["whenNotPaused".to_string()]);

        let printed = print_contract(&c);
        assert!(printed.contains(
            "function _beforeTokenTransfer(address from, address to, uint256 amount) internal override(ERC20, ERC20Snapshot) whenNotPaused {\n        super._beforeTokenTransfer(from, to, amount);\n    }"
        ));
    }

    #[test]
    fn test_votes_overrides() {
        let opts = Erc20Options {
            permit: false,
            votes: true,
            ..Erc20Options::default()
        };
        let c = Erc20::build(&opts).unwrap();
        assert!(c.has_parent("ERC20Permit"));
        let overridden: Vec<&str> = c
            .functions()
            .filter(|f| f.override_parents.len() == 2)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(overridden, ["_afterTokenTransfer", "_mint", "_burn"]);
        assert!(!Erc20::access_control_required(&opts));
    }

    #[test]
    fn test_mintable_with_roles() {
        let opts = Erc20Options {
            mintable: true,
            common: CommonOptions {
                access: Access::Roles,
                ..CommonOptions::default()
            },
            ..Erc20Options::default()
        };
        let printed = Erc20::print(&opts).unwrap();
        assert!(printed.contains("_grantRole(DEFAULT_ADMIN_ROLE, msg.sender);\n        _grantRole(MINTER_ROLE, msg.sender);"));
        assert!(printed.contains("function mint(address to, uint256 amount) public onlyRole(MINTER_ROLE) {"));
    }
}
