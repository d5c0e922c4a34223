//! Custom: an empty contract to build on.

use serde::{Deserialize, Serialize};
use superwizard_contract::Contract;

use super::{ContractKind, Kind};
use crate::{CommonOptions, Result, RoleGrant, features, set_access_control};

const GRANT: RoleGrant = RoleGrant::GrantRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomOptions {
    pub name: String,
    pub pausable: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            name: "MyContract".to_string(),
            pausable: false,
            common: CommonOptions::default(),
        }
    }
}

pub struct Custom;

impl ContractKind for Custom {
    type Options = CustomOptions;

    const KIND: Kind = Kind::Custom;

    fn build(opts: &CustomOptions) -> Result<Contract> {
        let access = opts
            .common
            .effective_access(Self::access_control_required(opts));

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        if opts.pausable {
            features::add_pausable(&mut c, access, GRANT, &[]);
        }

        set_access_control(&mut c, access, GRANT);
        if opts.common.upgradeable {
            features::add_guarded_upgradeable(&mut c, access, GRANT);
        }

        Ok(c)
    }

    fn access_control_required(opts: &CustomOptions) -> bool {
        opts.pausable || opts.common.upgradeable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superwizard_contract::print_contract;

    #[test]
    fn test_default_is_empty() {
        let c = Custom::build(&CustomOptions::default()).unwrap();
        assert_eq!(
            print_contract(&c),
            "// SPDX-License-Identifier: MIT\npragma solidity ^0.8.9;\n\ncontract MyContract {\n}\n"
        );
    }

    #[test]
    fn test_pausable() {
        let opts = CustomOptions {
            pausable: true,
            ..CustomOptions::default()
        };
        let printed = Custom::print(&opts).unwrap();
        assert!(printed.contains("contract MyContract is Pausable, Ownable {"));
        assert!(printed.contains("function pause() public onlyOwner {\n        _pause();\n    }"));
    }
}
