//! ERC1155 multi token.

use serde::{Deserialize, Serialize};
use superwizard_contract::{
    Contract, FunctionDescriptor, FunctionKind, ParentReference, string_literal,
};

use super::{ContractKind, Kind};
use crate::{
    Access, CommonOptions, Result, RoleGrant, features, require_access_control,
    set_access_control,
};

const GRANT: RoleGrant = RoleGrant::GrantRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc1155Options {
    pub name: String,
    pub uri: String,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    pub supply: bool,
    pub updatable_uri: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for Erc1155Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            uri: String::new(),
            burnable: false,
            pausable: false,
            mintable: false,
            supply: false,
            updatable_uri: true,
            common: CommonOptions::default(),
        }
    }
}

pub struct Erc1155;

impl ContractKind for Erc1155 {
    type Options = Erc1155Options;

    const KIND: Kind = Kind::Erc1155;

    fn build(opts: &Erc1155Options) -> Result<Contract> {
        let access = opts
            .common
            .effective_access(Self::access_control_required(opts));

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        c.add_parent(
            ParentReference::new("ERC1155", "@openzeppelin/contracts/token/ERC1155/ERC1155.sol")
                .with_args([string_literal(&opts.uri)]),
        );

        if opts.updatable_uri {
            let set_uri = functions::set_uri();
            require_access_control(&mut c, &set_uri, access, "URI_SETTER", GRANT);
            c.add_function_code("_setURI(newuri);", &set_uri);
        }

        if opts.pausable {
            let hook = functions::before_token_transfer();
            c.add_override_parent("ERC1155", &hook);
            features::add_pausable(&mut c, access, GRANT, &[hook]);
        }

        if opts.burnable {
            c.add_parent(ParentReference::new(
                "ERC1155Burnable",
                "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Burnable.sol",
            ));
        }

        if opts.mintable {
            add_mintable(&mut c, access);
        }

        if opts.supply {
            c.add_parent(ParentReference::new(
                "ERC1155Supply",
                "@openzeppelin/contracts/token/ERC1155/extensions/ERC1155Supply.sol",
            ));
            let hook = functions::before_token_transfer();
            c.add_override_parent("ERC1155", &hook);
            c.add_override_parent("ERC1155Supply", &hook);
        }

        set_access_control(&mut c, access, GRANT);
        if opts.common.upgradeable {
            features::add_guarded_upgradeable(&mut c, access, GRANT);
        }

        Ok(c)
    }

    fn access_control_required(opts: &Erc1155Options) -> bool {
        opts.updatable_uri || opts.pausable || opts.mintable || opts.common.upgradeable
    }
}

fn add_mintable(c: &mut Contract, access: Access) {
    let mint = functions::mint();
    let mint_batch = functions::mint_batch();
    require_access_control(c, &mint, access, "MINTER", GRANT);
    require_access_control(c, &mint_batch, access, "MINTER", GRANT);
    c.add_function_code("_mint(account, id, amount, data);", &mint);
    c.add_function_code("_mintBatch(to, ids, amounts, data);", &mint_batch);
}

mod functions {
    use super::*;

    pub fn set_uri() -> FunctionDescriptor {
        FunctionDescriptor::new("setURI", FunctionKind::Public).arg("string memory", "newuri")
    }

    pub fn mint() -> FunctionDescriptor {
        FunctionDescriptor::new("mint", FunctionKind::Public)
            .arg("address", "account")
            .arg("uint256", "id")
            .arg("uint256", "amount")
            .arg("bytes memory", "data")
    }

    pub fn mint_batch() -> FunctionDescriptor {
        FunctionDescriptor::new("mintBatch", FunctionKind::Public)
            .arg("address", "to")
            .arg("uint256[] memory", "ids")
            .arg("uint256[] memory", "amounts")
            .arg("bytes memory", "data")
    }

    pub fn before_token_transfer() -> FunctionDescriptor {
        FunctionDescriptor::new("_beforeTokenTransfer", FunctionKind::Internal)
            .arg("address", "operator")
            .arg("address", "from")
            .arg("address", "to")
            .arg("uint256[] memory", "ids")
            .arg("uint256[] memory", "amounts")
            .arg("bytes memory", "data")
    }
}
