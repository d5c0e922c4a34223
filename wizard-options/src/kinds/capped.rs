//! Capped super token: a super token with a maximum supply.

use serde::{Deserialize, Serialize};
use superwizard_contract::{
    Contract, FunctionDescriptor, FunctionKind, ParentReference, string_literal,
};

use super::{ContractKind, Kind};
use crate::{
    Access, CommonOptions, DecimalScale, Result, RoleGrant, common::amount, declare_role,
    features, format_premint, require_access_control, set_access_control,
};

const CAPPED_SUPER_TOKEN_PATH: &str =
    "github.com/superfluid-finance/custom-supertokens/contracts/CappedSuperToken.sol";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CappedOptions {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "amount")]
    pub initial_supply: String,
    #[serde(deserialize_with = "amount")]
    pub max_supply: String,
    pub receiver: String,
    pub mintable: bool,
    pub burnable: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for CappedOptions {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            initial_supply: "19".to_string(),
            max_supply: "100".to_string(),
            receiver: "0x1A6784925814a13334190Fd249ae0333B90b6443".to_string(),
            mintable: false,
            burnable: false,
            common: CommonOptions::default(),
        }
    }
}

pub struct CappedSuperToken;

impl ContractKind for CappedSuperToken {
    type Options = CappedOptions;

    const KIND: Kind = Kind::Capped;

    fn build(opts: &CappedOptions) -> Result<Contract> {
        let access = opts
            .common
            .effective_access(Self::access_control_required(opts));
        let grant = RoleGrant::SetupRole;
        let receiver = match opts.receiver.trim() {
            "" => CappedOptions::default().receiver,
            receiver => receiver.to_string(),
        };

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        let initialize = functions::initialize();
        c.add_parent(ParentReference::new("CappedSuperToken", CAPPED_SUPER_TOKEN_PATH));
        c.add_override(
            format!(
                "_initialize(factory, {}, {});",
                string_literal(&opts.name),
                string_literal(&opts.symbol)
            ),
            &initialize,
        );
        c.add_function_code(format!("maxSupply = {};", opts.max_supply), &initialize);

        if let Some(amount) = format_premint(&opts.initial_supply, DecimalScale::Fixed(18)) {
            c.add_constructor_code(format!("_mint(msg.sender, {});", amount));
        }

        set_access_control(&mut c, access, grant);
        if access == Access::Roles {
            declare_role(&mut c, "MINTER", grant);
        }

        if opts.mintable {
            let mint = functions::mint();
            c.add_function_code(
                format!(
                    "if (_totalSupply() + {} > {}) revert SupplyCapped();",
                    opts.initial_supply, opts.max_supply
                ),
                &mint,
            );
            c.add_function_code(
                format!("_mint({}, {}, userData);", receiver, opts.initial_supply),
                &mint,
            );
            require_access_control(&mut c, &mint, access, "MINTER", grant);
        }

        if opts.burnable {
            let burn = functions::burn();
            c.add_function_code("_burn(msg.sender, amount, userData);", &burn);
            require_access_control(&mut c, &burn, access, "BURNER", grant);
        }

        if opts.common.upgradeable {
            features::add_guarded_upgradeable(&mut c, access, grant);
        }

        Ok(c)
    }

    fn access_control_required(opts: &CappedOptions) -> bool {
        opts.mintable || opts.burnable || opts.common.upgradeable
    }
}

mod functions {
    use super::*;

    pub fn initialize() -> FunctionDescriptor {
        FunctionDescriptor::new("initialize", FunctionKind::External)
            .arg("address", "factory")
            .arg("string memory", "name")
            .arg("string memory", "symbol")
            .arg("uint256", "_maxSupply")
    }

    pub fn mint() -> FunctionDescriptor {
        FunctionDescriptor::new("mint", FunctionKind::External)
            .arg("address", "receiver")
            .arg("uint256", "amount")
            .arg("bytes memory", "userData")
    }

    pub fn burn() -> FunctionDescriptor {
        FunctionDescriptor::new("burn", FunctionKind::External)
            .arg("uint256", "amount")
            .arg("bytes memory", "userData")
    }
}
