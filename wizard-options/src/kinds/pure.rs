//! Pure super token: a Superfluid `SuperTokenBase` with no underlying asset.

use serde::{Deserialize, Serialize};
use superwizard_contract::{
    Contract, FunctionArgument, FunctionDescriptor, FunctionKind, ParentReference, string_literal,
};

use super::{ContractKind, Kind};
use crate::{
    CommonOptions, DecimalScale, Result, RoleGrant, common::amount, features,
    format_premint, require_access_control, set_access_control,
};

pub(super) const SUPER_TOKEN_BASE_PATH: &str =
    "github.com/superfluid-finance/custom-supertokens/contracts/base/SuperTokenBase.sol";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PureOptions {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "amount")]
    pub initial_supply: String,
    /// Premint and mint recipient; empty means `msg.sender`.
    pub receiver: String,
    pub mintable: bool,
    pub burnable: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for PureOptions {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            initial_supply: "1000".to_string(),
            receiver: "msg.sender".to_string(),
            mintable: false,
            burnable: false,
            common: CommonOptions::default(),
        }
    }
}

impl PureOptions {
    fn receiver(&self) -> &str {
        match self.receiver.trim() {
            "" => "msg.sender",
            receiver => receiver,
        }
    }
}

pub struct PureSuperToken;

impl ContractKind for PureSuperToken {
    type Options = PureOptions;

    const KIND: Kind = Kind::Pure;

    fn build(opts: &PureOptions) -> Result<Contract> {
        let access = opts
            .common
            .effective_access(Self::access_control_required(opts));
        let grant = RoleGrant::SetupRole;

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        c.add_parent(ParentReference::new("SuperTokenBase", SUPER_TOKEN_BASE_PATH));
        c.add_constructor_argument(FunctionArgument::new("address", "factory"));
        c.add_constructor_code(format!(
            "_initialize(factory, {}, {});",
            string_literal(&opts.name),
            string_literal(&opts.symbol)
        ));

        if let Some(amount) = format_premint(&opts.initial_supply, DecimalScale::Fixed(18)) {
            c.add_constructor_code(format!("_mint({}, {});", opts.receiver(), amount));
        }

        if opts.mintable {
            let mint = functions::mint();
            c.add_function_code(
                format!("_mint({}, {}, userData);", opts.receiver(), opts.initial_supply),
                &mint,
            );
            require_access_control(&mut c, &mint, access, "MINTER", grant);
        }

        if opts.burnable {
            let burn = functions::burn();
            c.add_function_code("_burn(msg.sender, amount, userData);", &burn);
            require_access_control(&mut c, &burn, access, "BURNER", grant);
        }

        set_access_control(&mut c, access, grant);
        if opts.common.upgradeable {
            features::add_guarded_upgradeable(&mut c, access, grant);
        }

        Ok(c)
    }

    fn access_control_required(opts: &PureOptions) -> bool {
        opts.mintable || opts.burnable || opts.common.upgradeable
    }
}

pub(super) mod functions {
    use super::*;

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
