//! Matic bridged super token.
//!
//! The contract is fixed apart from its name and header, so it is rendered
//! whole and stored through the omit-all escape hatch.

use serde::{Deserialize, Serialize};
use superwizard_contract::{Contract, Info, SOLIDITY_VERSION};

use super::{ContractKind, Kind};
use crate::{CommonOptions, Result};

const BODY: &str = r#"    address public childChainManager;

    constructor(address childChainManager_) {
        childChainManager = childChainManager_;
    }

    function initialize(address factory, string memory name, string memory symbol)
        external
    {
        _initialize(factory, name, symbol);
    }

    function deposit(address user, bytes calldata depositData) external override {
        require(msg.sender == childChainManager, "MBST: no permission to deposit");
        uint256 amount = abi.decode(depositData, (uint256));
        ISuperToken(address(this)).selfMint(user, amount, new bytes(0));
    }

    function withdraw(uint256 amount) external override {
        ISuperToken(address(this)).selfBurn(msg.sender, amount, new bytes(0));
    }

    function updateChildChainManager(address newChildChainManager) external override {
        address host = ISuperToken(address(this)).getHost();
        address gov = address(ISuperfluid(host).getGovernance());
        require(msg.sender == gov, "MBST: only governance allowed");

        childChainManager = newChildChainManager;
        emit ChildChainManagerChanged(newChildChainManager);
    }
}
"#;

const IMPORTS: [&str; 3] = [
    r#"import { SuperTokenBase, ISuperToken } from "github.com/superfluid-finance/custom-supertokens/contracts/base/SuperTokenBase.sol";"#,
    r#"import { IMaticBridgedSuperTokenCustom } from "github.com/superfluid-finance/custom-supertokens/contracts/interfaces/IMaticBridgedSuperToken.sol";"#,
    r#"import { ISuperfluid } from "github.com/superfluid-finance/protocol-monorepo/packages/ethereum-contracts/contracts/interfaces/superfluid/ISuperfluid.sol";"#,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaticBridgedOptions {
    pub name: String,
    pub symbol: String,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for MaticBridgedOptions {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            common: CommonOptions::default(),
        }
    }
}

pub struct MaticBridgedSuperToken;

impl ContractKind for MaticBridgedSuperToken {
    type Options = MaticBridgedOptions;

    const KIND: Kind = Kind::MaticBridged;

    fn build(opts: &MaticBridgedOptions) -> Result<Contract> {
        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());
        c.set_omit_all(full_source(&opts.name, &opts.common.info));
        Ok(c)
    }

    fn access_control_required(_: &MaticBridgedOptions) -> bool {
        false
    }
}

fn full_source(name: &str, info: &Info) -> String {
    let mut out = format!(
        "// SPDX-License-Identifier: {}\npragma solidity {};\n\n",
        info.license, SOLIDITY_VERSION
    );
    for import in IMPORTS {
        out.push_str(import);
        out.push('\n');
    }
    out.push('\n');
    if let Some(contact) = info.contact() {
        out.push_str(&format!("/// @custom:security-contact {}\n", contact));
    }
    out.push_str(&format!(
        "contract {} is SuperTokenBase, IMaticBridgedSuperTokenCustom {{\n",
        name
    ));
    out.push_str(BODY);
    out
}
