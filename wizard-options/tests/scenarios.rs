//! End-to-end generation scenarios, from options to source text.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use superwizard_options::{
    Access, CappedOptions, CommonOptions, ContractKind, GenericOptions, Kind, PureOptions,
    PureSuperToken, parse_options, print_generic,
};

fn roles() -> CommonOptions {
    CommonOptions {
        access: Access::Roles,
        ..CommonOptions::default()
    }
}

#[test]
fn test_default_pure_token() {
    let printed = print_generic(&GenericOptions::defaults(Kind::Pure)).unwrap();
    insta::assert_snapshot!(printed, @r###"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.9;

    import "github.com/superfluid-finance/custom-supertokens/contracts/base/SuperTokenBase.sol";

    contract MyToken is SuperTokenBase {
        constructor(address factory) {
            _initialize(factory, "MyToken", "MTK");
            _mint(msg.sender, 1000 * 10 ** 18);
        }
    }
    "###);
}

#[test]
fn test_mintable_pure_token_interpolates_options() {
    let opts = GenericOptions::Pure(PureOptions {
        initial_supply: "500".to_string(),
        receiver: "0x5b38Da6a701c568545dCfcB03FcB875f56beddC4".to_string(),
        mintable: true,
        ..PureOptions::default()
    });
    insta::assert_snapshot!(print_generic(&opts).unwrap(), @r###"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.9;

    import "github.com/superfluid-finance/custom-supertokens/contracts/base/SuperTokenBase.sol";
    import "@openzeppelin/contracts/access/Ownable.sol";

    contract MyToken is SuperTokenBase, Ownable {
        constructor(address factory) {
            _initialize(factory, "MyToken", "MTK");
            _mint(0x5b38Da6a701c568545dCfcB03FcB875f56beddC4, 500 * 10 ** 18);
        }

        function mint(address receiver, uint256 amount, bytes memory userData) external onlyOwner {
            _mint(0x5b38Da6a701c568545dCfcB03FcB875f56beddC4, 500, userData);
        }
    }
    "###);
}

#[test]
fn test_capped_token_with_roles() {
    let opts = GenericOptions::Capped(CappedOptions {
        burnable: true,
        common: roles(),
        ..CappedOptions::default()
    });
    insta::assert_snapshot!(print_generic(&opts).unwrap(), @r###"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.9;

    import "github.com/superfluid-finance/custom-supertokens/contracts/CappedSuperToken.sol";
    import "@openzeppelin/contracts/access/AccessControl.sol";

    contract MyToken is CappedSuperToken, AccessControl {
        bytes32 public constant MINTER_ROLE = keccak256("MINTER_ROLE");
        bytes32 public constant BURNER_ROLE = keccak256("BURNER_ROLE");

        constructor() {
            _mint(msg.sender, 19 * 10 ** 18);
            _setupRole(DEFAULT_ADMIN_ROLE, msg.sender);
            _setupRole(MINTER_ROLE, msg.sender);
            _setupRole(BURNER_ROLE, msg.sender);
        }

        function initialize(address factory, string memory name, string memory symbol, uint256 _maxSupply) external override {
            _initialize(factory, "MyToken", "MTK");
            maxSupply = 100;
        }

        function burn(uint256 amount, bytes memory userData) external onlyRole(BURNER_ROLE) {
            _burn(msg.sender, amount, userData);
        }
    }
    "###);
}

#[test]
fn test_unknown_kind_produces_no_output() {
    let err = parse_options("kind = \"ERC42\"\nname = \"X\"\n", "x.toml").unwrap_err();
    assert!(err.is_unknown_kind());
    assert_eq!(err.to_string(), "unknown kind 'ERC42'");
}

#[test]
fn test_default_governor() {
    let printed = print_generic(&GenericOptions::defaults(Kind::Governor)).unwrap();
    insta::assert_snapshot!(printed, @r###"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.9;

    import "@openzeppelin/contracts/governance/Governor.sol";
    import "@openzeppelin/contracts/governance/extensions/GovernorSettings.sol";
    import "@openzeppelin/contracts/governance/extensions/GovernorCountingSimple.sol";
    import "@openzeppelin/contracts/governance/extensions/GovernorVotes.sol";
    import "@openzeppelin/contracts/governance/extensions/GovernorVotesQuorumFraction.sol";
    import "@openzeppelin/contracts/governance/extensions/GovernorTimelockControl.sol";

    contract MyGovernor is Governor, GovernorSettings, GovernorCountingSimple, GovernorVotes, GovernorVotesQuorumFraction, GovernorTimelockControl {
        constructor(IVotes _token, TimelockController _timelock) Governor("MyGovernor") GovernorSettings(7200 /* 1 day */, 50400 /* 1 week */, 0) GovernorVotes(_token) GovernorVotesQuorumFraction(4) GovernorTimelockControl(_timelock) {}

        function votingDelay() public view override(IGovernor, GovernorSettings) returns (uint256) {
            return super.votingDelay();
        }

        function votingPeriod() public view override(IGovernor, GovernorSettings) returns (uint256) {
            return super.votingPeriod();
        }

        function quorum(uint256 blockNumber) public view override(IGovernor, GovernorVotesQuorumFraction) returns (uint256) {
            return super.quorum(blockNumber);
        }

        function state(uint256 proposalId) public view override(Governor, GovernorTimelockControl) returns (ProposalState) {
            return super.state(proposalId);
        }

        function _execute(uint256 proposalId, address[] memory targets, uint256[] memory values, bytes[] memory calldatas, bytes32 descriptionHash) internal override(Governor, GovernorTimelockControl) {
            super._execute(proposalId, targets, values, calldatas, descriptionHash);
        }

        function _cancel(address[] memory targets, uint256[] memory values, bytes[] memory calldatas, bytes32 descriptionHash) internal override(Governor, GovernorTimelockControl) returns (uint256) {
            return super._cancel(targets, values, calldatas, descriptionHash);
        }

        function _executor() internal view override(Governor, GovernorTimelockControl) returns (address) {
            return super._executor();
        }

        function supportsInterface(bytes4 interfaceId) public view override(Governor, GovernorTimelockControl) returns (bool) {
            return super.supportsInterface(interfaceId);
        }

        function proposalThreshold() public view override(Governor, GovernorSettings) returns (uint256) {
            return super.proposalThreshold();
        }
    }
    "###);
}

#[test]
fn test_generation_is_deterministic() {
    let src = r#"
kind = "ERC721"
name = "Art"
symbol = "ART"
mintable = true
incremental = true
enumerable = true
uriStorage = true
pausable = true
votes = true
access = "roles"
upgradeable = true
"#;
    let first = print_generic(&parse_options(src, "art.toml").unwrap()).unwrap();
    let second = print_generic(&parse_options(src, "art.toml").unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_premint_boundaries() {
    let print = |supply: &str| {
        PureSuperToken::print(&PureOptions {
            initial_supply: supply.to_string(),
            ..PureOptions::default()
        })
        .unwrap()
    };

    for skipped in ["0", "0.000", "", "1,5", "1e-3", "ten"] {
        assert!(!print(skipped).contains("_mint("), "{skipped:?}");
    }
    assert!(print("100").contains("_mint(msg.sender, 100 * 10 ** 18);"));
    assert!(print("0.25").contains("_mint(msg.sender, 25 * 10 ** (18 - 2));"));
    assert!(print("2e6").contains("_mint(msg.sender, 2000000 * 10 ** 18);"));
}

#[test]
fn test_huge_premint_exponent_is_skipped() {
    let src = "kind = \"PURE\"\ninitialSupply = \"1e99999999999\"\n";
    let printed = print_generic(&parse_options(src, "huge.toml").unwrap()).unwrap();
    assert!(printed.contains("_initialize(factory, \"MyToken\", \"MTK\");"));
    assert!(!printed.contains("_mint("));
}

#[test]
fn test_option_file_to_source() {
    let src = r#"
kind = "ERC20"
name = "Gold"
symbol = "GLD"
premint = 1000
mintable = true

[info]
license = "Apache-2.0"
securityContact = "security@gold.example"
"#;
    let printed = print_generic(&parse_options(src, "gold.toml").unwrap()).unwrap();
    insta::assert_snapshot!(printed, @r###"
    // SPDX-License-Identifier: Apache-2.0
    pragma solidity ^0.8.9;

    import "@openzeppelin/contracts/token/ERC20/ERC20.sol";
    import "@openzeppelin/contracts/access/Ownable.sol";
    import "@openzeppelin/contracts/token/ERC20/extensions/draft-ERC20Permit.sol";

    /// @custom:security-contact security@gold.example
    contract Gold is ERC20, Ownable, ERC20Permit {
        constructor() ERC20("Gold", "GLD") ERC20Permit("Gold") {
            _mint(msg.sender, 1000 * 10 ** decimals());
        }

        function mint(address to, uint256 amount) public onlyOwner {
            _mint(to, amount);
        }
    }
    "###);
}
