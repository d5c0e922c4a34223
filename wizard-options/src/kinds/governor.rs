//! Governor: on-chain governance with configurable voting parameters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use superwizard_contract::{
    Contract, FunctionArgument, FunctionDescriptor, FunctionKind, Mutability, ParentReference,
    string_literal,
};

use super::{ContractKind, Kind};
use crate::{CommonOptions, Error, Result, duration_to_blocks, features};

const EXTENSIONS: &str = "@openzeppelin/contracts/governance/extensions";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuorumMode {
    #[default]
    Percent,
    Absolute,
}

/// Token standard the voting token implements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VotesKind {
    #[default]
    Erc20Votes,
    Erc721Votes,
}

/// Timelock integration, written as `"openzeppelin"`, `"compound"` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timelock {
    None,
    #[default]
    OpenZeppelin,
    Compound,
}

impl Timelock {
    /// Governor extension and the constructor argument type it takes.
    fn extension(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Timelock::None => None,
            Timelock::OpenZeppelin => Some(("GovernorTimelockControl", "TimelockController")),
            Timelock::Compound => Some(("GovernorTimelockCompound", "ICompoundTimelock")),
        }
    }
}

impl Serialize for Timelock {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Timelock::None => serializer.serialize_bool(false),
            Timelock::OpenZeppelin => serializer.serialize_str("openzeppelin"),
            Timelock::Compound => serializer.serialize_str("compound"),
        }
    }
}

impl<'de> Deserialize<'de> for Timelock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(Timelock::None),
            Raw::Name(name) if name == "openzeppelin" => Ok(Timelock::OpenZeppelin),
            Raw::Name(name) if name == "compound" => Ok(Timelock::Compound),
            _ => Err(D::Error::custom(
                "timelock must be \"openzeppelin\", \"compound\" or false",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GovernorOptions {
    pub name: String,
    pub delay: String,
    pub period: String,
    /// Average seconds per block, used to convert durations to blocks.
    pub block_time: u32,
    pub proposal_threshold: String,
    pub decimals: u8,
    pub quorum_mode: QuorumMode,
    pub quorum_percent: u8,
    pub quorum_absolute: String,
    pub votes: VotesKind,
    pub timelock: Timelock,
    pub settings: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for GovernorOptions {
    fn default() -> Self {
        Self {
            name: "MyGovernor".to_string(),
            delay: "1 day".to_string(),
            period: "1 week".to_string(),
            block_time: 12,
            proposal_threshold: "0".to_string(),
            decimals: 18,
            quorum_mode: QuorumMode::Percent,
            quorum_percent: 4,
            quorum_absolute: String::new(),
            votes: VotesKind::Erc20Votes,
            timelock: Timelock::OpenZeppelin,
            settings: true,
            common: CommonOptions::default(),
        }
    }
}

impl GovernorOptions {
    /// Scale a whole token amount by the voting token's decimals.
    fn token_amount(&self, amount: &str) -> String {
        let is_zero = amount.bytes().all(|b| b == b'0');
        if is_zero || self.decimals == 0 || self.votes == VotesKind::Erc721Votes {
            amount.to_string()
        } else {
            format!("{}e{}", amount, self.decimals)
        }
    }
}

fn whole_number(option: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_option(option, value, "not a valid whole number"));
    }
    Ok(value.to_string())
}

pub struct Governor;

impl ContractKind for Governor {
    type Options = GovernorOptions;

    const KIND: Kind = Kind::Governor;

    fn build(opts: &GovernorOptions) -> Result<Contract> {
        let delay_blocks = duration_to_blocks("delay", &opts.delay, opts.block_time)?;
        let period_blocks = duration_to_blocks("period", &opts.period, opts.block_time)?;
        let threshold =
            opts.token_amount(&whole_number("proposalThreshold", &opts.proposal_threshold)?);

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        c.add_parent(
            ParentReference::new("Governor", "@openzeppelin/contracts/governance/Governor.sol")
                .with_args([string_literal(&opts.name)]),
        );

        if opts.settings {
            c.add_parent(extension("GovernorSettings").with_args([
                format!("{} /* {} */", delay_blocks, opts.delay.trim()),
                format!("{} /* {} */", period_blocks, opts.period.trim()),
                threshold.clone(),
            ]));
            for f in [functions::voting_delay(Mutability::View), functions::voting_period(Mutability::View)] {
                c.add_override_parent("IGovernor", &f);
                c.add_override_parent("GovernorSettings", &f);
            }
        } else {
            c.add_override(
                format!("return {}; // {}", delay_blocks, opts.delay.trim()),
                &functions::voting_delay(Mutability::Pure),
            );
            c.add_override(
                format!("return {}; // {}", period_blocks, opts.period.trim()),
                &functions::voting_period(Mutability::Pure),
            );
        }

        c.add_parent(extension("GovernorCountingSimple"));

        c.add_constructor_argument(FunctionArgument::new("IVotes", "_token"));
        c.add_parent(extension("GovernorVotes").with_args(["_token"]));

        add_quorum(&mut c, opts)?;

        if let Some((name, arg_type)) = opts.timelock.extension() {
            c.add_constructor_argument(FunctionArgument::new(arg_type, "_timelock"));
            c.add_parent(extension(name).with_args(["_timelock"]));
            for f in functions::timelock_overrides() {
                c.add_override_parent("Governor", &f);
                c.add_override_parent(name, &f);
            }
        }

        if opts.settings {
            let threshold = functions::proposal_threshold(Mutability::View);
            c.add_override_parent("Governor", &threshold);
            c.add_override_parent("GovernorSettings", &threshold);
        } else if !threshold.bytes().all(|b| b == b'0') {
            c.add_override(
                format!("return {};", threshold),
                &functions::proposal_threshold(Mutability::Pure),
            );
        }

        if opts.common.upgradeable {
            let authorize = features::add_upgradeable(&mut c);
            c.add_modifier("onlyGovernance", &authorize);
        }

        Ok(c)
    }

    fn access_control_required(_: &GovernorOptions) -> bool {
        false
    }
}

fn extension(name: &str) -> ParentReference {
    ParentReference::new(name, format!("{}/{}.sol", EXTENSIONS, name))
}

fn add_quorum(c: &mut Contract, opts: &GovernorOptions) -> Result<()> {
    match opts.quorum_mode {
        QuorumMode::Percent => {
            if opts.quorum_percent > 100 {
                return Err(Error::invalid_option(
                    "quorumPercent",
                    opts.quorum_percent.to_string(),
                    "percentage must be between 0 and 100",
                ));
            }
            c.add_parent(
                extension("GovernorVotesQuorumFraction")
                    .with_args([opts.quorum_percent.to_string()]),
            );
            let quorum = functions::quorum(Mutability::View);
            c.add_override_parent("IGovernor", &quorum);
            c.add_override_parent("GovernorVotesQuorumFraction", &quorum);
        }
        QuorumMode::Absolute => {
            let amount = whole_number("quorumAbsolute", &opts.quorum_absolute)?;
            c.add_override(
                format!("return {};", opts.token_amount(&amount)),
                &functions::quorum(Mutability::Pure),
            );
        }
    }
    Ok(())
}

mod functions {
    use super::*;

    fn uint_getter(name: &str, mutability: Mutability) -> FunctionDescriptor {
        FunctionDescriptor::new(name, FunctionKind::Public)
            .mutability(mutability)
            .returns("uint256")
    }

    pub fn voting_delay(mutability: Mutability) -> FunctionDescriptor {
        uint_getter("votingDelay", mutability)
    }

    pub fn voting_period(mutability: Mutability) -> FunctionDescriptor {
        uint_getter("votingPeriod", mutability)
    }

    pub fn proposal_threshold(mutability: Mutability) -> FunctionDescriptor {
        uint_getter("proposalThreshold", mutability)
    }

    pub fn quorum(mutability: Mutability) -> FunctionDescriptor {
        FunctionDescriptor::new("quorum", FunctionKind::Public)
            .arg("uint256", "blockNumber")
            .mutability(mutability)
            .returns("uint256")
    }

    /// Functions both `Governor` and a timelock extension implement.
    pub fn timelock_overrides() -> [FunctionDescriptor; 5] {
        [
            FunctionDescriptor::new("state", FunctionKind::Public)
                .arg("uint256", "proposalId")
                .mutability(Mutability::View)
                .returns("ProposalState"),
            FunctionDescriptor::new("_execute", FunctionKind::Internal)
                .arg("uint256", "proposalId")
                .arg("address[] memory", "targets")
                .arg("uint256[] memory", "values")
                .arg("bytes[] memory", "calldatas")
                .arg("bytes32", "descriptionHash"),
            FunctionDescriptor::new("_cancel", FunctionKind::Internal)
                .arg("address[] memory", "targets")
                .arg("uint256[] memory", "values")
                .arg("bytes[] memory", "calldatas")
                .arg("bytes32", "descriptionHash")
                .returns("uint256"),
            FunctionDescriptor::new("_executor", FunctionKind::Internal)
                .mutability(Mutability::View)
                .returns("address"),
            FunctionDescriptor::new("supportsInterface", FunctionKind::Public)
                .arg("bytes4", "interfaceId")
                .mutability(Mutability::View)
                .returns("bool"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_parent() {
        let c = Governor::build(&GovernorOptions::default()).unwrap();
        let settings = c
            .parents()
            .iter()
            .find(|p| p.name == "GovernorSettings")
            .unwrap();
        assert_eq!(
            settings.constructor_args,
            vec!["7200 /* 1 day */", "50400 /* 1 week */", "0"]
        );

        let args: Vec<String> = c.constructor_args().iter().map(ToString::to_string).collect();
        assert_eq!(args, ["IVotes _token", "TimelockController _timelock"]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_without_settings() {
        let opts = GovernorOptions {
            settings: false,
            proposal_threshold: "5".to_string(),
            timelock: Timelock::None,
            ..GovernorOptions::default()
        };
        let printed = Governor::print(&opts).unwrap();
        assert!(printed.contains(
            "function votingDelay() public pure override returns (uint256) {\n        return 7200; // 1 day\n    }"
        ));
        assert!(printed.contains("return 5e18;"));
        assert!(!printed.contains("_executor"));
    }

    #[test]
    fn test_absolute_quorum() {
        let opts = GovernorOptions {
            quorum_mode: QuorumMode::Absolute,
            quorum_absolute: "100".to_string(),
            votes: VotesKind::Erc721Votes,
            ..GovernorOptions::default()
        };
        let c = Governor::build(&opts).unwrap();
        let quorum = c
            .function(&functions::quorum(Mutability::Pure).key())
            .unwrap();
        assert_eq!(quorum.code, vec!["return 100;".to_string()]);
        assert!(!c.has_parent("GovernorVotesQuorumFraction"));
    }

    #[test]
    fn test_invalid_options() {
        let bad_delay = GovernorOptions {
            delay: "soon".to_string(),
            ..GovernorOptions::default()
        };
        assert_eq!(
            Governor::build(&bad_delay).unwrap_err().to_string(),
            "invalid delay 'soon'"
        );

        let bad_percent = GovernorOptions {
            quorum_percent: 101,
            ..GovernorOptions::default()
        };
        assert!(Governor::build(&bad_percent).is_err());

        let missing_absolute = GovernorOptions {
            quorum_mode: QuorumMode::Absolute,
            ..GovernorOptions::default()
        };
        assert!(Governor::build(&missing_absolute).is_err());
    }

    #[test]
    fn test_timelock_serde() {
        #[derive(Deserialize)]
        struct Holder {
            timelock: Timelock,
        }
        let parse = |s: &str| toml::from_str::<Holder>(s).map(|h| h.timelock);
        assert_eq!(parse("timelock = false").unwrap(), Timelock::None);
        assert_eq!(parse("timelock = \"compound\"").unwrap(), Timelock::Compound);
        assert!(parse("timelock = true").is_err());
    }
}
