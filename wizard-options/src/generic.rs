//! Dispatch over every contract kind.

use serde::Serialize;
use superwizard_contract::{Contract, print_contract};
use tracing::debug;

use crate::{
    CappedSuperToken, CommonOptions, ContractKind, Custom, Erc20, Erc721, Erc1155, Error,
    Governor, Kind, MaticBridgedSuperToken, PureSuperToken, Result,
    kinds::{
        CappedOptions, CustomOptions, Erc20Options, Erc721Options, Erc1155Options,
        GovernorOptions, MaticBridgedOptions, PureOptions,
    },
};

/// Options for any kind, tagged by the kind they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericOptions {
    Pure(PureOptions),
    Erc20(Erc20Options),
    Erc721(Erc721Options),
    Erc1155(Erc1155Options),
    Governor(GovernorOptions),
    Capped(CappedOptions),
    MaticBridged(MaticBridgedOptions),
    Custom(CustomOptions),
}

macro_rules! for_each_kind {
    ($opts:expr, $o:ident => $body:expr) => {
        match $opts {
            GenericOptions::Pure($o) => $body,
            GenericOptions::Erc20($o) => $body,
            GenericOptions::Erc721($o) => $body,
            GenericOptions::Erc1155($o) => $body,
            GenericOptions::Governor($o) => $body,
            GenericOptions::Capped($o) => $body,
            GenericOptions::MaticBridged($o) => $body,
            GenericOptions::Custom($o) => $body,
        }
    };
}

impl GenericOptions {
    /// The default options of `kind`.
    pub fn defaults(kind: Kind) -> Self {
        match kind {
            Kind::Pure => Self::Pure(PureSuperToken::defaults()),
            Kind::Erc20 => Self::Erc20(Erc20::defaults()),
            Kind::Erc721 => Self::Erc721(Erc721::defaults()),
            Kind::Erc1155 => Self::Erc1155(Erc1155::defaults()),
            Kind::Governor => Self::Governor(Governor::defaults()),
            Kind::Capped => Self::Capped(CappedSuperToken::defaults()),
            Kind::MaticBridged => Self::MaticBridged(MaticBridgedSuperToken::defaults()),
            Kind::Custom => Self::Custom(Custom::defaults()),
        }
    }

    /// Deserialize the options of `kind` from a TOML document.
    ///
    /// Keys belonging to no option, such as `kind` itself, are ignored.
    pub fn from_toml(kind: Kind, src: &str) -> std::result::Result<Self, toml::de::Error> {
        Ok(match kind {
            Kind::Pure => Self::Pure(toml::from_str(src)?),
            Kind::Erc20 => Self::Erc20(toml::from_str(src)?),
            Kind::Erc721 => Self::Erc721(toml::from_str(src)?),
            Kind::Erc1155 => Self::Erc1155(toml::from_str(src)?),
            Kind::Governor => Self::Governor(toml::from_str(src)?),
            Kind::Capped => Self::Capped(toml::from_str(src)?),
            Kind::MaticBridged => Self::MaticBridged(toml::from_str(src)?),
            Kind::Custom => Self::Custom(toml::from_str(src)?),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Pure(_) => Kind::Pure,
            Self::Erc20(_) => Kind::Erc20,
            Self::Erc721(_) => Kind::Erc721,
            Self::Erc1155(_) => Kind::Erc1155,
            Self::Governor(_) => Kind::Governor,
            Self::Capped(_) => Kind::Capped,
            Self::MaticBridged(_) => Kind::MaticBridged,
            Self::Custom(_) => Kind::Custom,
        }
    }

    pub fn name(&self) -> &str {
        for_each_kind!(self, o => o.name.as_str())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        for_each_kind!(self, o => o.name = name)
    }

    /// Set the token symbol. Returns `false` for kinds without one.
    pub fn set_symbol(&mut self, symbol: impl Into<String>) -> bool {
        let symbol = symbol.into();
        match self {
            Self::Pure(o) => o.symbol = symbol,
            Self::Erc20(o) => o.symbol = symbol,
            Self::Erc721(o) => o.symbol = symbol,
            Self::Capped(o) => o.symbol = symbol,
            Self::MaticBridged(o) => o.symbol = symbol,
            Self::Erc1155(_) | Self::Governor(_) | Self::Custom(_) => return false,
        }
        true
    }

    pub fn common(&self) -> &CommonOptions {
        for_each_kind!(self, o => &o.common)
    }

    pub fn access_control_required(&self) -> bool {
        match self {
            Self::Pure(o) => PureSuperToken::access_control_required(o),
            Self::Erc20(o) => Erc20::access_control_required(o),
            Self::Erc721(o) => Erc721::access_control_required(o),
            Self::Erc1155(o) => Erc1155::access_control_required(o),
            Self::Governor(o) => Governor::access_control_required(o),
            Self::Capped(o) => CappedSuperToken::access_control_required(o),
            Self::MaticBridged(o) => MaticBridgedSuperToken::access_control_required(o),
            Self::Custom(o) => Custom::access_control_required(o),
        }
    }

    /// Render as an option file, `kind` first.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        fn body<T: Serialize>(opts: &T) -> std::result::Result<String, toml::ser::Error> {
            toml::to_string(opts)
        }
        let body = for_each_kind!(self, o => body(o))?;
        Ok(format!("kind = \"{}\"\n{}", self.kind(), body))
    }
}

/// Build the contract model for any kind and check it.
pub fn build_generic(opts: &GenericOptions) -> Result<Contract> {
    debug!(kind = %opts.kind(), name = opts.name(), "building contract");
    let contract = match opts {
        GenericOptions::Pure(o) => PureSuperToken::build(o),
        GenericOptions::Erc20(o) => Erc20::build(o),
        GenericOptions::Erc721(o) => Erc721::build(o),
        GenericOptions::Erc1155(o) => Erc1155::build(o),
        GenericOptions::Governor(o) => Governor::build(o),
        GenericOptions::Capped(o) => CappedSuperToken::build(o),
        GenericOptions::MaticBridged(o) => MaticBridgedSuperToken::build(o),
        GenericOptions::Custom(o) => Custom::build(o),
    }?;
    contract
        .validate()
        .map_err(|e| Box::new(Error::from(e)))?;
    Ok(contract)
}

/// Build and print the contract for any kind.
pub fn print_generic(opts: &GenericOptions) -> Result<String> {
    build_generic(opts).map(|c| print_contract(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_kind() {
        for kind in Kind::ALL {
            assert_eq!(GenericOptions::defaults(kind).kind(), kind);
        }
    }

    #[test]
    fn test_every_default_builds() {
        for kind in Kind::ALL {
            let printed = print_generic(&GenericOptions::defaults(kind)).unwrap();
            assert!(printed.starts_with("// SPDX-License-Identifier: MIT\n"), "{kind}");
        }
    }

    #[test]
    fn test_set_name_and_symbol() {
        let mut opts = GenericOptions::defaults(Kind::Erc20);
        opts.set_name("Gold");
        assert!(opts.set_symbol("GLD"));
        assert_eq!(opts.name(), "Gold");

        let mut gov = GenericOptions::defaults(Kind::Governor);
        assert!(!gov.set_symbol("GOV"));
    }

    #[test]
    fn test_invalid_name_rejected() {
        let mut opts = GenericOptions::defaults(Kind::Custom);
        opts.set_name("My Contract");
        let err = build_generic(&opts).unwrap_err();
        assert!(matches!(*err, Error::Contract(_)));
    }

    #[test]
    fn test_to_toml_round_trip() {
        for kind in Kind::ALL {
            let opts = GenericOptions::defaults(kind);
            let text = opts.to_toml().unwrap();
            assert!(text.starts_with(&format!("kind = \"{}\"\n", kind)));
            assert_eq!(GenericOptions::from_toml(kind, &text).unwrap(), opts);
        }
    }
}
