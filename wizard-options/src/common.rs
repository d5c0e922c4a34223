//! Options shared by every contract kind.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use superwizard_contract::Info;

/// Access-control mode of a generated contract.
///
/// Written in option files as `"ownable"`, `"roles"` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    None,
    Ownable,
    Roles,
}

impl Access {
    /// The mode actually applied when a feature needs access control.
    pub fn or_ownable(self) -> Self {
        match self {
            Access::None => Access::Ownable,
            other => other,
        }
    }
}

impl Serialize for Access {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Access::None => serializer.serialize_bool(false),
            Access::Ownable => serializer.serialize_str("ownable"),
            Access::Roles => serializer.serialize_str("roles"),
        }
    }
}

impl<'de> Deserialize<'de> for Access {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(Access::None),
            Raw::Name(name) if name == "ownable" => Ok(Access::Ownable),
            Raw::Name(name) if name == "roles" => Ok(Access::Roles),
            Raw::Flag(true) => Err(D::Error::custom(
                "access must be \"ownable\", \"roles\" or false",
            )),
            Raw::Name(name) => Err(D::Error::custom(format!(
                "unknown access '{}', expected \"ownable\", \"roles\" or false",
                name
            ))),
        }
    }
}

/// Fields every kind's options carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonOptions {
    pub access: Access,
    pub upgradeable: bool,
    pub info: Info,
}

impl CommonOptions {
    /// The access mode after applying the "required implies ownable" rule.
    pub fn effective_access(&self, required: bool) -> Access {
        if required {
            self.access.or_ownable()
        } else {
            self.access
        }
    }
}

/// Deserialize an amount written either as a string or as a TOML number.
pub(crate) fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(u64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
