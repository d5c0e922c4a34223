//! TOML option files.
//!
//! ```toml
//! kind = "PURE"
//! name = "Flow"
//! symbol = "FLW"
//! mintable = true
//! access = "roles"
//!
//! [info]
//! securityContact = "security@flow.example"
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{Error, GenericOptions, Kind, Result, error::SourceContext};

/// Parse an option document, reporting errors against `filename`.
pub fn parse_options(content: &str, filename: &str) -> Result<GenericOptions> {
    let ctx = SourceContext::new(content, filename);
    let table: toml::Table = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let kind = match table.get("kind") {
        None => return Err(ctx.missing_kind_error()),
        Some(toml::Value::String(kind)) => {
            Kind::from_str(kind).map_err(|_| ctx.unknown_kind_error(kind.as_str()))?
        }
        Some(other) => return Err(ctx.unknown_kind_error(other.to_string())),
    };

    GenericOptions::from_toml(kind, content).map_err(|e| ctx.parse_error(e))
}

/// An option file on disk with its parsed options.
#[derive(Debug)]
pub struct OptionsFile {
    path: PathBuf,
    options: GenericOptions,
}

impl OptionsFile {
    /// Open and parse an option file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let options = parse_options(&content, &path.display().to_string())?;

        Ok(Self { path, options })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_options(self) -> GenericOptions {
        self.options
    }
}
