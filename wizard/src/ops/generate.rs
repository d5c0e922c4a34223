//! Generate operation - option loading and source generation.

use std::path::Path;

use superwizard_deploy::adjust_solidity_code;
use superwizard_options::{GenericOptions, Kind, OptionsFile, print_generic};
use tracing::debug;

use crate::reports::GenerateReport;

/// Command-line values that take precedence over the option file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub name: Option<&'a str>,
    pub symbol: Option<&'a str>,
}

/// Load options from `config` when given, otherwise the defaults of `kind`
/// (PURE when neither is set).
///
/// A `kind` that disagrees with the file is reported as a warning and the
/// file wins.
pub fn load(
    config: Option<&Path>,
    kind: Option<Kind>,
) -> superwizard_options::Result<(GenericOptions, Vec<String>)> {
    let mut warnings = Vec::new();
    let options = match config {
        Some(path) => {
            let options = OptionsFile::open(path)?.into_options();
            if let Some(kind) = kind.filter(|k| *k != options.kind()) {
                warnings.push(format!(
                    "--kind {} ignored, {} declares kind {}",
                    kind,
                    path.display(),
                    options.kind()
                ));
            }
            options
        }
        None => GenericOptions::defaults(kind.unwrap_or(Kind::Pure)),
    };
    Ok((options, warnings))
}

/// Execute the generate operation.
///
/// Applies `overrides`, builds and prints the contract, and rewrites it for
/// the compile service when `adjusted` is set.
pub fn generate(
    mut options: GenericOptions,
    overrides: Overrides<'_>,
    adjusted: bool,
) -> superwizard_options::Result<GenerateReport> {
    let mut warnings = Vec::new();

    if let Some(name) = overrides.name {
        options.set_name(name);
    }
    if let Some(symbol) = overrides.symbol {
        if !options.set_symbol(symbol) {
            warnings.push(format!("--symbol ignored, {} has no symbol", options.kind()));
        }
    }

    let mut source = print_generic(&options)?;
    if adjusted {
        debug!("adjusting source for the compile service");
        source = adjust_solidity_code(&source);
    }

    Ok(GenerateReport {
        kind: options.kind(),
        name: options.name().to_string(),
        source,
        warnings,
        written_to: None,
    })
}
