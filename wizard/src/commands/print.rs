use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use superwizard_options::Kind;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Overrides},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PrintCommand {
    /// Option file to generate from (defaults of --kind when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Contract kind (PURE, ERC20, ERC721, ERC1155, Governor, Capped, MaticBridged, Custom)
    #[arg(short, long)]
    pub kind: Option<Kind>,

    /// Contract name (overrides the option file)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Token symbol (overrides the option file)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Write source to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rewrite pragma and imports the way the compile service expects
    #[arg(long)]
    pub adjusted: bool,
}

impl PrintCommand {
    pub fn run(&self) -> Result<()> {
        let (options, load_warnings) =
            ops::load(self.config.as_deref(), self.kind).unwrap_or_exit();

        let overrides = Overrides {
            name: self.name.as_deref(),
            symbol: self.symbol.as_deref(),
        };
        let mut report = ops::generate(options, overrides, self.adjusted).unwrap_or_exit();
        let mut warnings = load_warnings;
        warnings.append(&mut report.warnings);
        report.warnings = warnings;

        if let Some(path) = &self.output {
            std::fs::write(path, &report.source)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            report.written_to = Some(path.clone());
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
