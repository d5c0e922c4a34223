use clap::Args;
use eyre::{Context, Result};
use superwizard_options::{GenericOptions, Kind};

#[derive(Args)]
pub struct DefaultsCommand {
    /// Contract kind to print defaults for
    #[arg(short, long, default_value = "PURE")]
    pub kind: Kind,
}

impl DefaultsCommand {
    pub fn run(&self) -> Result<()> {
        let toml = GenericOptions::defaults(self.kind)
            .to_toml()
            .wrap_err("Failed to serialize default options")?;
        print!("{}", toml);
        Ok(())
    }
}
