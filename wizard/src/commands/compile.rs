use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use superwizard_deploy::{CompileClient, DEFAULT_COMPILE_URL};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CompileCommand {
    /// Option file to generate from
    #[arg(short, long)]
    pub config: PathBuf,

    /// Base URL of the compile service
    #[arg(long, default_value = DEFAULT_COMPILE_URL)]
    pub url: String,
}

impl CompileCommand {
    pub fn run(&self) -> Result<()> {
        let (options, _) = ops::load(Some(self.config.as_path()), None).unwrap_or_exit();

        let client = CompileClient::new(&self.url);
        let report = ops::compile(&options, &client).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
