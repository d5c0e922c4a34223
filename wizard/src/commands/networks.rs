use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NetworksCommand {
    /// Show full factory addresses
    #[arg(long)]
    pub full: bool,
}

impl NetworksCommand {
    pub fn run(&self) -> Result<()> {
        ops::networks(self.full).render(&mut TerminalOutput::new());
        Ok(())
    }
}
