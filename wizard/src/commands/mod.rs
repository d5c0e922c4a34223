mod compile;
mod completions;
mod defaults;
mod kinds;
mod networks;
mod print;

use clap::{ArgAction, Parser, Subcommand};
use compile::CompileCommand;
use completions::CompletionsCommand;
use defaults::DefaultsCommand;
use eyre::Result;
use kinds::KindsCommand;
use networks::NetworksCommand;
use print::PrintCommand;

/// Extension trait for exiting on option file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for superwizard_options::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sfwizard")]
#[command(version)]
#[command(about = "Generate Solidity token and governance contracts from TOML options")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Print(cmd) => cmd.run(),
            Commands::Defaults(cmd) => cmd.run(),
            Commands::Kinds(cmd) => cmd.run(),
            Commands::Compile(cmd) => cmd.run(),
            Commands::Networks(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate contract source from an option file or a kind's defaults
    Print(PrintCommand),

    /// Print a kind's default options as TOML
    Defaults(DefaultsCommand),

    /// List supported contract kinds
    Kinds(KindsCommand),

    /// Generate a contract and submit it to the compile service
    Compile(CompileCommand),

    /// List networks with a super token factory
    Networks(NetworksCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
