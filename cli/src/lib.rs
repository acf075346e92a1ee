use std::process::ExitCode;

use agreement::AgreementArgs;
use clap::{Parser, Subcommand};
use equals::EqualsArgs;
use logging::LogArgs;

pub mod agreement;
pub mod equals;
pub mod logging;

#[derive(Debug, Clone, Parser)]
#[command(about = "Compare floats by the number of leading mantissa bits they share")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
    #[clap(flatten)]
    pub log: LogArgs,
}
impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        self.command.run()
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the number of equal fractional bits of two numbers
    Agreement(AgreementArgs),
    /// Exit successfully if two numbers are equal within a threshold
    Equals(EqualsArgs),
}
impl Command {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        match self {
            Command::Agreement(args) => args.run(),
            Command::Equals(args) => args.run(),
        }
    }
}
