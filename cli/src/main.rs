use std::process::ExitCode;

use clap::Parser;
use fpcompare_cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli.log.init();
    cli.run()
}
