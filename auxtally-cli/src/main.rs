//! auxtally binary entry point

use anyhow::Result;
use clap::Parser;

use auxtally_cli::commands::Commands;

/// Tally auxiliary-verb constructions in speaker transcripts
#[derive(Debug, Parser)]
#[command(name = "auxtally", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(args) => args.execute(),
        Commands::Tag(args) => args.execute(),
    }
}
