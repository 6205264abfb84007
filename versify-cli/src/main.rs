//! versify command-line entry point

use anyhow::Result;
use clap::Parser;
use versify_cli::commands::Commands;

/// Convert USX, USFM and SFM scripture files into layout-ready plain text
#[derive(Debug, Parser)]
#[command(name = "versify", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
