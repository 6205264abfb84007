//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod convert;
pub mod generate_config;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert USX, USFM or SFM files to plain text
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List recognized input formats
    Formats,

    /// Show the style classification table for a format
    Styles {
        /// Format name or extension (usx, usfm, sfm)
        format: String,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Formats => list::list_formats(),
                ListCommands::Styles { format } => list::list_styles(format),
            },
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
