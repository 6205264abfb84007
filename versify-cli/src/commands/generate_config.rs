//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   versify convert <INPUT> --config {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# versify configuration
#
# Command-line flags take precedence over these values.

[output]
# Output format: "text" or "json"
format = "text"

# Encoding of written files, always with a byte-order mark:
# "utf8-bom" or "utf16le"
encoding = "utf8-bom"

# Line separator: "lf" or "crlf"
line_ending = "lf"

# Extension of written files; defaults to "txt" for text and "json" for json
# extension = "txt"

[performance]
# Worker threads for --parallel runs (0 = one per CPU)
worker_threads = 0
"#
    }
}
