//! List command implementations

use anyhow::{anyhow, Result};
use versify_core::{style_table, Role, SourceFormat};

/// Print the recognized input formats
pub fn list_formats() -> Result<()> {
    println!("Recognized input formats:");
    for format in SourceFormat::all() {
        let engine = match format {
            SourceFormat::Usx => "XML tree walker",
            SourceFormat::Usfm | SourceFormat::Sfm => "marker-stream parser",
        };
        println!("  {:<6} {:<6} {engine}", format.extension(), format.name());
    }
    println!();
    println!("Files with any other extension are skipped.");
    Ok(())
}

/// Print the style table serving `format`
pub fn list_styles(format: &str) -> Result<()> {
    let source_format = SourceFormat::from_extension(format).ok_or_else(|| {
        anyhow!("Unknown format '{format}'. Run `versify list formats` for the supported formats")
    })?;
    let table = style_table(source_format.family())?;

    println!("{} ({source_format})", table.name());
    println!("  Default paragraph: {}", table.default_paragraph_style());
    for role in [Role::Heading, Role::Prose, Role::Poetry, Role::Metadata] {
        println!("  {role}: {}", table.codes_for(role).join(" "));
    }
    println!("  Dropped inline: {}", table.dropped_inline().join(" "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_styles_every_format() {
        for format in SourceFormat::all() {
            assert!(list_styles(format.extension()).is_ok());
        }
        assert!(list_styles("USFM").is_ok());
    }

    #[test]
    fn test_list_styles_unknown() {
        let error = list_styles("txt").unwrap_err();
        assert!(error.to_string().contains("Unknown format 'txt'"));
    }
}
