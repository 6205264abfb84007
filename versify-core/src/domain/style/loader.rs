use super::{FormatFamily, StyleTable};
use crate::error::{ConvertError, Result};
use std::sync::OnceLock;

static STYLE_TABLES: OnceLock<std::result::Result<StyleTables, ConvertError>> = OnceLock::new();

macro_rules! embed_style_table {
    ($family:expr, $path:expr) => {
        ($family, include_str!($path))
    };
}

#[derive(Debug)]
struct StyleTables {
    usx: StyleTable,
    marker: StyleTable,
}

fn load_embedded_tables() -> Result<StyleTables> {
    let [(usx_family, usx_toml), (marker_family, marker_toml)] = [
        embed_style_table!(FormatFamily::Usx, "../../../configs/styles/usx.toml"),
        embed_style_table!(FormatFamily::Marker, "../../../configs/styles/usfm.toml"),
    ];

    let usx = StyleTable::from_toml_str(usx_toml)?;
    let marker = StyleTable::from_toml_str(marker_toml)?;

    for (expected, table) in [(usx_family, &usx), (marker_family, &marker)] {
        if table.family() != expected {
            return Err(ConvertError::Configuration(format!(
                "Style table family mismatch: expected {}, got {}",
                expected.code(),
                table.family().code()
            )));
        }
    }

    Ok(StyleTables { usx, marker })
}

/// Built-in style table for a format family
///
/// Tables are parsed once per process and shared by every conversion.
pub fn style_table(family: FormatFamily) -> Result<&'static StyleTable> {
    match STYLE_TABLES.get_or_init(load_embedded_tables) {
        Ok(tables) => Ok(match family {
            FormatFamily::Usx => &tables.usx,
            FormatFamily::Marker => &tables.marker,
        }),
        Err(e) => Err(e.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::Role;

    #[test]
    fn test_embedded_tables_load() {
        let usx = style_table(FormatFamily::Usx).expect("USX table should load");
        let marker = style_table(FormatFamily::Marker).expect("marker table should load");

        assert_eq!(usx.family(), FormatFamily::Usx);
        assert_eq!(marker.family(), FormatFamily::Marker);
    }

    #[test]
    fn test_tables_are_cached() {
        let first = style_table(FormatFamily::Usx).unwrap();
        let second = style_table(FormatFamily::Usx).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_families_agree_on_shared_codes() {
        let usx = style_table(FormatFamily::Usx).unwrap();
        let marker = style_table(FormatFamily::Marker).unwrap();

        for code in ["p", "m", "pi", "q1", "q2", "s1", "r", "mt1", "h"] {
            assert_eq!(usx.classify(code), marker.classify(code), "code {code}");
        }
    }

    #[test]
    fn test_id_is_marker_only() {
        let usx = style_table(FormatFamily::Usx).unwrap();
        let marker = style_table(FormatFamily::Marker).unwrap();

        assert_eq!(marker.classify("id"), Role::Metadata);
        assert_eq!(usx.classify("id"), Role::Unclassified);
    }
}
