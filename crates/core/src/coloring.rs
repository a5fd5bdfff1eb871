//! Color table detection.

use anyhow::{Context, Result};
use read_fonts::{FontRef, types::Tag};

use crate::config::COLOR_TABLES;

/// Color table formats present in the font, in `COLR`, `SVG `, `sbix`, `CBDT` order.
pub fn color_tables(data: &[u8]) -> Result<Vec<Tag>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    Ok(COLOR_TABLES
        .iter()
        .map(|tag| Tag::new(tag))
        .filter(|tag| font.table_data(*tag).is_some())
        .collect())
}

/// Comma separated tags with padding trimmed, e.g. `COLR,SVG`.
pub fn describe(tags: &[Tag]) -> String {
    tags.iter().map(|tag| tag.to_string().trim_end().to_owned()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use write_fonts::FontBuilder;

    fn font_with_tables(tags: &[&[u8; 4]]) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        for tag in tags {
            builder.add_raw(Tag::new(tag), vec![0u8; 8]);
        }
        builder.build()
    }

    #[test]
    fn test_no_color_tables() {
        let tags = color_tables(font_test_data::CMAP12_FONT1).unwrap();
        assert!(tags.is_empty());
        assert_eq!(describe(&tags), "");
    }

    #[test]
    fn test_detects_color_tables_in_order() {
        let data = font_with_tables(&[b"sbix", b"name", b"SVG ", b"COLR"]);
        let tags = color_tables(&data).unwrap();
        assert_eq!(tags, vec![Tag::new(b"COLR"), Tag::new(b"SVG "), Tag::new(b"sbix")]);
        assert_eq!(describe(&tags), "COLR,SVG,sbix");
    }

    #[test]
    fn test_rejects_non_font() {
        assert!(color_tables(b"not a font").is_err());
    }
}
