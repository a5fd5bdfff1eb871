//! Copying converted fonts into the fonts tree.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::warn;
use read_fonts::types::Tag;

use crate::{
    coloring::{color_tables, describe},
    io::{copy_file, ensure_parent_dir, read_file},
};

/// A font copied into the fonts tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub dest: PathBuf,
    /// Color table formats found in the converted font.
    pub color_tables: Vec<Tag>,
}

/// Copy `converted` to `<fonts_dir>/<dest>` and report its color tables.
pub fn publish(converted: &Path, fonts_dir: &Path, dest: &str) -> Result<Published> {
    let final_dest = fonts_dir.join(dest);

    let data = read_file(converted)?;
    let tables = color_tables(&data).unwrap_or_else(|e| {
        warn!("Could not inspect {}: {e:#}", converted.display());
        Vec::new()
    });
    println!("  Color tables: {}", describe(&tables));
    println!("  {dest}");

    ensure_parent_dir(&final_dest)?;
    copy_file(converted, &final_dest)?;

    Ok(Published { dest: final_dest, color_tables: tables })
}
