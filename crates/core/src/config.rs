//! Configuration constants for color font onboarding.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Scratch directory used as download cache and build staging.
pub const SCRATCH_DIR: &str = "/tmp/color_onboarding";

/// Fonts repository location, relative to the home directory.
pub const FONTS_REPO_SUBDIR: &str = "oss/fonts";

/// External color-maximizing tool.
pub const CONVERTER: &str = "maximum_color";

/// Directory under scratch holding one conversion directory per font.
pub const CONVERSION_SUBDIR: &str = "maximum_color";

/// Directory the converter writes its output to, relative to its working directory.
pub const BUILD_SUBDIR: &str = "build";

/// Color table formats reported after conversion.
pub const COLOR_TABLES: [&[u8; 4]; 4] = [b"COLR", b"SVG ", b"sbix", b"CBDT"];

/// Amiri release archive (contains Amiri Quran Colored).
pub const AMIRI_ZIP_URL: &str =
    "https://github.com/aliftype/amiri/releases/download/0.114/Amiri-0.114.zip";

/// Aref Ruqaa release archive (contains the Ink color family).
pub const AREF_RUQAA_ZIP_URL: &str =
    "https://github.com/aliftype/aref-ruqaa/releases/download/v1.004/ArefRuqaa-1.004.zip";

/// Reem Kufi Fun, a bare variable font download.
pub const REEM_KUFI_FUN_URL: &str = "https://github.com/aliftype/reem-kufi/raw/main/ReemKufiFun.ttf";

/// Blaka repository (private, cloned over SSH).
pub const BLAKA_GIT_URL: &str = "git@github.com:Gue3bara/Blaka.git";

/// Default destination tree: `~/oss/fonts`.
pub fn default_fonts_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(FONTS_REPO_SUBDIR))
}
