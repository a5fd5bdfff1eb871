//! The static table of color font sources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use crate::{
    config::{AMIRI_ZIP_URL, AREF_RUQAA_ZIP_URL, BLAKA_GIT_URL, REEM_KUFI_FUN_URL},
    error::OnboardError,
};

/// One font of interest within a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFile<'a> {
    /// Path inside the fetched artifact: zip entry, checkout path or downloaded file name.
    pub source: &'a str,
    /// Path relative to the fonts tree, `<family dir>/<file name>`.
    pub dest: &'a str,
}

impl<'a> FontFile<'a> {
    pub const fn new(source: &'a str, dest: &'a str) -> Self {
        Self { source, dest }
    }

    /// File name the font carries in scratch, in the build output and once published.
    pub fn name(&self) -> &'a str {
        self.dest.rsplit_once('/').map_or(self.dest, |(_, name)| name)
    }

    /// File name without extension; names the per-font conversion directory.
    pub fn stem(&self) -> &'a str {
        let name = self.name();
        name.rsplit_once('.').map_or(name, |(stem, _)| stem)
    }

    /// Destination subdirectory grouping the family's published variants.
    pub fn family_dir(&self) -> &'a Path {
        Path::new(self.dest).parent().unwrap_or(Path::new(""))
    }
}

/// Where a font source is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSource<'a> {
    pub url: &'a str,
    pub fonts: &'a [FontFile<'a>],
    /// Checkout directory name under scratch, required for git sources.
    pub git_dir: Option<&'a str>,
    /// Extra arguments passed to the converter after the font path.
    pub maximum_color_args: &'a [&'a str],
}

/// How a source is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    Git,
}

impl<'a> FontSource<'a> {
    pub const fn http(url: &'a str, fonts: &'a [FontFile<'a>]) -> Self {
        Self { url, fonts, git_dir: None, maximum_color_args: &[] }
    }

    pub const fn git(url: &'a str, git_dir: &'a str, fonts: &'a [FontFile<'a>]) -> Self {
        Self { url, fonts, git_dir: Some(git_dir), maximum_color_args: &[] }
    }

    pub const fn with_maximum_color_args(mut self, args: &'a [&'a str]) -> Self {
        self.maximum_color_args = args;
        self
    }

    pub fn kind(&self) -> Result<SourceKind, OnboardError> {
        if self.url.starts_with("http") {
            Ok(SourceKind::Http)
        } else if self.url.starts_with("git@") {
            Ok(SourceKind::Git)
        } else {
            Err(OnboardError::UnsupportedSource(self.url.to_string()))
        }
    }

    /// Local path of the fetched artifact inside `scratch_dir`.
    ///
    /// The downloaded file for HTTP sources, the checkout for git sources.
    pub fn fetch_path(&self, scratch_dir: &Path) -> Result<PathBuf> {
        match self.kind()? {
            SourceKind::Http => {
                let url = Url::parse(self.url)
                    .with_context(|| format!("Invalid source URL {}", self.url))?;
                let name = Path::new(url.path())
                    .file_name()
                    .with_context(|| format!("No file name in URL {}", self.url))?;
                Ok(scratch_dir.join(name))
            }
            SourceKind::Git => {
                let git_dir = self
                    .git_dir
                    .ok_or_else(|| OnboardError::MissingGitDir(self.url.to_string()))?;
                Ok(scratch_dir.join(git_dir))
            }
        }
    }
}

const AMIRI_FONTS: &[FontFile<'static>] = &[FontFile::new(
    "Amiri-0.114/AmiriQuranColored.ttf",
    "ofl/amiriqurancolored/AmiriQuranColored-Regular.ttf",
)];

const AREF_RUQAA_INK_FONTS: &[FontFile<'static>] = &[
    FontFile::new(
        "ArefRuqaa-1.004/ttf/ArefRuqaaInk-Regular.ttf",
        "ofl/arefruqaaink/ArefRuqaaInk-Regular.ttf",
    ),
    FontFile::new(
        "ArefRuqaa-1.004/ttf/ArefRuqaaInk-Bold.ttf",
        "ofl/arefruqaaink/ArefRuqaaInk-Bold.ttf",
    ),
];

const REEM_KUFI_FUN_FONTS: &[FontFile<'static>] =
    &[FontFile::new("ReemKufiFun.ttf", "ofl/reemkufifun/ReemKufiFun[wght].ttf")];

const BLAKA_INK_FONTS: &[FontFile<'static>] = &[FontFile::new(
    "fonts/ink/ttf/BlakaInk-Regular.ttf",
    "ofl/blakaink/BlakaInk-Regular.ttf",
)];

/// Color font sources onboarded by a default run, processed in this order.
pub const FONT_SOURCES: &[FontSource<'static>] = &[
    FontSource::http(AMIRI_ZIP_URL, AMIRI_FONTS),
    FontSource::http(AREF_RUQAA_ZIP_URL, AREF_RUQAA_INK_FONTS),
    FontSource::http(REEM_KUFI_FUN_URL, REEM_KUFI_FUN_FONTS),
    // Private repository, needs SSH access
    FontSource::git(BLAKA_GIT_URL, "blaka_ink", BLAKA_INK_FONTS),
];
