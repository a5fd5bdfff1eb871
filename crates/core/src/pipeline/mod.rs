//! Onboarding pipeline: fetch, extract, convert, publish.

mod convert;
mod extract;
mod fetch;
mod publish;

pub use convert::Conversion;
pub use extract::{extract, read_zip_entry};
pub use fetch::fetch;
pub use publish::{Published, publish};

use std::{
    ffi::OsString,
    path::{Path, PathBuf, absolute},
    time::Instant,
};

use anyhow::{Context, Result};

use crate::{
    config::{CONVERTER, SCRATCH_DIR, default_fonts_dir},
    io::ensure_dir,
    sources::{FontFile, FontSource},
};

#[derive(Debug)]
pub struct PipelineContext {
    pub scratch_dir: PathBuf,
    pub fonts_dir: PathBuf,
    pub converter: OsString,
    /// Pull existing git checkouts before extracting from them.
    pub refresh_git: bool,
}

impl PipelineContext {
    /// Scratch and fonts directories are made absolute since the converter
    /// runs from its own working directory.
    pub fn new(scratch_dir: PathBuf, fonts_dir: PathBuf) -> Result<Self> {
        let scratch_dir = absolute(&scratch_dir)
            .with_context(|| format!("Invalid scratch directory {}", scratch_dir.display()))?;
        let fonts_dir = absolute(&fonts_dir)
            .with_context(|| format!("Invalid fonts directory {}", fonts_dir.display()))?;
        Ok(Self { scratch_dir, fonts_dir, converter: CONVERTER.into(), refresh_git: true })
    }

    /// `/tmp/color_onboarding` and `~/oss/fonts`.
    pub fn with_defaults() -> Result<Self> {
        Self::new(PathBuf::from(SCRATCH_DIR), default_fonts_dir()?)
    }

    pub fn with_converter(mut self, converter: impl Into<OsString>) -> Self {
        self.converter = converter.into();
        self
    }

    pub fn with_refresh_git(mut self, refresh_git: bool) -> Self {
        self.refresh_git = refresh_git;
        self
    }

    pub fn conversion(&self, source: &FontSource, font_path: &Path) -> Result<Conversion> {
        Conversion::new(&self.converter, font_path, source.maximum_color_args, &self.scratch_dir)
    }
}

/// Onboard one font of an already fetched source.
pub fn onboard_font(
    ctx: &PipelineContext,
    source: &FontSource,
    font: &FontFile,
    artifact: &Path,
) -> Result<Published> {
    let font_path = extract(source, font, artifact, &ctx.scratch_dir)?;

    let conversion = ctx.conversion(source, &font_path)?;
    conversion.run()?;

    let converted = conversion
        .output
        .strip_prefix(&ctx.scratch_dir)
        .unwrap_or(&conversion.output);
    println!("Working {}", converted.display());
    publish(&conversion.output, &ctx.fonts_dir, font.dest)
}

/// Run every source through the pipeline, strictly in order.
pub fn onboard(ctx: &PipelineContext, sources: &[FontSource]) -> Result<Vec<Published>> {
    let start = Instant::now();
    ensure_dir(&ctx.scratch_dir)?;

    println!("═══════════════════════════════════════════════════════════════════════════════");
    println!("Color Font Onboarding");
    println!("═══════════════════════════════════════════════════════════════════════════════");
    println!("Working in {}", ctx.scratch_dir.display());
    println!("Final dests in {}", ctx.fonts_dir.display());

    let total = sources.len();
    let mut published = Vec::new();
    for (i, source) in sources.iter().enumerate() {
        println!("\n[{}/{total}] {}", i + 1, source.url);
        let artifact = fetch(source, &ctx.scratch_dir, ctx.refresh_git)?;
        for font in source.fonts {
            published.push(onboard_font(ctx, source, font, &artifact)?);
        }
    }

    println!("\n═══════════════════════════════════════════════════════════════════════════════");
    println!(
        "✨ Onboarded {} fonts in {:.2}s",
        published.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(published)
}
