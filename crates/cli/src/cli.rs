//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use color_onboard_core::{
    FONT_SOURCES, FontSource, PipelineContext,
    config::{CONVERTER, SCRATCH_DIR, default_fonts_dir},
    onboard,
};

#[derive(Parser)]
#[command(name = "color-onboard", version)]
#[command(about = "Fetch color font sources, maximize their color tables and publish them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Download cache and build staging directory
    #[arg(long, global = true, default_value = SCRATCH_DIR)]
    pub scratch_dir: PathBuf,
    /// Fonts repository root [default: ~/oss/fonts]
    #[arg(long, global = true)]
    pub fonts_dir: Option<PathBuf>,
    /// Color-maximizing program to run on each font
    #[arg(long, global = true, default_value = CONVERTER)]
    pub converter: String,
    /// Don't pull git checkouts that already exist
    #[arg(long, global = true)]
    pub no_pull: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Onboard every source (the default)
    Run,
    /// List sources and where their fonts are published
    Sources,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Run) {
            Commands::Run => {
                let fonts_dir = match self.fonts_dir {
                    Some(dir) => dir,
                    None => default_fonts_dir()?,
                };
                let ctx = PipelineContext::new(self.scratch_dir, fonts_dir)?
                    .with_converter(self.converter)
                    .with_refresh_git(!self.no_pull);
                debug!("Scratch {}, fonts {}", ctx.scratch_dir.display(), ctx.fonts_dir.display());
                onboard(&ctx, FONT_SOURCES)?;
            }
            Commands::Sources => print!("{}", list_sources(FONT_SOURCES)),
        }
        Ok(())
    }
}

/// One block per source: its URL followed by `source -> dest` for each font.
pub fn list_sources(sources: &[FontSource]) -> String {
    let mut out = String::new();
    for source in sources {
        out.push_str(source.url);
        if let Some(git_dir) = source.git_dir {
            out.push_str(&format!(" (checkout {git_dir})"));
        }
        out.push('\n');
        for font in source.fonts {
            out.push_str(&format!("  {} -> {}\n", font.source, font.dest));
        }
    }
    out
}
