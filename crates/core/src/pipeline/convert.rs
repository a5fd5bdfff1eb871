//! Running the external color-maximizing tool.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    config::{BUILD_SUBDIR, CONVERSION_SUBDIR},
    error::OnboardError,
    io::{ensure_dir, require_file},
};

/// A single converter invocation, described before it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub program: OsString,
    /// Font path followed by the source's extra arguments.
    pub args: Vec<OsString>,
    /// `<scratch>/maximum_color/<font stem>`
    pub working_dir: PathBuf,
    /// `<working_dir>/build/<font name>`
    pub output: PathBuf,
}

impl Conversion {
    /// Describe the conversion of the extracted font at `font_path`.
    pub fn new(
        program: impl Into<OsString>,
        font_path: &Path,
        extra_args: &[&str],
        scratch_dir: &Path,
    ) -> Result<Self> {
        let name = font_path
            .file_name()
            .with_context(|| format!("No file name in {}", font_path.display()))?;
        let stem = font_path
            .file_stem()
            .with_context(|| format!("No file stem in {}", font_path.display()))?;
        let working_dir = scratch_dir.join(CONVERSION_SUBDIR).join(stem);
        let output = working_dir.join(BUILD_SUBDIR).join(name);

        let args = std::iter::once(font_path.as_os_str().to_owned())
            .chain(extra_args.iter().map(OsString::from))
            .collect();

        Ok(Self { program: program.into(), args, working_dir, output })
    }

    /// The command line as it would be typed, for messages.
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the converter unless its output is already there.
    ///
    /// Returns whether the converter actually ran.
    pub fn run(&self) -> Result<bool> {
        if self.output.is_file() {
            debug!("Already converted {}", self.output.display());
            return Ok(false);
        }

        ensure_dir(&self.working_dir)?;
        let command = self.command_line();
        println!("Maximizing in {}: {command}", self.working_dir.display());
        info!("Running {command}");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .status()
            .with_context(|| format!("Failed to execute `{command}`"))?;
        if !status.success() {
            return Err(OnboardError::CommandFailed { command, status }.into());
        }

        require_file(&self.output)?;
        Ok(true)
    }
}
