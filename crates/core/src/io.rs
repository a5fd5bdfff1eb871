//! Shared file I/O helpers.

use std::{
    fs::{copy, create_dir_all, read, write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::error::OnboardError;

/// Read a whole file.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write bytes to a file, replacing it.
pub fn write_file(path: &Path, data: impl AsRef<[u8]>) -> Result<()> {
    write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy a file byte-for-byte, failing with [`OnboardError::MissingArtifact`] if it is absent.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    require_file(from)?;
    copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

/// Fail unless `path` is an existing regular file.
pub fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(OnboardError::MissingArtifact(path.to_path_buf()).into());
    }
    Ok(())
}

/// Create a directory and its parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Create the parent directory of `path` if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }
    Ok(())
}
