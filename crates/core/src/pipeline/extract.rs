//! Pulling fonts of interest out of fetched artifacts.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, info};
use zip::{ZipArchive, result::ZipError};

use crate::{
    error::OnboardError,
    io::{copy_file, write_file},
    sources::{FontFile, FontSource, SourceKind},
};

/// Place `font` at `<scratch_dir>/<font name>`, returning that path.
///
/// `artifact` is what [`fetch`](super::fetch) produced for `source`. Nothing
/// is done when the target already exists.
pub fn extract(
    source: &FontSource,
    font: &FontFile,
    artifact: &Path,
    scratch_dir: &Path,
) -> Result<PathBuf> {
    let target = scratch_dir.join(font.name());
    if target.is_file() {
        debug!("Already extracted {}", target.display());
        return Ok(target);
    }

    if artifact.extension().is_some_and(|ext| ext == "zip") {
        info!("Extract {} from {}", font.source, artifact.display());
        let data = read_zip_entry(artifact, font.source)?;
        write_file(&target, data)?;
    } else if source.kind()? == SourceKind::Git {
        info!("Copy {} from checkout {}", font.source, artifact.display());
        copy_file(&artifact.join(font.source), &target)?;
    } else {
        let downloaded = scratch_dir.join(font.source);
        if downloaded != target {
            copy_file(&downloaded, &target)?;
        }
    }
    Ok(target)
}

/// Read the whole of `entry` from the zip at `archive`.
pub fn read_zip_entry(archive: &Path, entry: &str) -> Result<Vec<u8>> {
    let file =
        File::open(archive).with_context(|| format!("Failed to open {}", archive.display()))?;
    let mut zip = ZipArchive::new(file)
        .with_context(|| format!("Failed to open zip archive {}", archive.display()))?;

    let mut zip_file = match zip.by_name(entry) {
        Ok(zip_file) => zip_file,
        Err(ZipError::FileNotFound) => {
            return Err(OnboardError::MissingArchiveEntry {
                archive: archive.to_path_buf(),
                entry: entry.to_string(),
            }
            .into());
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {entry}")),
    };

    let mut buffer = Vec::new();
    zip_file.read_to_end(&mut buffer)?;
    Ok(buffer)
}
