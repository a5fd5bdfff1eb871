//! Downloading and cloning font sources.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::blocking::get;

use crate::{
    error::OnboardError,
    io::write_file,
    sources::{FontSource, SourceKind},
};

/// Fetch `source` into `scratch_dir`, returning the local artifact path.
///
/// Downloads are skipped when the file already exists. Existing git checkouts
/// are pulled when `refresh_git` is set and left alone otherwise.
pub fn fetch(source: &FontSource, scratch_dir: &Path, refresh_git: bool) -> Result<PathBuf> {
    let dest = source.fetch_path(scratch_dir)?;
    match source.kind()? {
        SourceKind::Http => {
            if dest.exists() {
                debug!("Already fetched {}", dest.display());
            } else {
                info!("Fetch {} => {}", source.url, dest.display());
                download(source.url, &dest)?;
            }
        }
        SourceKind::Git => {
            if !dest.is_dir() {
                info!("Clone {} => {}", source.url, dest.display());
                let git_dir = source
                    .git_dir
                    .ok_or_else(|| OnboardError::MissingGitDir(source.url.to_string()))?;
                git(scratch_dir, &["clone", source.url, git_dir])?;
            } else if refresh_git {
                info!("Pull {}", dest.display());
                git(&dest, &["pull"])?;
            } else {
                debug!("Using existing checkout {}", dest.display());
            }
        }
    }
    Ok(dest)
}

fn download(url: &str, target: &Path) -> Result<()> {
    println!("Downloading {url}");

    let response = get(url).with_context(|| format!("Failed to fetch {url}"))?;
    let status = response.status();
    if !status.is_success() {
        return Err(OnboardError::HttpStatus { url: url.to_string(), status }.into());
    }

    let bytes = response.bytes()?;
    write_file(target, &bytes)?;

    let size_mb = bytes.len() as f64 / 1024.0 / 1024.0;
    println!("  Downloaded ({size_mb:.2} MB)");
    Ok(())
}

fn git(cwd: &Path, args: &[&str]) -> Result<()> {
    let command = format!("git {}", args.join(" "));
    let status = Command::new("git")
        // if the remote wants credentials fail instead of waiting on a prompt
        .env("GIT_TERMINAL_PROMPT", "0")
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("Failed to execute `{command}`"))?;

    if !status.success() {
        return Err(OnboardError::CommandFailed { command, status }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FontFile;
    use httpmock::prelude::*;

    const FONTS: &[FontFile] = &[FontFile::new("Test.ttf", "ofl/test/Test.ttf")];

    #[test]
    fn test_downloads_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/releases/Test.ttf");
            then.status(200).body(b"font bytes");
        });
        let scratch = tempfile::tempdir().unwrap();
        let url = server.url("/releases/Test.ttf");
        let source = FontSource::http(&url, FONTS);

        let path = fetch(&source, scratch.path(), true).unwrap();
        assert_eq!(path, scratch.path().join("Test.ttf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"font bytes");

        fetch(&source, scratch.path(), true).unwrap();
        mock.assert_hits(1);
    }

    #[test]
    fn test_http_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.zip");
            then.status(404);
        });
        let scratch = tempfile::tempdir().unwrap();
        let url = server.url("/missing.zip");
        let source = FontSource::http(&url, FONTS);

        let err = fetch(&source, scratch.path(), true).unwrap_err();

        match err.downcast_ref() {
            Some(OnboardError::HttpStatus { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!scratch.path().join("missing.zip").exists());
    }

    #[test]
    fn test_unsupported_scheme() {
        let scratch = tempfile::tempdir().unwrap();
        let source = FontSource::http("svn://example.com/fonts", FONTS);

        let err = fetch(&source, scratch.path(), true).unwrap_err();

        assert!(matches!(err.downcast_ref(), Some(OnboardError::UnsupportedSource(_))));
    }

    #[test]
    fn test_existing_checkout_without_refresh() {
        let scratch = tempfile::tempdir().unwrap();
        std::fs::create_dir(scratch.path().join("checkout")).unwrap();
        let source = FontSource::git("git@example.com:fonts/test.git", "checkout", FONTS);

        let path = fetch(&source, scratch.path(), false).unwrap();

        assert_eq!(path, scratch.path().join("checkout"));
    }
}
