//! Error types for onboarding preconditions.

use std::{path::PathBuf, process::ExitStatus};

/// Conditions that abort an onboarding run.
///
/// These are raised through `anyhow`, so callers that care about the kind can
/// `downcast_ref::<OnboardError>()` the returned error.
#[derive(Debug, thiserror::Error)]
pub enum OnboardError {
    /// Source URL is neither `http(s)` nor `git@`.
    #[error("Unsupported source URL '{0}'")]
    UnsupportedSource(String),

    /// Git source declared without a checkout directory name.
    #[error("Git source '{0}' has no checkout directory configured")]
    MissingGitDir(String),

    /// A file expected by the next stage is not there.
    #[error("Missing {}", .0.display())]
    MissingArtifact(PathBuf),

    /// Zip archive does not contain the requested entry.
    #[error("Missing '{entry}' in archive {}", .archive.display())]
    MissingArchiveEntry { archive: PathBuf, entry: String },

    /// Download answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Subprocess exited unsuccessfully.
    #[error("`{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}
