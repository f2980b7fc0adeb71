use std::path::PathBuf;

use semver::Version;
use thiserror::Error;

/// Unified error type for pubver operations
#[derive(Error, Debug)]
pub enum PubverError {
    #[error("Not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    #[error(
        "Inconsistent versions: manifest={manifest}, changelog={changelog}, tag={tag}"
    )]
    InconsistentVersions {
        manifest: Version,
        changelog: Version,
        tag: Version,
    },

    #[error("Local version {local} is behind published version {published}")]
    BehindPublished { local: Version, published: Version },

    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Manifest {} has no '{field}:' field", path.display())]
    ManifestFieldMissing { path: PathBuf, field: String },

    #[error("Changelog not found: {}", path.display())]
    ChangelogNotFound { path: PathBuf },

    #[error("Changelog {} has no version heading", path.display())]
    ChangelogHeadingMissing { path: PathBuf },

    #[error("No version tag found in {}", path.display())]
    NoVersionTag { path: PathBuf },

    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pubver
pub type Result<T> = std::result::Result<T, PubverError>;

impl PubverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PubverError::Config(msg.into())
    }

    /// Create a registry error with context
    pub fn registry(msg: impl Into<String>) -> Self {
        PubverError::Registry(msg.into())
    }

    pub fn invalid_version(input: impl Into<String>, reason: impl ToString) -> Self {
        PubverError::InvalidVersion {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn field_missing(path: impl Into<PathBuf>, field: &str) -> Self {
        PubverError::ManifestFieldMissing {
            path: path.into(),
            field: field.to_string(),
        }
    }
}
