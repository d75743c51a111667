use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for branch-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Error getting current git branch: {0}")]
    BranchLookup(String),

    #[error("Branch '{branch}' is not supported: expected a feature or fix branch")]
    UnsupportedBranch { branch: String },

    #[error("Error reading {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No \"version\" field found in {}", .path.display())]
    VersionFieldNotFound { path: PathBuf },

    #[error("Error writing {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error committing changes: {0}")]
    Commit(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in branch-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a branch lookup error with context
    pub fn branch_lookup(msg: impl Into<String>) -> Self {
        BumpError::BranchLookup(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        BumpError::Commit(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        BumpError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn file_write(path: &Path, source: std::io::Error) -> Self {
        BumpError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}
