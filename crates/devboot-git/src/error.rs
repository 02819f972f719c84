//! Error types for devboot-git

use std::path::PathBuf;

/// Result type for devboot-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating the checkout root
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "This does not appear to be a git repository. \
         Please run from within the cloned project directory."
    )]
    NotARepository,

    #[error(".git directory not found in any parent directories.")]
    MarkerNotFound,

    #[error("Cannot resolve working directory {path}: {source}")]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Exec(#[from] devboot_exec::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exec(e) => e.exit_code(),
            Self::NotARepository | Self::MarkerNotFound | Self::WorkingDir { .. } => 1,
        }
    }
}
