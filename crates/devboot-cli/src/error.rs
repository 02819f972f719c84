//! Error types for devboot-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a devboot run
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Git(#[from] devboot_git::Error),

    #[error(transparent)]
    Meta(#[from] devboot_meta::Error),

    #[error(transparent)]
    Env(#[from] devboot_env::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    #[error("Failed to set Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl CliError {
    /// Exit code the process terminates with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Git(e) => e.exit_code(),
            Self::Meta(e) => e.exit_code(),
            Self::Env(e) => e.exit_code(),
            Self::Io(_) | Self::Dialoguer(_) | Self::Signal(_) => 1,
        }
    }
}
