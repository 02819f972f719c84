//! Error types for devboot-exec

/// Result type for command execution
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running an external command
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Command '{program}' not found. Is it in your PATH?")]
    NotFound { program: String },

    #[error("Command failed with exit code {code}")]
    Failed { program: String, code: i32 },

    #[error("Command '{program}' was terminated before it could exit")]
    Terminated { program: String },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code devboot should terminate with for this error.
    ///
    /// A child that exited non-zero hands its own code through.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed { code, .. } => *code,
            Self::NotFound { .. } | Self::Terminated { .. } | Self::Spawn { .. } => 1,
        }
    }
}
