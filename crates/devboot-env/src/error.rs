//! Error types for devboot-env

use std::path::PathBuf;

use crate::PythonVersion;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Exec(#[from] devboot_exec::Error),

    #[error(
        "Python {required} or later is required to run this script. \
         You are using Python {found}."
    )]
    UnsupportedPython {
        required: PythonVersion,
        found: PythonVersion,
    },

    #[error("Could not determine the version of '{program}' from: {output}")]
    UnrecognizedPython { program: String, output: String },

    /// `path` is the environment directory; it is kept out of the message.
    #[error(
        "'pip' is not available in the virtual environment after ensurepip. \
         Please check your Python installation."
    )]
    PipUnavailable { path: PathBuf },
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exec(e) => e.exit_code(),
            Self::UnsupportedPython { .. } => 2,
            Self::UnrecognizedPython { .. } | Self::PipUnavailable { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_python_message_and_code() {
        let err = Error::UnsupportedPython {
            required: PythonVersion::new(3, 8),
            found: PythonVersion::new(3, 7),
        };
        assert_eq!(
            err.to_string(),
            "Python 3.8 or later is required to run this script. You are using Python 3.7."
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exec_error_keeps_child_code() {
        let err = Error::from(devboot_exec::Error::Failed {
            program: "pip".to_string(),
            code: 9,
        });
        assert_eq!(err.exit_code(), 9);
    }

    #[test]
    fn test_pip_unavailable_message() {
        let err = Error::PipUnavailable {
            path: PathBuf::from("/work/.venv"),
        };
        assert_eq!(
            err.to_string(),
            "'pip' is not available in the virtual environment after ensurepip. \
             Please check your Python installation."
        );
        assert_eq!(err.exit_code(), 1);
    }
}
