//! Result of a finished child process

/// Exit code and any captured output of a child process.
///
/// `code` is `None` when the child was terminated without an exit code
/// (for instance by a signal). Output fields stay empty unless the
/// invocation used [`OutputMode::Capture`](crate::OutputMode::Capture).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    /// A zero exit with no output.
    pub fn success() -> Self {
        Self::exited(0)
    }

    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}
