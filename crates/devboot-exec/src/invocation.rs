//! Description of a single external command

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// How the child's output streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to the terminal.
    #[default]
    Inherit,
    /// stdout and stderr are collected into the [`Outcome`](crate::Outcome).
    Capture,
    /// stdout and stderr are discarded.
    Quiet,
}

/// A program, its arguments, and the options it runs with.
///
/// Invocations are checked by default: a non-zero exit becomes
/// [`Error::Failed`](crate::Error::Failed). Use [`Invocation::unchecked`]
/// when the caller wants to inspect the exit code itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
    output: OutputMode,
    check: bool,
}

impl Invocation {
    /// Start an invocation of `program` (a bare name looked up on PATH, or a path).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            output: OutputMode::default(),
            check: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Return non-zero exits as an outcome instead of an error.
    pub fn unchecked(mut self) -> Self {
        self.check = false;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output
    }

    pub fn is_checked(&self) -> bool {
        self.check
    }

    /// Program as shown in diagnostics.
    pub fn program_display(&self) -> String {
        self.program.display().to_string()
    }

    /// Arguments as lossy UTF-8 strings.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
