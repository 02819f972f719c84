//! CommandRunner trait and the process-spawning implementation

use std::io;
use std::process::{Command, Stdio};

use crate::{Error, Invocation, Outcome, OutputMode, Result};

/// Executes invocations synchronously.
///
/// Implementations must honour [`Invocation::is_checked`]; [`check_outcome`]
/// applies that policy to a finished outcome.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<Outcome>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<Outcome> {
        (**self).run(invocation)
    }
}

/// Turn a non-zero exit into an error when the invocation is checked.
pub fn check_outcome(invocation: &Invocation, outcome: Outcome) -> Result<Outcome> {
    if !invocation.is_checked() || outcome.is_success() {
        return Ok(outcome);
    }
    let program = invocation.program_display();
    match outcome.code {
        Some(code) => Err(Error::Failed { program, code }),
        None => Err(Error::Terminated { program }),
    }
}

/// Runs invocations as real child processes, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<Outcome> {
        tracing::debug!(
            command = %invocation,
            cwd = ?invocation.working_dir(),
            output = ?invocation.output_mode(),
            "Running command"
        );

        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.arguments());
        if let Some(dir) = invocation.working_dir() {
            cmd.current_dir(dir);
        }

        let outcome = match invocation.output_mode() {
            OutputMode::Inherit => {
                let status = cmd.status().map_err(|e| spawn_error(invocation, e))?;
                Outcome {
                    code: status.code(),
                    ..Outcome::default()
                }
            }
            OutputMode::Quiet => {
                let status = cmd
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .map_err(|e| spawn_error(invocation, e))?;
                Outcome {
                    code: status.code(),
                    ..Outcome::default()
                }
            }
            OutputMode::Capture => {
                let output = cmd.output().map_err(|e| spawn_error(invocation, e))?;
                Outcome {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
        };

        tracing::debug!(command = %invocation, code = ?outcome.code, "Command finished");
        check_outcome(invocation, outcome)
    }
}

fn spawn_error(invocation: &Invocation, source: io::Error) -> Error {
    let program = invocation.program_display();
    if source.kind() == io::ErrorKind::NotFound {
        Error::NotFound { program }
    } else {
        Error::Spawn { program, source }
    }
}
