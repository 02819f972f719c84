//! Virtual environment creation

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use devboot_exec::{CommandRunner, Invocation, OutputMode};

use crate::report::Reporter;
use crate::{Error, Result, VenvLayout};

/// What [`EnvironmentBuilder::ensure`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvStatus {
    Created,
    AlreadyPresent,
}

/// Creates a virtual environment with a working, up-to-date `pip`.
///
/// Creation only happens when the environment directory is absent, so
/// running the builder again is a no-op. The `pip` import probe is cached
/// per interpreter path for the builder's lifetime.
pub struct EnvironmentBuilder<'a, R> {
    runner: R,
    host_python: PathBuf,
    reporter: &'a dyn Reporter,
    pip_probe: RefCell<HashMap<PathBuf, bool>>,
}

impl<'a, R: CommandRunner> EnvironmentBuilder<'a, R> {
    /// `host_python` is the interpreter that runs `-m venv`.
    pub fn new(runner: R, host_python: impl Into<PathBuf>, reporter: &'a dyn Reporter) -> Self {
        Self {
            runner,
            host_python: host_python.into(),
            reporter,
            pip_probe: RefCell::new(HashMap::new()),
        }
    }

    /// Create the environment described by `layout` unless its directory exists.
    pub fn ensure(&self, layout: &VenvLayout) -> Result<EnvStatus> {
        if layout.exists() {
            self.reporter.info(&format!(
                "Virtual environment '{}' already exists. Skipping creation.",
                layout.dir().display()
            ));
            return Ok(EnvStatus::AlreadyPresent);
        }

        self.reporter.info(&format!(
            "Creating virtual environment in '{}'...",
            layout.dir().display()
        ));
        self.runner.run(
            &Invocation::new(&self.host_python)
                .args(["-m", "venv"])
                .arg(layout.dir()),
        )?;

        self.reporter
            .substep("Ensuring pip CLI script is installed in the virtual environment...");
        self.runner.run(
            &Invocation::new(layout.python()).args(["-m", "ensurepip", "--upgrade"]),
        )?;

        self.reporter
            .substep("Upgrading pip in the virtual environment to latest version...");
        self.upgrade_pip(layout)?;

        tracing::info!(venv = %layout.dir().display(), "Virtual environment created");
        Ok(EnvStatus::Created)
    }

    /// Upgrade pip through the module when it imports, otherwise through
    /// the standalone executable.
    fn upgrade_pip(&self, layout: &VenvLayout) -> Result<()> {
        let python = layout.python();
        if self.pip_module_available(&python) {
            self.runner.run(&Invocation::new(&python).args([
                "-m",
                "pip",
                "install",
                "--upgrade",
                "pip",
                "--require-virtualenv",
            ]))?;
            return Ok(());
        }

        let pip = layout.pip();
        if !pip.exists() {
            return Err(Error::PipUnavailable {
                path: layout.dir().to_path_buf(),
            });
        }
        tracing::debug!(pip = %pip.display(), "pip module not importable, using executable");
        self.runner
            .run(&Invocation::new(&pip).args(["install", "--upgrade", "pip"]))?;
        Ok(())
    }

    /// Whether `python -m pip` works for this interpreter.
    pub fn pip_module_available(&self, python: &Path) -> bool {
        if let Some(&available) = self.pip_probe.borrow().get(python) {
            return available;
        }

        let probe = Invocation::new(python)
            .args(["-m", "pip", "--version"])
            .output(OutputMode::Quiet)
            .unchecked();
        let available = match self.runner.run(&probe) {
            Ok(outcome) => outcome.is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "pip probe could not run");
                false
            }
        };

        self.pip_probe
            .borrow_mut()
            .insert(python.to_path_buf(), available);
        available
    }
}
