//! Tool installation into the environment

use std::path::{Path, PathBuf};

use devboot_exec::{CommandRunner, Invocation};
use devboot_meta::InstallSpec;

use crate::Result;
use crate::report::Reporter;

/// Package name of the fast installer front-end.
pub const FAST_INSTALLER: &str = "uv";

/// One installer call and the line announcing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    /// Reported at [`Level::Step`](crate::Level::Step).
    pub message: String,
    pub invocation: Invocation,
}

/// The ordered installer calls for a list of specs.
///
/// When [`FAST_INSTALLER`] is among the specs it is installed alone with
/// `pip`, then every other spec goes through `uv pip` in a single batch.
/// Otherwise all specs go through `pip` in a single batch. Specs repeating
/// the fast installer's name are installed once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallPlan {
    steps: Vec<InstallStep>,
}

impl InstallPlan {
    pub fn new(python: &Path, specs: &[InstallSpec]) -> Self {
        if specs.is_empty() {
            return Self::default();
        }

        let Some(fast) = specs.iter().find(|s| s.name() == FAST_INSTALLER) else {
            return Self {
                steps: vec![InstallStep {
                    message: "Installing modules using 'pip'".to_string(),
                    invocation: pip_install(python, specs.iter()),
                }],
            };
        };

        let mut steps = vec![InstallStep {
            message: format!(
                "Bootstrapping '{FAST_INSTALLER}' using 'pip': {fast}, {}",
                fast.version_or_latest()
            ),
            invocation: pip_install(python, std::iter::once(fast)),
        }];

        let rest: Vec<&InstallSpec> = specs
            .iter()
            .filter(|s| s.name() != FAST_INSTALLER)
            .collect();
        if !rest.is_empty() {
            steps.push(InstallStep {
                message: format!("Installing remaining modules using '{FAST_INSTALLER} pip'"),
                invocation: fast_install(python, rest.into_iter()),
            });
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[InstallStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn pip_install<'s>(python: &Path, specs: impl Iterator<Item = &'s InstallSpec>) -> Invocation {
    Invocation::new(python)
        .args(["-m", "pip", "--require-virtualenv", "install", "-U"])
        .args(specs.map(InstallSpec::requirement))
}

fn fast_install<'s>(python: &Path, specs: impl Iterator<Item = &'s InstallSpec>) -> Invocation {
    Invocation::new(python)
        .args(["-m", FAST_INSTALLER, "pip", "install", "-U"])
        .args(specs.map(InstallSpec::requirement))
}

/// Installs or upgrades specs with the environment's interpreter.
pub struct ToolInstaller<'a, R> {
    runner: R,
    python: PathBuf,
    reporter: &'a dyn Reporter,
}

impl<'a, R: CommandRunner> ToolInstaller<'a, R> {
    /// `python` is the interpreter inside the environment.
    pub fn new(runner: R, python: impl Into<PathBuf>, reporter: &'a dyn Reporter) -> Self {
        Self {
            runner,
            python: python.into(),
            reporter,
        }
    }

    /// Run the [`InstallPlan`] for `specs`. An empty list does nothing.
    ///
    /// The first failing installer call ends the run; nothing is retried
    /// or rolled back.
    pub fn install(&self, specs: &[InstallSpec]) -> Result<()> {
        let plan = InstallPlan::new(&self.python, specs);
        if plan.is_empty() {
            return Ok(());
        }

        self.reporter
            .info("Installing/updating core development tools...");
        for step in plan.steps() {
            self.reporter.step(&step.message);
            self.runner.run(&step.invocation)?;
        }
        tracing::info!(count = specs.len(), "Tools installed");
        Ok(())
    }
}
