//! The bootstrap command
//!
//! Checks the host interpreter, finds the checkout root, asks for
//! confirmation, then creates `.venv` and installs the configured tools.

use std::path::PathBuf;

use devboot_env::{EnvironmentBuilder, HostPython, Platform, Reporter, ToolInstaller, VenvLayout};
use devboot_exec::CommandRunner;
use devboot_git::RepoLocator;
use devboot_meta::BootstrapConfig;

use crate::error::Result;
use crate::instructions::render_instructions;
use crate::interactive::{Prompter, confirm};

/// Inputs for [`run_bootstrap`].
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Directory the checkout root is searched from.
    pub start_dir: PathBuf,
    /// Interpreter that creates the environment.
    pub python: PathBuf,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    pub platform: Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Completed,
    Aborted,
}

/// Run the whole bootstrap flow.
///
/// Every failure is returned to the caller, which turns it into the
/// process exit code. Declining the prompt is not a failure.
pub fn run_bootstrap<R: CommandRunner>(
    runner: &R,
    prompter: &mut dyn Prompter,
    reporter: &dyn Reporter,
    options: &BootstrapOptions,
) -> Result<BootstrapOutcome> {
    let host = HostPython::probe(runner, &options.python)?;
    tracing::debug!(
        python = %host.program().display(),
        version = %host.version(),
        "Host interpreter"
    );

    let locator = RepoLocator::new(runner, &options.start_dir);
    let root = locator.root()?;

    reporter.info(&format!(
        "Current working directory: {}",
        locator.start_dir().display()
    ));
    reporter.info(&format!("Git repo root directory: {}", root.display()));

    if !options.assume_yes && !confirm(prompter)? {
        reporter.info("Aborted by user.");
        return Ok(BootstrapOutcome::Aborted);
    }

    reporter.heading(&format!(
        "Bootstrapping development environment (in {})",
        root.display()
    ));

    let config = BootstrapConfig::load(root)?;
    let layout = VenvLayout::in_root(root, options.platform);

    EnvironmentBuilder::new(runner, host.program(), reporter).ensure(&layout)?;
    ToolInstaller::new(runner, layout.python(), reporter).install(&config.tools)?;

    reporter.info(&render_instructions(options.platform));
    Ok(BootstrapOutcome::Completed)
}
