//! devboot
//!
//! Creates a Python virtual environment at the root of the current git
//! checkout and installs the project's development tools into it.

mod cli;
mod commands;
mod error;
mod instructions;
mod interactive;
mod output;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use commands::{BootstrapOptions, run_bootstrap};
use devboot_env::Platform;
use devboot_exec::SystemRunner;
use error::Result;
use interactive::TerminalPrompter;
use output::TerminalReporter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warning".yellow());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let platform = Platform::current();
    let options = BootstrapOptions {
        start_dir: devboot_git::canonical_current_dir()?,
        python: cli
            .python
            .unwrap_or_else(|| PathBuf::from(platform.default_host_python())),
        assume_yes: cli.yes,
        platform,
    };

    let outcome = run_bootstrap(
        &SystemRunner::new(),
        &mut TerminalPrompter::new(),
        &TerminalReporter,
        &options,
    )?;
    tracing::debug!(?outcome, "Finished");
    Ok(())
}
