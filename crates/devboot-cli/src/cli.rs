//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Bootstrap a local Python development environment
///
/// Creates a `.venv` directory in the git checkout root, installs the
/// development tools listed in `.devboot.toml` (uv, tox and tox-uv by
/// default) into it, and prints how to use them.
#[derive(Parser, Debug)]
#[command(name = "devboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Python interpreter used to create the environment
    #[arg(long, env = "DEVBOOT_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,
}
