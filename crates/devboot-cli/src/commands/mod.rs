//! Command implementations for devboot-cli

pub mod bootstrap;

pub use bootstrap::{BootstrapOptions, run_bootstrap};
