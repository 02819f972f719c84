//! Install specifications and configuration for devboot
//!
//! This crate provides the [`InstallSpec`] type describing one package to
//! install, and [`BootstrapConfig`], loaded from the optional
//! `.devboot.toml` at the checkout root.

pub mod config;
pub mod error;
pub mod spec;

pub use config::{BootstrapConfig, CONFIG_FILE, default_tools};
pub use error::{Error, Result};
pub use spec::InstallSpec;
