//! Configuration types and loading for devboot
//!
//! This module loads the optional `.devboot.toml` at the checkout root:
//!
//! ```toml
//! [[tools]]
//! name = "uv"
//! version = ">=0.9.18"
//!
//! [[tools]]
//! name = "black"
//! extras = "[jupyter]"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, InstallSpec, Result};

/// File name of the optional project configuration.
pub const CONFIG_FILE: &str = ".devboot.toml";

/// Tools installed when the project does not say otherwise.
pub fn default_tools() -> Vec<InstallSpec> {
    vec![
        InstallSpec::new("uv").with_version(">=0.9.18"),
        InstallSpec::new("tox").with_version(">=4.32.0"),
        InstallSpec::new("tox-uv").with_version(">=1.29.0"),
    ]
}

/// What devboot installs into the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Packages to install; replaces [`default_tools`] when present.
    #[serde(default = "default_tools")]
    pub tools: Vec<InstallSpec>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tools: default_tools(),
        }
    }
}

impl BootstrapConfig {
    /// Load `.devboot.toml` from `root`, or the defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = Self::parse(&content, &path)?;
        tracing::debug!(
            path = %path.display(),
            tools = config.tools.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse and validate config text; `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tools.iter().try_for_each(InstallSpec::validate)
    }
}
