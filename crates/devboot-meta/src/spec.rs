//! A single package to install into the environment

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One package requirement: a name plus optional extras and version constraint.
///
/// [`InstallSpec::requirement`] is what installers receive; the
/// [`Display`](fmt::Display) form is for people and marks a missing version
/// as `(latest)`. Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallSpec {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extras: Option<String>,
}

impl InstallSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            extras: None,
        }
    }

    /// Version constraint such as `>=1.0.0`.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Extras such as `[dev]`.
    pub fn with_extras(mut self, extras: impl Into<String>) -> Self {
        self.extras = Some(extras.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    pub fn extras(&self) -> Option<&str> {
        self.extras.as_deref().filter(|e| !e.is_empty())
    }

    /// The installer argument: name, then extras, then version constraint.
    pub fn requirement(&self) -> String {
        let mut req = self.name.clone();
        if let Some(extras) = self.extras() {
            req.push_str(extras);
        }
        if let Some(version) = self.version() {
            req.push_str(version);
        }
        req
    }

    /// Version constraint, or `latest` when none is pinned.
    pub fn version_or_latest(&self) -> &str {
        self.version().unwrap_or("latest")
    }

    /// Reject names installers cannot take as a single argument and
    /// extras that are not bracketed.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidSpec {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(invalid("name must not contain whitespace"));
        }
        if let Some(extras) = self.extras()
            && !(extras.starts_with('[') && extras.ends_with(']'))
        {
            return Err(invalid("extras must be bracketed, e.g. \"[dev]\""));
        }
        Ok(())
    }
}

impl fmt::Display for InstallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.extras().unwrap_or(""))?;
        match self.version() {
            Some(version) => write!(f, "{version}"),
            None => write!(f, " (latest)"),
        }
    }
}
