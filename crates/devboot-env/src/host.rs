//! Host interpreter discovery and version gate

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use devboot_exec::{CommandRunner, Invocation, OutputMode};
use regex::Regex;

use crate::{Error, Result};

static VERSION_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)").unwrap());

/// Oldest host interpreter allowed to create the environment.
pub const MIN_HOST_PYTHON: PythonVersion = PythonVersion::new(3, 8);

/// Major and minor version of a Python interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the `python --version` banner, e.g. `Python 3.13.0rc1`.
    pub fn parse(banner: &str) -> Option<Self> {
        let caps = VERSION_BANNER.captures(banner)?;
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        Some(Self::new(major, minor))
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The interpreter that runs `-m venv`, after its version was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPython {
    program: PathBuf,
    version: PythonVersion,
}

impl HostPython {
    /// Ask `program --version` and require at least [`MIN_HOST_PYTHON`].
    ///
    /// Python 2 printed its banner on stderr, so both streams are searched.
    pub fn probe<R: CommandRunner>(runner: R, program: impl Into<PathBuf>) -> Result<Self> {
        let program = program.into();
        let outcome = runner.run(
            &Invocation::new(&program)
                .arg("--version")
                .output(OutputMode::Capture),
        )?;

        let banner = format!("{}\n{}", outcome.stdout, outcome.stderr);
        let version =
            PythonVersion::parse(&banner).ok_or_else(|| Error::UnrecognizedPython {
                program: program.display().to_string(),
                output: banner.trim().to_string(),
            })?;

        if version < MIN_HOST_PYTHON {
            return Err(Error::UnsupportedPython {
                required: MIN_HOST_PYTHON,
                found: version,
            });
        }

        tracing::debug!(program = %program.display(), %version, "Host Python accepted");
        Ok(Self { program, version })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn version(&self) -> PythonVersion {
        self.version
    }
}
