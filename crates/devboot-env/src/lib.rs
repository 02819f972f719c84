//! Python environment providers for devboot.
//!
//! - [`HostPython`] checks the interpreter used to create the environment.
//! - [`EnvironmentBuilder`] creates `.venv` and makes sure `pip` works in it.
//! - [`ToolInstaller`] installs [`InstallSpec`]s, preferring `uv` when it is
//!   one of them.
//!
//! [`InstallSpec`]: devboot_meta::InstallSpec

pub mod builder;
pub mod error;
pub mod host;
pub mod installer;
pub mod layout;
pub mod platform;
pub mod report;

pub use builder::{EnvStatus, EnvironmentBuilder};
pub use error::{Error, Result};
pub use host::{HostPython, MIN_HOST_PYTHON, PythonVersion};
pub use installer::{FAST_INSTALLER, InstallPlan, InstallStep, ToolInstaller};
pub use layout::{VENV_DIR_NAME, VenvLayout};
pub use platform::Platform;
pub use report::{Level, Reporter, Silent, Transcript};
