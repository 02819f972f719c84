//! Paths inside the `.venv` directory

use std::path::{Path, PathBuf};

use crate::Platform;

/// Directory name of the environment under the checkout root.
pub const VENV_DIR_NAME: &str = ".venv";

/// Location of a virtual environment and the executables it will contain.
///
/// Nothing here touches the filesystem except [`VenvLayout::exists`]; the
/// paths are valid before the environment is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvLayout {
    dir: PathBuf,
    platform: Platform,
}

impl VenvLayout {
    pub fn new(dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            dir: dir.into(),
            platform,
        }
    }

    /// `<root>/.venv`
    pub fn in_root(root: &Path, platform: Platform) -> Self {
        Self::new(root.join(VENV_DIR_NAME), platform)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.join(self.platform.bin_dir())
    }

    /// The environment's interpreter.
    pub fn python(&self) -> PathBuf {
        self.bin_dir().join(self.platform.python_exe())
    }

    /// The standalone `pip` executable.
    pub fn pip(&self) -> PathBuf {
        self.bin_dir().join(self.platform.pip_exe())
    }

    pub fn exists(&self) -> bool {
        self.dir.exists()
    }
}
