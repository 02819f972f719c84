//! Memoized checkout root lookup

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use devboot_exec::{CommandRunner, Invocation, OutputMode};

use crate::{Error, Result};

/// Directory that marks a checkout root.
pub const GIT_MARKER: &str = ".git";

/// Finds the checkout root enclosing `start_dir` and caches it.
///
/// The first call to [`RepoLocator::root`] runs `git rev-parse
/// --show-toplevel`; later calls return the cached path without touching
/// the runner again. A failed lookup is not cached.
pub struct RepoLocator<R> {
    runner: R,
    start_dir: PathBuf,
    root_cache: OnceLock<PathBuf>,
}

impl<R: CommandRunner> RepoLocator<R> {
    /// Create a locator that searches upward from `start_dir`.
    pub fn new(runner: R, start_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            start_dir: start_dir.into(),
            root_cache: OnceLock::new(),
        }
    }

    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// The checkout root, computed on first use.
    pub fn root(&self) -> Result<&Path> {
        if let Some(root) = self.root_cache.get() {
            return Ok(root);
        }
        let root = self.discover()?;
        tracing::debug!(root = %root.display(), "Resolved checkout root");
        Ok(self.root_cache.get_or_init(|| root))
    }

    fn discover(&self) -> Result<PathBuf> {
        let query = Invocation::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(&self.start_dir)
            .output(OutputMode::Capture)
            .unchecked();

        match self.runner.run(&query) {
            Ok(outcome) if outcome.is_success() => {
                let root = outcome.stdout.trim();
                if root.is_empty() {
                    return Err(Error::NotARepository);
                }
                Ok(PathBuf::from(root))
            }
            Ok(outcome) => {
                tracing::debug!(
                    code = ?outcome.code,
                    stderr = %outcome.stderr.trim(),
                    "git rev-parse rejected the directory"
                );
                Err(Error::NotARepository)
            }
            Err(devboot_exec::Error::NotFound { .. }) => {
                tracing::debug!("git not found, walking parent directories");
                find_marker_root(&self.start_dir).ok_or(Error::MarkerNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// The process working directory with symlinks resolved, as
/// `git rev-parse --show-toplevel` reports paths.
pub fn canonical_current_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|source| Error::WorkingDir {
        path: PathBuf::from("."),
        source,
    })?;
    dunce::canonicalize(&cwd).map_err(|source| Error::WorkingDir { path: cwd, source })
}

/// Walk from `start` up to the filesystem root and return the first
/// directory containing a [`GIT_MARKER`] directory.
pub fn find_marker_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(GIT_MARKER).is_dir())
        .map(Path::to_path_buf)
}
