//! [`TestRepo`] builder for devboot test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary checkout directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use devboot_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.init_git();
/// repo.write_config("tools = []\n");
/// repo.assert_file_exists(".devboot.toml");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root with symlinks resolved, as `git rev-parse` reports it.
    pub fn canonical_root(&self) -> PathBuf {
        dunce::canonicalize(self.root()).unwrap()
    }

    /// Initialise the directory as a real git repository using `git2`.
    pub fn init_git(&self) {
        crate::git::real_git_repo(self.root());
    }

    /// Create a `.git` marker directory only.
    pub fn fake_git(&self) {
        crate::git::fake_git_dir(self.root());
    }

    /// Create (and return) a nested subdirectory, e.g. `src/deep`.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `.devboot.toml` at the root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join(".devboot.toml"), content).unwrap();
    }

    /// Write an executable script at `rel` (unix only).
    #[cfg(unix)]
    pub fn write_script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the repo root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
