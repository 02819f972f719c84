//! Git checkout fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.
//! The fake needs neither git2 nor a git CLI to be meaningful.

use std::fs;
use std::path::Path;

/// Creates a bare `.git` marker directory without a real repository.
///
/// Realism level: **FAKE**. The upward directory walk accepts it, `git
/// rev-parse` does not.
///
/// # Panics
/// Panics if the directory cannot be created.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
}

/// Initialises a real git repository using `git2` (no commits, no config).
///
/// Realism level: **REAL**. `git rev-parse --show-toplevel` succeeds inside it.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}
