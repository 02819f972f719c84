//! Checkout root discovery for devboot
//!
//! Asks `git` for the top-level directory of the enclosing checkout and
//! falls back to walking parent directories for a `.git` marker when the
//! git CLI is not installed.

pub mod error;
pub mod locator;

pub use error::{Error, Result};
pub use locator::{GIT_MARKER, RepoLocator, canonical_current_dir, find_marker_root};
