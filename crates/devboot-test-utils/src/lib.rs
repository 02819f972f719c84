//! Shared test utilities for the devboot workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`runner`]: [`RecordingRunner`], a scripted [`CommandRunner`] fake
//!   that records every invocation for call-count assertions
//! - [`git`]: git checkout fixtures at two realism levels
//! - [`repo`]: [`TestRepo`] builder for end-to-end scenarios
//!
//! [`CommandRunner`]: devboot_exec::CommandRunner

pub mod git;
pub mod repo;
pub mod runner;

pub use repo::TestRepo;
pub use runner::{RecordingRunner, args_contain, program_is};
