//! External command execution for devboot
//!
//! Every tool devboot drives (git, the host interpreter, pip, uv) runs
//! through a [`CommandRunner`]. The runner is the only place child process
//! failures turn into errors; callers propagate them with `?` up to the
//! binary, which reports them and exits with [`Error::exit_code`].

pub mod error;
pub mod invocation;
pub mod outcome;
pub mod runner;

pub use error::{Error, Result};
pub use invocation::{Invocation, OutputMode};
pub use outcome::Outcome;
pub use runner::{CommandRunner, SystemRunner, check_outcome};
