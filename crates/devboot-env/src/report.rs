//! Progress reporting hook
//!
//! Messages are emitted before the child process they announce starts, so
//! they interleave correctly with the child's own terminal output.

use std::cell::RefCell;

/// How prominent a progress line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Section banner, rendered as `--- message ---`.
    Heading,
    /// Top-level action, rendered as `--> message`.
    Step,
    /// Part of the current step, rendered as `---> message`.
    Substep,
    Plain,
}

impl Level {
    /// Marker printed before the message, if any.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Step => Some("-->"),
            Self::Substep => Some("--->"),
            Self::Heading | Self::Plain => None,
        }
    }

    /// The uncoloured line for `message` at this level.
    pub fn render(self, message: &str) -> String {
        match (self, self.marker()) {
            (Self::Heading, _) => format!("--- {message} ---"),
            (_, Some(marker)) => format!("{marker} {message}"),
            (_, None) => message.to_string(),
        }
    }
}

/// Receives human-readable progress lines.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Plain, message);
    }

    fn heading(&self, message: &str) {
        self.report(Level::Heading, message);
    }

    fn step(&self, message: &str) {
        self.report(Level::Step, message);
    }

    fn substep(&self, message: &str) {
        self.report(Level::Substep, message);
    }
}

/// Drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&self, _level: Level, _message: &str) {}
}

/// Keeps every rendered line in order.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }
}

impl Reporter for Transcript {
    fn report(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push(level.render(message));
    }
}
