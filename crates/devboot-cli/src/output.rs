//! Terminal progress output

use colored::Colorize;
use devboot_env::{Level, Reporter};

/// Prints progress lines to stdout with coloured markers.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&self, level: Level, message: &str) {
        println!("{}", styled(level, message));
    }
}

fn styled(level: Level, message: &str) -> String {
    match (level, level.marker()) {
        (Level::Heading, _) => level.render(message).bold().to_string(),
        (Level::Step, Some(marker)) => format!("{} {message}", marker.green().bold()),
        (_, Some(marker)) => format!("{} {message}", marker.cyan()),
        (_, None) => message.to_string(),
    }
}
