//! User-facing output.
//!
//! Operations never print directly: they receive a [Reporter] and push
//! status, success and error lines through it. The binary uses
//! [ConsoleReporter]; tests use [MemoryReporter] to assert on what was said.

use std::cell::RefCell;

pub mod formatter;

pub use formatter::{format_error, format_status, format_success, format_version_change};

/// Severity of one reported line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Status,
    Success,
    Error,
}

impl Level {
    /// Style `message` the way the console shows this level
    pub fn format(self, message: &str) -> String {
        match self {
            Level::Status => format_status(message),
            Level::Success => format_success(message),
            Level::Error => format_error(message),
        }
    }
}

/// Structured output sink passed into every operation
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn status(&self, message: &str) {
        self.report(Level::Status, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Styled terminal output; errors go to stderr, everything else to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        let line = level.format(message);
        match level {
            Level::Error => eprintln!("{}", line),
            Level::Status | Level::Success => println!("{}", line),
        }
    }
}

/// Reporter that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Messages reported at `level`, in order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
