//! Line-oriented output for the non-interactive commands
//!
//! Commands that print (the `list` and `config` subcommands) write through
//! [`OutputWriter`] so they can be pointed at stdout or captured in tests.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

/// Severity of a line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain output, such as data rows
    Normal,
    Error,
    Success,
    Warning,
    /// Secondary text such as page summaries
    Info,
}

/// Sink for command output
///
/// # Examples
///
/// ```no_run
/// use postdeck::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("1  His mother had always taught him");
/// output.info("1-10 of 251");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a line at the given level
    fn emit(&self, level: MessageLevel, message: &str);

    /// Data line; printed even when quiet
    fn write(&self, message: &str) {
        self.emit(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.emit(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.emit(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.emit(MessageLevel::Info, message);
    }
}

/// Terminal writer with colored prefixes
///
/// Errors and warnings go to stderr so piped data stays clean. With `quiet`
/// set only errors and normal lines are printed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress success, warning and info messages
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl OutputWriter for StdoutWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => println!("{message}"),
            MessageLevel::Error => eprintln!("{} {}", "error:".red().bold(), message),
            _ if self.quiet => {}
            MessageLevel::Success => println!("{} {}", "✓".green(), message),
            MessageLevel::Warning => eprintln!("{} {}", "warning:".yellow(), message),
            MessageLevel::Info => println!("{}", message.dimmed()),
        }
    }
}

/// Writer that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryWriter {
    lines: Mutex<Vec<(MessageLevel, String)>>,
}

impl MemoryWriter {
    /// Create an empty writer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    #[must_use]
    pub fn lines(&self) -> Vec<(MessageLevel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text of the lines written at `level`
    #[must_use]
    pub fn lines_at(&self, level: MessageLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }
}

impl OutputWriter for MemoryWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}
