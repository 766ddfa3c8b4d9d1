//! Timestamped logging to stderr.
//!
//! Stdout carries the board dump, so every log line goes to stderr.

use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug)]
pub(crate) struct Logger {
    verbose: bool,
}

impl Logger {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_line(message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        format!("[{timestamp}] {message}")
    }

    pub(crate) fn log(&self, message: &str) {
        eprintln!("{}", Self::format_line(message));
    }

    pub(crate) fn verbose(&self, message: &str) {
        if self.verbose {
            self.log(message);
        }
    }
}

pub(crate) fn init_logger(verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(verbose));
}

pub(crate) fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub(crate) fn verbose(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.verbose(message);
    }
}

/// Log a line unconditionally.
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::cli::logger::log(&format!($($arg)*))
    };
}

/// Log a line only when `--verbose` was given.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::cli::logger::verbose(&format!($($arg)*))
    };
}
