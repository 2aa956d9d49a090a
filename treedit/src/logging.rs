//! Stderr reporting for treedit hosts.
//!
//! The library hands diagnostics back as values and mirrors them to the
//! `log` facade. Hosts without a `log` backend use [`Logger`], which prints
//! parse diagnostics and progress notes at a verbosity taken from flags,
//! configuration or `TREEDIT_LOG_MODE`.

use crate::diagnostics::{Diagnostic, Severity};
use crate::error::{Error, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "TREEDIT_LOG_MODE";

/// How much of a parse the logger reports.
///
/// # Examples
///
/// ```
/// use treedit::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but the command's own output.
    Quiet,
    /// Warning diagnostics: dropped lines, reused ids, restored root names.
    Normal,
    /// Also new ids, implicit directories and progress notes.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parse a level read from the setting `field`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming `field` when the value is not
    /// `quiet`, `normal` or `verbose`.
    pub fn from_setting(field: &str, value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("expected quiet, normal or verbose, got '{value}'"),
            }),
        }
    }

    /// Lowest level at which a diagnostic of `severity` is printed.
    const fn threshold(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Self::Normal,
            Severity::Info => Self::Verbose,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_setting("log_mode", s)
    }
}

/// Level-filtered stderr reporter.
///
/// # Examples
///
/// ```
/// use treedit::{Diagnostic, DiagnosticKind, LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let orphan = Diagnostic::new(2, DiagnosticKind::OrphanLine { name: "x".into(), level: 3 });
/// assert_eq!(
///     logger.render(&orphan).as_deref(),
///     Some("warning: line 3: no parent found for 'x' at level 3, line dropped")
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Pick a level from flags first, then a configured mode.
    ///
    /// `verbose` wins over `quiet`. An unrecognized `log_mode` falls back to
    /// [`LogLevel::Normal`]; configuration validation reports it separately.
    #[must_use]
    pub fn resolve(verbose: bool, quiet: bool, log_mode: Option<&str>) -> Self {
        if verbose {
            return Self::new(LogLevel::Verbose);
        }
        if quiet {
            return Self::new(LogLevel::Quiet);
        }

        let level = log_mode
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(LogLevel::Normal);
        Self::new(level)
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// The line printed for `diagnostic`, or `None` if the level hides it.
    ///
    /// Warnings are tagged `warning`, informational diagnostics `note`.
    #[must_use]
    pub fn render(&self, diagnostic: &Diagnostic) -> Option<String> {
        let severity = diagnostic.severity();
        if self.level < LogLevel::threshold(severity) {
            return None;
        }

        let tag = match severity {
            Severity::Warning => "warning",
            Severity::Info => "note",
        };
        Some(format!("{tag}: {diagnostic}"))
    }

    /// Print one parse diagnostic.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        if let Some(line) = self.render(diagnostic) {
            eprintln!("{line}");
        }
    }

    /// Warn about something the user should act on, at Normal and above.
    pub fn warn(&self, message: &str) {
        self.write(LogLevel::Normal, "warning", message);
    }

    /// Progress note, at Verbose.
    pub fn info(&self, message: &str) {
        self.write(LogLevel::Verbose, "info", message);
    }

    /// Internal detail, at Verbose.
    pub fn debug(&self, message: &str) {
        self.write(LogLevel::Verbose, "debug", message);
    }

    fn write(&self, threshold: LogLevel, tag: &str, message: &str) {
        if self.level >= threshold {
            eprintln!("{tag}: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Logger from CLI flags, falling back to `TREEDIT_LOG_MODE`.
///
/// # Examples
///
/// ```
/// use treedit::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let mode = env::var(LOG_MODE_ENV).ok();
    Logger::resolve(verbose, quiet, mode.as_deref())
}
