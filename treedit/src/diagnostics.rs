//! Structured diagnostics emitted while reconciling edited text.
//!
//! Parsing never prints anything. Every recoverable oddity it runs into is
//! recorded as a [`Diagnostic`] on the parse result, and hosts decide where
//! those go by handing them to a [`DiagnosticSink`].

use std::fmt;

use serde::Serialize;

use crate::logging::Logger;
use crate::tree::NodeId;

/// How much attention a diagnostic deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; nothing unexpected happened.
    Info,
    /// Something was recovered from, but the result may not be what the user
    /// intended.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// The kinds of events the parser reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The first line named a different root; the original root was kept.
    RootNameChanged {
        /// Root name from the snapshot.
        original: String,
        /// Root name found in the text.
        edited: String,
    },

    /// A line had no ancestor to attach to and was dropped.
    OrphanLine {
        /// Name extracted from the dropped line.
        name: String,
        /// Nesting level computed for the line.
        level: usize,
    },

    /// No unused node had the line's name, so an arbitrary unused id was
    /// taken.
    FallbackMatch {
        /// Name on the edited line.
        name: String,
        /// Id that was assigned.
        id: NodeId,
    },

    /// Every original id was already used, so a new one was minted.
    MintedId {
        /// Name on the edited line.
        name: String,
        /// The minted id.
        id: NodeId,
    },

    /// An id ended up on two nodes and the later one was given a new id.
    IdCollisionRepaired {
        /// The id that was assigned twice.
        duplicate: NodeId,
        /// The replacement id.
        replacement: NodeId,
    },

    /// A line was nested under a file, which was turned into a directory.
    ImplicitDirectory {
        /// Name of the promoted node.
        name: String,
    },

    /// A name that cannot exist on a filesystem.
    InvalidName {
        /// The offending name.
        name: String,
        /// Why it is invalid.
        reason: &'static str,
    },
}

/// One diagnostic, tied to the line of edited text it came from.
///
/// `line` is a zero-based index into the non-blank lines of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Zero-based index of the non-blank line.
    pub line: usize,
    /// What happened.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a diagnostic for a line.
    #[must_use]
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }

    /// Severity implied by the kind.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::MintedId { .. } | DiagnosticKind::ImplicitDirectory { .. } => {
                Severity::Info
            }
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line + 1)?;
        match &self.kind {
            DiagnosticKind::RootNameChanged { original, edited } => write!(
                f,
                "root name cannot be changed ('{edited}' restored to '{original}')"
            ),
            DiagnosticKind::OrphanLine { name, level } => {
                write!(f, "no parent found for '{name}' at level {level}, line dropped")
            }
            DiagnosticKind::FallbackMatch { name, id } => {
                write!(f, "'{name}' matched no unused entry by name, reusing id {id}")
            }
            DiagnosticKind::MintedId { name, id } => {
                write!(f, "'{name}' is a new entry with id {id}")
            }
            DiagnosticKind::IdCollisionRepaired {
                duplicate,
                replacement,
            } => write!(
                f,
                "id {duplicate} was assigned twice, replaced with {replacement}"
            ),
            DiagnosticKind::ImplicitDirectory { name } => {
                write!(f, "'{name}' has nested entries and is treated as a directory")
            }
            DiagnosticKind::InvalidName { name, reason } => {
                write!(f, "invalid name '{name}': {reason}")
            }
        }
    }
}

/// Destination for diagnostics.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink {
    /// Receive one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => log::debug!("{diagnostic}"),
            Severity::Warning => log::warn!("{diagnostic}"),
        }
    }
}

impl DiagnosticSink for Logger {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.diagnostic(diagnostic);
    }
}

/// Send every diagnostic to `sink`, in order.
pub fn report_all(diagnostics: &[Diagnostic], sink: &dyn DiagnosticSink) {
    for diagnostic in diagnostics {
        sink.emit(diagnostic);
    }
}
