//! Error types for the treedit library.
//!
//! Parsing and conflict analysis never fail: they report problems as
//! diagnostics and conflict entries. The errors here cover the host-facing
//! edges of the library, such as decoding snapshots and loading configuration.

use thiserror::Error;

/// Result type alias for operations that may fail with a treedit error.
///
/// # Examples
///
/// ```
/// use treedit::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the treedit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A snapshot or tree could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An input snapshot breaks one of the tree invariants.
    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot {
        /// What is wrong with the snapshot.
        reason: String,
    },

    /// The edited text contained no lines to parse.
    #[error("failed to parse tree text: no non-blank lines")]
    EmptyText,
}

impl Error {
    /// Check if the error came from an input snapshot rather than the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedit::Error;
    ///
    /// let err = Error::InvalidSnapshot { reason: "duplicate id".into() };
    /// assert!(err.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::InvalidSnapshot { .. } | Self::EmptyText
        )
    }
}
