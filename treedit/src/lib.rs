#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # treedit
//!
//! A library for restructuring directory trees by editing text.
//!
//! A snapshot of a directory is rendered as an indented, connector-glyph
//! listing. The user edits the listing freely, and the edited text is parsed
//! back against the snapshot so that each line keeps the identity of the entry
//! it came from. Renamed and moved entries are annotated with their old and
//! new paths, and the result is checked for structural conflicts before it is
//! handed to whatever applies the changes.
//!
//! ## Core Types
//!
//! - [`TreeNode`] and [`NodeId`]: Snapshot entries and their stable ids
//! - [`format_tree`] and [`parse()`]: The text notation, both directions
//! - [`analyze`] and [`ConflictReport`]: Duplicate files and folder merges
//! - [`Diagnostic`] and [`DiagnosticSink`]: What parsing recovered from
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use treedit::{analyze, format_tree, parse, TreeNode};
//!
//! let original = TreeNode::dir("r", "project").with_children(vec![
//!     TreeNode::dir("s", "src").with_children(vec![TreeNode::file("m", "main.rs")]),
//!     TreeNode::file("n", "notes.txt"),
//! ]);
//!
//! let text = format_tree(&original);
//! assert_eq!(text, "project/\n├── src/\n│   └── main.rs\n└── notes.txt\n");
//!
//! // The user renames notes.txt.
//! let edited = text.replace("notes.txt", "README.md");
//! let parsed = parse(&edited, &original).unwrap();
//!
//! let readme = &parsed.root.children[1];
//! assert_eq!(readme.id.as_str(), "n");
//! assert_eq!(readme.old_path.as_deref(), Some("project/notes.txt"));
//! assert!(analyze(&parsed.root).valid);
//! ```

pub mod config;
pub mod conflict;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod output;
pub mod text;
pub mod tree;
pub mod verify;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use conflict::{analyze, ConflictKind, ConflictReport, FileConflict, FolderMerge};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink, Severity};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use text::{
    check_root_name_change, format_tree, parse, restore_root_line, MatchConfidence, Move,
    ParsedTree, RootNameChange,
};
pub use tree::{NodeId, PathIndex, TreeNode};
pub use verify::{verify_round_trip, RoundTripReport};
