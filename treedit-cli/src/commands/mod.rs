//! CLI command implementations.
//!
//! - `format`: Render a snapshot as tree text
//! - `check_root`: Detect and undo edits to the root line
//! - `parse`: Parse edited text against a snapshot
//! - `analyze`: Report duplicate files and folder merges
//! - `reconcile`: The full flow, ending in the hand-off document
//! - `verify`: Round-trip self-check
//! - `validate`: Validate configuration file
//! - `completions`: Shell completion scripts

pub mod analyze;
pub mod check_root;
pub mod completions;
pub mod format;
pub mod parse;
pub mod reconcile;
pub mod validate;
pub mod verify;

pub use analyze::AnalyzeCommand;
pub use check_root::CheckRootCommand;
pub use completions::CompletionsCommand;
pub use format::FormatCommand;
pub use parse::ParseCommand;
pub use reconcile::ReconcileCommand;
pub use validate::ValidateCommand;
pub use verify::VerifyCommand;
