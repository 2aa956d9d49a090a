//! Tree model for directory snapshots.
//!
//! A snapshot is a strict, ordered tree of [`TreeNode`]s produced by an
//! external scanner. Each node carries a [`NodeId`] that stays stable for the
//! duration of one edit session. [`PathIndex`] derives the lookups that the
//! parser and the conflict analyzer need.
//!
//! # Examples
//!
//! ```
//! use treedit::tree::{PathIndex, TreeNode};
//!
//! let snapshot = TreeNode::from_json(
//!     r#"{"id":"1","name":"project","is_dir":true,"children":[
//!         {"id":"2","name":"README.md","is_dir":false,"children":[]}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let index = PathIndex::build(&snapshot);
//! assert_eq!(index.path_of(&"2".into()), Some("project/README.md"));
//! ```

mod index;
mod node;

pub use index::{IndexEntry, PathIndex};
pub use node::{NodeId, TreeNode};
