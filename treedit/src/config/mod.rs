//! Configuration system for treedit.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `treedit.yaml`)
//! - An explicit configuration file chosen by the host
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TREEDIT_*`)
//! 3. Explicit file (via `ConfigBuilder::with_file`)
//! 4. Project config (nearest `treedit.yaml`)
//! 5. User config (`~/.treedit/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use treedit::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("Reports as {}", config.output_format());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
