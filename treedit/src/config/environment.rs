//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TREEDIT_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "TREEDIT_OUTPUT_FORMAT";
/// Overrides `confirm_merges`.
pub const CONFIRM_MERGES_ENV: &str = "TREEDIT_CONFIRM_MERGES";
/// Overrides `strict_identity`.
pub const STRICT_IDENTITY_ENV: &str = "TREEDIT_STRICT_IDENTITY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use treedit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown output format, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            let format: OutputFormat = format.parse().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{format}' (expected human or json)"),
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(CONFIRM_MERGES_ENV) {
            config.confirm_merges = Some(Self::parse_bool(CONFIRM_MERGES_ENV, &val)?);
        }

        if let Ok(val) = env::var(STRICT_IDENTITY_ENV) {
            config.strict_identity = Some(Self::parse_bool(STRICT_IDENTITY_ENV, &val)?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            LogLevel::from_setting(LOG_MODE_ENV, &mode)?;
            config.log_mode = Some(mode);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
