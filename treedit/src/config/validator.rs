//! Configuration validation.

use std::path::Path;

use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;
use crate::logging::LogLevel;

/// Validates configuration values that serde cannot check on its own.
///
/// # Examples
///
/// ```
/// use treedit::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { log_mode: Some("loud".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref mode) = config.log_mode {
            mode.parse::<LogLevel>()?;
        }

        Ok(())
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML for the
    /// schema, or fails validation.
    pub fn validate_file(path: &Path) -> Result<Config> {
        let config = ConfigLoader::load_file(path)?;
        Self::validate(&config)?;
        Ok(config)
    }
}
