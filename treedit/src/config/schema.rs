//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; [`Config::with_defaults`] fills in what nothing set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use treedit::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("output_format: json\nconfirm_merges: true\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert!(config.confirm_merges());
/// assert!(!config.strict_identity());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Format for reports printed by the CLI.
    pub output_format: Option<OutputFormat>,

    /// Accept folder merges without asking.
    pub confirm_merges: Option<bool>,

    /// Refuse to reconcile when an identity had to be guessed.
    pub strict_identity: Option<bool>,

    /// Logger verbosity: quiet, normal or verbose.
    pub log_mode: Option<String>,
}

impl Config {
    /// The built-in defaults, lowest precedence of all sources.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            output_format: Some(OutputFormat::Human),
            confirm_merges: Some(false),
            strict_identity: Some(false),
            log_mode: None,
        }
    }

    /// Effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether folder merges are accepted without confirmation.
    #[must_use]
    pub fn confirm_merges(&self) -> bool {
        self.confirm_merges.unwrap_or(false)
    }

    /// Whether guessed identities block reconciliation.
    #[must_use]
    pub fn strict_identity(&self) -> bool {
        self.strict_identity.unwrap_or(false)
    }
}

/// Output format for reports.
///
/// # Examples
///
/// ```
/// use treedit::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sentences for people.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("Invalid output format: '{s}' (expected human or json)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_empty_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
output_format: json
confirm_merges: true
strict_identity: true
log_mode: verbose
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.confirm_merges());
        assert!(config.strict_identity());
        assert_eq!(config.log_mode.as_deref(), Some("verbose"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("ports: 5000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("output_format: xml\n");
        assert!(result.is_err());
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::with_defaults();
        assert_eq!(config.output_format(), OutputFormat::Human);
        assert!(!config.confirm_merges());
        assert!(!config.strict_identity());
        assert_eq!(Config::default().output_format(), OutputFormat::Human);
    }

    #[test]
    fn test_output_format_parse_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
    }
}
