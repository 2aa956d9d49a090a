//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use treedit::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Human), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is a scalar, so a field set in `source` replaces the one in
    /// `target` and an unset field leaves it alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.confirm_merges.is_some() {
            target.confirm_merges = source.confirm_merges;
        }

        if source.strict_identity.is_some() {
            target.strict_identity = source.strict_identity;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}
