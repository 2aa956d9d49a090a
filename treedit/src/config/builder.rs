//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from every source.
///
/// Sources are applied lowest to highest: built-in defaults, user config,
/// project config, explicit file, environment, programmatic overrides.
///
/// # Examples
///
/// ```
/// use treedit::config::{Config, ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_format: Some(OutputFormat::Json),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(!config.confirm_merges());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery here instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir/config.yaml` instead of `~/.treedit`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Also load this file, above discovered files.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.explicit_file = Some(path.to_path_buf());
        self
    }

    /// Apply these values last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignore discovered user and project files. An explicit file is still read.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `TREEDIT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = vec![ConfigSource {
            path: PathBuf::from("<defaults>"),
            precedence: 0,
            config: Config::with_defaults(),
        }];

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?);
        }

        if let Some(ref path) = self.explicit_file {
            sources.push(ConfigLoader::load_explicit(path)?);
        }

        for source in &sources[1..] {
            log::debug!("configuration source: {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
