//! Configuration loading from files.
//!
//! This module handles reading and parsing configuration files.

use std::path::Path;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use super::{Config, ConfigError, DEFAULT_CONFIG_FILE, LoggingConfig};

impl Config {
    /// Load the config from the command line argument.
    ///
    /// An explicit path must exist. Without one, `folio.yaml` in the working
    /// directory is used if present and the defaults apply otherwise.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let (config_file, required) = match config_file {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file, required)
    }

    /// Load the config from a file path
    pub(crate) fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(required))
            .build()?
            .try_deserialize::<Config>()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        LevelFilter::from_str(&self.logging.level).map_err(|e| {
            ConfigError::Validation(format!(
                "invalid logging.level '{}': {}",
                self.logging.level, e
            ))
        })?;
        Ok(())
    }
}

impl LoggingConfig {
    /// The configured log level as a filter.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::INFO)
    }
}
