// Standard library
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use config::{Config, Environment, File};
use tracing::debug;

// Project imports
use crate::utility::ip_detector::functions::default_endpoints;
use crate::utility::ip_detector::types::Endpoint;
use crate::utility::vote::types::VoteOptions;

// Current module imports
use super::constants::{
    default_log_level, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, ENV_PREFIX,
    ENV_SEPARATOR,
};
use super::errors::{SettingsError, ValidationError};
use super::functions::parse_log_level;
use super::types::{Log, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Loads settings from the configuration file and environment variables.
    ///
    /// An explicit path (argument, then `IFCONFIG_ME_CONFIG_PATH`) must exist.
    /// Without one, the file under the platform configuration directory is
    /// read when present and skipped otherwise.
    pub fn load(config_path: Option<&Path>) -> Result<Self, SettingsError> {
        let explicit: Option<PathBuf> = config_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut builder = Config::builder();
        match explicit {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    debug!("Looking for configuration at {:?}", path);
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let settings: Config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// `<config_dir>/ifconfig-me/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// The configured level as a `tracing` level name. Unknown levels come
    /// back lowercased and are rejected by `validate`.
    pub fn get_log_level(&self) -> String {
        parse_log_level(&self.log.level)
            .map(str::to_string)
            .unwrap_or_else(|| self.log.level.to_lowercase())
    }

    pub fn get_timeout(&self) -> Duration {
        self.detection.timeout()
    }

    pub fn get_vote_options(&self) -> VoteOptions {
        self.detection.vote_options()
    }

    /// Configured endpoints, or the built-in list when none are configured.
    pub fn get_endpoints(&self) -> Vec<Arc<Endpoint>> {
        if self.endpoints.is_empty() {
            default_endpoints()
        } else {
            self.endpoints
                .iter()
                .map(|config| Arc::new(config.to_endpoint()))
                .collect()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        if parse_log_level(&self.log.level).is_none() {
            return Err(ValidationError::InvalidLogLevel(self.log.level.clone()));
        }

        self.detection.validate()?;

        for endpoint in &self.endpoints {
            endpoint.validate()?;
        }

        Ok(())
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
