// 3rd party crates
use config::ConfigError;
use thiserror::Error;

// Project imports
use crate::utility::ip_detector::errors::IpDetectionValidationError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "Invalid log level: {0}. Must be one of: error, warn, info, debug, trace, \
         warning, critical, or a positive number"
    )]
    InvalidLogLevel(String),
    #[error("IP detection configuration error: {0}")]
    IpDetectionConfig(#[from] IpDetectionValidationError),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
