// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::utility::ip_detector::types::{EndpointConfig, IpDetection};

// Current module imports
use super::constants::default_log_level;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,

    #[serde(default)]
    pub detection: IpDetection,

    /// Replaces the built-in endpoint list when non-empty
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

/// Settings that passed [`Settings::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);
