// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpDetectionError {
    #[error("Network error from {service}: {error}")]
    NetworkError {
        service: String,
        error: reqwest::Error,
    },

    #[error("Unexpected status from {service}: {status}")]
    UnexpectedStatus { service: String, status: StatusCode },

    #[error("Invalid response from {service}: {response}")]
    InvalidResponse { service: String, response: String },

    #[error("HTTP client error: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("No IP detected: no successful API call produced a usable address")]
    NoIpDetected,
}

#[derive(Debug, Error)]
pub enum IpDetectionValidationError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Endpoint '{0}' uses the json format but has no field name")]
    MissingJsonField(String),
    #[error("Invalid timeout_secs: must be greater than 0")]
    InvalidTimeout,
}
