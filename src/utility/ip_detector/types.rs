// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use serde::{Deserialize, Serialize};

// Project imports
use crate::utility::vote::types::FamilyFilter;

// Current module imports
use super::constants::default_timeout_secs;
use super::traits::IpExtractor;

#[derive(Debug, Deserialize, Clone)]
pub struct IpDetection {
    /// Per-call timeout for each endpoint request (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Address families allowed to win
    #[serde(default)]
    pub family: FamilyFilter,
    /// Prefer IPv6 over IPv4 when both have the same weight
    #[serde(default)]
    pub prefer_ipv6: bool,
    /// Print the ranked statistics along with the winning address
    #[serde(default)]
    pub show_statistics: bool,
}

/// How an endpoint's response body carries the address.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
}

/// User-configured endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub url: String,
    #[serde(default)]
    pub format: ResponseFormat,
    /// JSON field holding the address; required for the json format
    #[serde(default)]
    pub field: Option<String>,
}

/// Address family derived from the textual form of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
    Unknown,
}

/// An address string reported by an endpoint, tagged with its family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub ip: String,
    pub version: IpVersion,
}

/// A remote service that reports the caller's public IP, plus the strategy
/// used to pull the address out of its response body.
#[derive(Clone)]
pub struct Endpoint {
    pub url: String,
    pub extractor: Arc<dyn IpExtractor>,
}

/// Returns the whole body, trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

/// Parses the body as a JSON object and returns one string field, trimmed.
#[derive(Debug, Clone)]
pub struct JsonFieldExtractor {
    pub field: String,
}

/// Outcome of one call to one endpoint. `address` is `None` when the call
/// failed, returned a non-200 status, or the body held no address.
#[derive(Debug, Clone)]
pub struct EndpointResult {
    pub address: Option<Address>,
    pub endpoint: Arc<Endpoint>,
}

/// Shared state for every call of a single fan-out.
#[derive(Debug, Clone)]
pub struct RetrieverContext {
    pub client: reqwest::Client,
    pub timeout: Duration,
}

/// Queries a fixed set of endpoints concurrently and votes on the answers.
#[derive(Debug, Clone)]
pub struct IpDetector {
    pub context: RetrieverContext,
    pub endpoints: Vec<Arc<Endpoint>>,
}

/// Static description of a built-in endpoint.
pub struct IpService {
    pub url: &'static str,
    /// `None` for plain-text services, otherwise the JSON field holding the IP.
    pub json_field: Option<&'static str>,
}
