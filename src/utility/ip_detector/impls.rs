// Standard library
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

// Project imports
use crate::utility::vote::traits::VotingStrategy;
use crate::utility::vote::types::{
    FamilyFilter, SimpleVotingStrategy, VoteOptions, VotingOutcome,
};

// Current module imports
use super::constants::{default_timeout_secs, USER_AGENT};
use super::errors::{IpDetectionError, IpDetectionValidationError};
use super::functions::{default_endpoints, retrieve_all};
use super::traits::IpExtractor;
use super::types::{
    Address, Endpoint, EndpointConfig, EndpointResult, IpDetection, IpDetector, IpVersion,
    JsonFieldExtractor, PlainTextExtractor, ResponseFormat, RetrieverContext,
};

impl Default for IpDetection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            family: FamilyFilter::default(),
            prefer_ipv6: false,
            show_statistics: false,
        }
    }
}

impl IpDetection {
    pub fn validate(&self) -> Result<(), IpDetectionValidationError> {
        if self.timeout_secs == 0 {
            return Err(IpDetectionValidationError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn vote_options(&self) -> VoteOptions {
        VoteOptions {
            family: self.family,
            prefer_ipv6: self.prefer_ipv6,
            include_statistics: self.show_statistics,
        }
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), IpDetectionValidationError> {
        let url = reqwest::Url::parse(&self.url).map_err(|e| {
            IpDetectionValidationError::InvalidUrl {
                url: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(IpDetectionValidationError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.format == ResponseFormat::Json
            && self.field.as_deref().map_or(true, |f| f.trim().is_empty())
        {
            return Err(IpDetectionValidationError::MissingJsonField(
                self.url.clone(),
            ));
        }

        Ok(())
    }

    pub fn to_endpoint(&self) -> Endpoint {
        match (self.format, &self.field) {
            (ResponseFormat::Json, Some(field)) => Endpoint::json(&self.url, field.trim()),
            _ => Endpoint::plain_text(&self.url),
        }
    }
}

impl IpVersion {
    /// Cheap syntactic classification: a colon means IPv6, a dot means IPv4.
    /// The colon check runs first so IPv4-mapped IPv6 addresses stay IPv6:
    /// `::ffff:1.2.3.4` is filed under IPv6, and so never counts towards an
    /// IPv4-only vote. Tools that test for IPv4 first file it under IPv4.
    pub fn of(ip: &str) -> Self {
        if ip.contains(':') {
            IpVersion::V6
        } else if ip.contains('.') {
            IpVersion::V4
        } else {
            IpVersion::Unknown
        }
    }
}

impl Address {
    pub fn new(ip: impl Into<String>) -> Self {
        let ip: String = ip.into();
        let version = IpVersion::of(&ip);
        Self { ip, version }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl IpExtractor for PlainTextExtractor {
    fn extract(&self, body: &str) -> Option<String> {
        non_empty(body)
    }

    fn describe(&self) -> String {
        "text".to_string()
    }
}

impl JsonFieldExtractor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl IpExtractor for JsonFieldExtractor {
    fn extract(&self, body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        non_empty(value.get(&self.field)?.as_str()?)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.field)
    }
}

impl<F> IpExtractor for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn extract(&self, body: &str) -> Option<String> {
        self(body)
    }
}

impl Endpoint {
    pub fn plain_text(url: impl Into<String>) -> Self {
        Self::with_extractor(url, PlainTextExtractor)
    }

    pub fn json(url: impl Into<String>, field: impl Into<String>) -> Self {
        Self::with_extractor(url, JsonFieldExtractor::new(field))
    }

    pub fn with_extractor(url: impl Into<String>, extractor: impl IpExtractor + 'static) -> Self {
        Self {
            url: url.into(),
            extractor: Arc::new(extractor),
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("extractor", &self.extractor.describe())
            .finish()
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Endpoint", 2)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("extractor", &self.extractor.describe())?;
        state.end()
    }
}

impl EndpointResult {
    pub fn failed(endpoint: Arc<Endpoint>) -> Self {
        Self {
            address: None,
            endpoint,
        }
    }
}

impl IpDetector {
    /// Creates a detector with its own HTTP client.
    pub fn new(endpoints: Vec<Arc<Endpoint>>, timeout: Duration) -> Result<Self, IpDetectionError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(IpDetectionError::ClientBuild)?;

        Ok(Self::with_client(client, endpoints, timeout))
    }

    /// Creates a detector that shares an existing HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        endpoints: Vec<Arc<Endpoint>>,
        timeout: Duration,
    ) -> Self {
        Self {
            context: RetrieverContext { client, timeout },
            endpoints,
        }
    }

    /// Detector over the built-in endpoint list and default timeout.
    pub fn with_defaults() -> Result<Self, IpDetectionError> {
        Self::new(
            default_endpoints(),
            Duration::from_secs(default_timeout_secs()),
        )
    }

    /// Queries every endpoint once, concurrently. Never fails: broken
    /// endpoints show up as results without an address.
    pub async fn retrieve_all(&self) -> Vec<EndpointResult> {
        retrieve_all(&self.endpoints, &self.context).await
    }

    /// Queries every endpoint and votes with [`SimpleVotingStrategy`].
    pub async fn detect(&self, options: &VoteOptions) -> Result<VotingOutcome, IpDetectionError> {
        self.detect_with(&SimpleVotingStrategy, options).await
    }

    pub async fn detect_with<S>(
        &self,
        strategy: &S,
        options: &VoteOptions,
    ) -> Result<VotingOutcome, IpDetectionError>
    where
        S: VotingStrategy + ?Sized,
    {
        let results = self.retrieve_all().await;
        strategy
            .vote(&results, options)
            .ok_or(IpDetectionError::NoIpDetected)
    }
}
