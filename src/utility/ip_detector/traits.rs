/// Turns a raw response body into an address string.
///
/// Implementations must not fail loudly: a body they cannot make sense of
/// yields `None`, which the retriever records as "no IP from this endpoint".
///
/// Any `Fn(&str) -> Option<String>` closure is an extractor too:
///
/// ```rust
/// use ifconfig_me::utility::ip_detector::traits::IpExtractor;
/// use ifconfig_me::utility::ip_detector::types::Endpoint;
///
/// let endpoint = Endpoint::with_extractor("https://example.com/ip", |body: &str| {
///     body.lines().next().map(|line| line.trim().to_string())
/// });
/// assert_eq!(endpoint.extractor.extract("1.2.3.4\nextra"), Some("1.2.3.4".to_string()));
/// ```
pub trait IpExtractor: Send + Sync {
    /// Extract the address from `body`, if there is one.
    fn extract(&self, body: &str) -> Option<String>;

    /// Short human-readable name used in logs and serialized statistics.
    fn describe(&self) -> String {
        "custom".to_string()
    }
}
