//! IP Detection Module
//!
//! Determines the caller's public IP address by asking several "what is my
//! IP" services at once and voting on their answers.
//!
//! # Architecture
//!
//! - Extractors (`IpExtractor`) turn a response body into an address string
//! - `retrieve` performs one bounded GET against one endpoint
//! - `retrieve_all` fans out to every endpoint over a shared client and joins
//! - `IpDetector` ties the above to a `VotingStrategy`
//!
//! # Example
//!
//! ```rust,no_run
//! use ifconfig_me::utility::ip_detector::types::IpDetector;
//! use ifconfig_me::utility::vote::types::VoteOptions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = IpDetector::with_defaults()?;
//! let outcome = detector.detect(&VoteOptions::default()).await?;
//! println!("Detected IP: {}", outcome.ip);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Per-endpoint failures (network errors, timeouts, non-200 statuses,
//! unparseable bodies) are logged and absorbed. The only error surfaced by
//! detection is `IpDetectionError::NoIpDetected`.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;
