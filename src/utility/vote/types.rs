// Standard library
use std::sync::Arc;

// 3rd party crates
use serde::{Deserialize, Serialize};

// Project imports
use crate::utility::ip_detector::types::{Address, Endpoint};

/// Which address families may win a vote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum FamilyFilter {
    #[default]
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "ipv4")]
    Ipv4Only,
    #[serde(rename = "ipv6")]
    Ipv6Only,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteOptions {
    pub family: FamilyFilter,
    /// Only breaks ties between addresses of equal weight.
    pub prefer_ipv6: bool,
    /// Keep the ranked entries in the outcome.
    pub include_statistics: bool,
}

/// One distinct address string and everything that reported it.
#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry {
    pub address: Address,
    pub weight: usize,
    /// Reserved for weighting endpoints; always 0.
    pub priority: i32,
    /// Endpoints that reported this address, in the order they were seen.
    pub endpoints: Vec<Arc<Endpoint>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VotingOutcome {
    pub ip: String,
    /// Ranked best-first; empty unless statistics were requested.
    pub statistics: Vec<RankingEntry>,
}

/// Majority vote with family preference, then address string, as tie-breaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleVotingStrategy;
