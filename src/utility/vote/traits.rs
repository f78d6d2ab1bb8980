// Project imports
use crate::utility::ip_detector::types::EndpointResult;

// Current module imports
use super::types::{VoteOptions, VotingOutcome};

/// Reconciles the answers of several endpoints into one address.
pub trait VotingStrategy {
    /// Returns `None` when no eligible address remains after filtering.
    fn vote(&self, results: &[EndpointResult], options: &VoteOptions) -> Option<VotingOutcome>;
}
