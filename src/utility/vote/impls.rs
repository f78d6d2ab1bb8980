// Standard library
use std::collections::HashMap;
use std::sync::Arc;

// 3rd party crates
use tracing::debug;

// Project imports
use crate::utility::ip_detector::types::{Address, Endpoint, EndpointResult, IpVersion};

// Current module imports
use super::traits::VotingStrategy;
use super::types::{FamilyFilter, RankingEntry, SimpleVotingStrategy, VoteOptions, VotingOutcome};

impl VoteOptions {
    pub fn preferred_version(&self) -> IpVersion {
        if self.prefer_ipv6 {
            IpVersion::V6
        } else {
            IpVersion::V4
        }
    }
}

impl RankingEntry {
    fn new(address: Address, endpoint: Arc<Endpoint>) -> Self {
        Self {
            address,
            weight: 1,
            priority: 0,
            endpoints: vec![endpoint],
        }
    }

    /// Entries rank by descending order of this key. The address string is
    /// unique per entry, so the order is total.
    pub fn sort_key(&self, preferred: IpVersion) -> (i32, usize, bool, &str) {
        (
            self.priority,
            self.weight,
            self.address.version == preferred,
            self.address.ip.as_str(),
        )
    }
}

impl VotingStrategy for SimpleVotingStrategy {
    fn vote(&self, results: &[EndpointResult], options: &VoteOptions) -> Option<VotingOutcome> {
        let mut ipv4: Vec<(&Address, &Arc<Endpoint>)> = Vec::new();
        let mut ipv6: Vec<(&Address, &Arc<Endpoint>)> = Vec::new();

        for result in results {
            let Some(address) = &result.address else {
                continue;
            };
            match address.version {
                IpVersion::V4 => ipv4.push((address, &result.endpoint)),
                IpVersion::V6 => ipv6.push((address, &result.endpoint)),
                IpVersion::Unknown => {
                    debug!(
                        endpoint = %result.endpoint.url,
                        "Ignoring unrecognised address {:?}",
                        address.ip
                    );
                }
            }
        }

        let candidates = match options.family {
            FamilyFilter::Ipv4Only => ipv4,
            FamilyFilter::Ipv6Only => ipv6,
            FamilyFilter::Any => {
                ipv4.extend(ipv6);
                ipv4
            }
        };

        if candidates.is_empty() {
            debug!(family = ?options.family, "No candidate addresses left to vote on");
            return None;
        }

        // Entries stay in first-seen order until the final sort.
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<RankingEntry> = Vec::new();
        for (address, endpoint) in candidates {
            match positions.get(address.ip.as_str()) {
                Some(&idx) => {
                    let entry = &mut entries[idx];
                    entry.weight += 1;
                    entry.endpoints.push(Arc::clone(endpoint));
                }
                None => {
                    positions.insert(address.ip.as_str(), entries.len());
                    entries.push(RankingEntry::new(address.clone(), Arc::clone(endpoint)));
                }
            }
        }

        let preferred = options.preferred_version();
        entries.sort_by(|a, b| b.sort_key(preferred).cmp(&a.sort_key(preferred)));

        let winner = entries.first()?;
        debug!(
            ip = %winner.address.ip,
            weight = winner.weight,
            distinct = entries.len(),
            "Vote finished"
        );

        Some(VotingOutcome {
            ip: winner.address.ip.clone(),
            statistics: if options.include_statistics {
                entries
            } else {
                Vec::new()
            },
        })
    }
}
