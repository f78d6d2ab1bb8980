// Project imports
use crate::settings::types::Settings;
use crate::utility::vote::types::FamilyFilter;

// Current module imports
use super::types::Cli;

impl Cli {
    pub fn family_filter(&self) -> Option<FamilyFilter> {
        match (self.ipv4, self.ipv6) {
            (true, _) => Some(FamilyFilter::Ipv4Only),
            (_, true) => Some(FamilyFilter::Ipv6Only),
            _ => None,
        }
    }

    /// Overrides loaded settings with whatever was given on the command line.
    /// Flags that were not given leave the settings untouched.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(level) = &self.log_level {
            settings.log.level = level.clone();
        }
        if let Some(family) = self.family_filter() {
            settings.detection.family = family;
        }
        if let Some(timeout) = self.timeout {
            settings.detection.timeout_secs = timeout;
        }
        if self.prefer_ipv6 {
            settings.detection.prefer_ipv6 = true;
        }
        if self.show_statistics {
            settings.detection.show_statistics = true;
        }
    }
}
