// 3rd party crates
use tracing::{debug, info};

// Project imports
use crate::cli::types::Cli;
use crate::settings::errors::SettingsError;
use crate::settings::types::{Settings, ValidatedSettings};
use crate::utility::ip_detector::errors::IpDetectionError;
use crate::utility::ip_detector::types::IpDetector;
use crate::utility::vote::types::VotingOutcome;

/// Message printed when the vote has nothing to work with.
pub const NO_IP_MESSAGE: &str = "No successful API call with status code 200.";

/// Loads file and environment settings, applies command-line overrides and
/// validates the result.
pub fn load_settings(cli: &Cli) -> Result<ValidatedSettings, SettingsError> {
    let mut settings: Settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);
    Ok(ValidatedSettings::new(settings)?)
}

/// Runs one detection: fan out to every configured endpoint, then vote.
pub async fn detect(settings: &Settings) -> Result<VotingOutcome, IpDetectionError> {
    let detector = IpDetector::new(settings.get_endpoints(), settings.get_timeout())?;
    let options = settings.get_vote_options();

    info!(
        endpoints = detector.endpoints.len(),
        timeout_secs = settings.detection.timeout_secs,
        "🔎 Querying IP detection services"
    );
    debug!(?options, "Vote options");

    let outcome = detector.detect(&options).await?;
    info!("Public 🧩 IP detected with consensus: {}", outcome.ip);
    Ok(outcome)
}

/// Text written to stdout for a successful detection: the statistics as
/// pretty JSON when requested, then the address on its own line.
pub fn render_outcome(
    outcome: &VotingOutcome,
    show_statistics: bool,
) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    if show_statistics {
        output.push_str(&serde_json::to_string_pretty(outcome)?);
        output.push('\n');
    }
    output.push_str(&outcome.ip);
    Ok(output)
}
