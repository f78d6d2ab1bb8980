// Standard library
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use ifconfig_me::cli::types::Cli;
use ifconfig_me::functions::{detect, load_settings, render_outcome, NO_IP_MESSAGE};
use ifconfig_me::utility::ip_detector::errors::IpDetectionError;

/// Main entry point.
///
/// Prints the public IP address agreed on by the configured services, or
/// exits with status 1 when none of them produced a usable address.
/// Invalid configuration exits with status 2.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(settings.get_log_level())
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("rustls=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    info!("⚙️ Settings have been loaded.");

    match detect(&settings).await {
        Ok(outcome) => match render_outcome(&outcome, settings.detection.show_statistics) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize statistics: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(IpDetectionError::NoIpDetected) => {
            println!("{}", NO_IP_MESSAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("IP detection failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
