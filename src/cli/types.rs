// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;

/// Find out your public IP address by asking several "what is my IP"
/// services at once and voting on their answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "ifconfig-me", version)]
pub struct Cli {
    /// Logging level: error, warn, info, debug, trace, warning, critical
    /// (case-insensitive) or a positive number such as 10, 20, 30, 40, 50
    #[arg(
        long = "log-level",
        visible_aliases = ["loglevel", "logLevel"],
        value_name = "LEVEL"
    )]
    pub log_level: Option<String>,

    /// Print the ranked statistics as JSON before the address
    #[arg(long)]
    pub show_statistics: bool,

    /// Return an IPv4 address only. By default either IPv4 or IPv6 is returned
    #[arg(long, conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Return an IPv6 address only. By default either IPv4 or IPv6 is returned
    #[arg(long)]
    pub ipv6: bool,

    /// Prefer IPv6 when an IPv4 and an IPv6 address are reported equally often
    #[arg(long)]
    pub prefer_ipv6: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Configuration file (defaults to $IFCONFIG_ME_CONFIG_PATH, then the
    /// platform config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
