/// Maps a configured log level onto a `tracing` level name.
///
/// Accepts the `tracing` names in any case, the `WARNING`/`CRITICAL`
/// spellings, and positive numeric levels (10 debug, 20 info, 30 warning,
/// 40 error, 50 critical). A number between two levels rounds up to the
/// next one; anything below 10 means trace.
pub fn parse_log_level(level: &str) -> Option<&'static str> {
    let level = level.trim();
    if let Ok(number) = level.parse::<i64>() {
        return match number {
            i64::MIN..=0 => None,
            1..=9 => Some("trace"),
            10 => Some("debug"),
            11..=20 => Some("info"),
            21..=30 => Some("warn"),
            _ => Some("error"),
        };
    }

    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" | "critical" | "fatal" => Some("error"),
        _ => None,
    }
}
