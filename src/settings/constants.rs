/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "IFCONFIG_ME_CONFIG_PATH";

/// Directory and file name under the platform configuration directory.
pub const CONFIG_DIR_NAME: &str = "ifconfig-me";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment overrides, e.g. `IFCONFIG_ME__DETECTION__TIMEOUT_SECS=3`.
pub const ENV_PREFIX: &str = "IFCONFIG_ME";
pub const ENV_SEPARATOR: &str = "__";

pub const DEFAULT_LOG_LEVEL: &str = "error";

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
