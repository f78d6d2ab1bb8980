// Project imports
use crate::utility::ip_detector::types::IpService;

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const USER_AGENT: &str = concat!("ifconfig-me/", env!("CARGO_PKG_VERSION"));

/// Endpoints queried when none are configured
pub const DEFAULT_SERVICES: [IpService; 8] = [
    IpService {
        url: "https://ifconfig.me/ip",
        json_field: None,
    },
    IpService {
        url: "https://checkip.amazonaws.com",
        json_field: None,
    },
    IpService {
        url: "https://icanhazip.com",
        json_field: None,
    },
    IpService {
        url: "https://ifconfig.co/ip",
        json_field: None,
    },
    IpService {
        url: "https://ipecho.net/plain",
        json_field: None,
    },
    IpService {
        url: "https://ipinfo.io/ip",
        json_field: None,
    },
    IpService {
        url: "https://httpbin.org/ip",
        json_field: Some("origin"),
    },
    IpService {
        url: "https://api.ipify.org/?format=json",
        json_field: Some("ip"),
    },
];

pub fn default_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}
