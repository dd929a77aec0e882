use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

pub const DEFAULT_LAST_IP_FILE: &str = "./cloudflare-dynamic-ip-last.txt";
pub const DEFAULT_CURRENT_IP_API: &str = "https://api.ipify.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "At least one zone is required"))]
    #[validate(nested)]
    pub zones: Vec<Zone>,

    /// Holds the last IPv4 address that was pushed to every zone.
    #[serde(default = "default_last_ip_file")]
    pub last_ip_file: PathBuf,

    /// Logs go to stderr when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    /// Must answer with the caller's IPv4 address as plain text.
    #[validate(url(message = "current_ip_api must be a valid URL"))]
    #[serde(default = "default_current_ip_api")]
    pub current_ip_api: String,

    #[validate(range(min = 1, message = "Request timeout must be greater than 0"))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Zone {
    #[validate(length(min = 1, message = "Zone ID cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Zone name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Zone token cannot be empty"))]
    pub token: String,

    #[validate(nested)]
    pub records: Vec<RecordSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordSpec {
    #[validate(length(min = 1, message = "Record name cannot be empty"))]
    pub name: String,
}

fn default_last_ip_file() -> PathBuf {
    PathBuf::from(DEFAULT_LAST_IP_FILE)
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_current_ip_api() -> String {
    DEFAULT_CURRENT_IP_API.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
