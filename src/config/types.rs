use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Base URLs of the remote APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// v2 API: submissions, checkpoints, results.
    #[serde(default = "default_v2_base_url")]
    pub v2_base_url: String,
    /// v3 API: challenge details, registration, updates, submission deletion.
    #[serde(default = "default_v3_base_url")]
    pub v3_base_url: String,
}

/// Default request settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_v2_base_url() -> String {
    "https://api.topcoder.com/v2".to_string()
}

fn default_v3_base_url() -> String {
    "https://api.topcoder.com/v3".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            v2_base_url: default_v2_base_url(),
            v3_base_url: default_v3_base_url(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
