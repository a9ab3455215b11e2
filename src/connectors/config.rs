use serde::{Deserialize, Serialize};

/// Default remote user listing.
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub user_service: Option<UserServiceConfig>,
}

/// Remote user listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserServiceConfig {
    /// Enable/disable the HTTP source; when disabled the fixed mock list is served
    #[serde(default = "UserServiceConfig::default_enabled")]
    pub enabled: bool,
    /// Endpoint returning `{ users: [...], total, skip, limit }`
    #[serde(default = "UserServiceConfig::default_users_url")]
    pub users_url: String,
    /// Optional HTTP timeout in seconds. Unset means the request waits for the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl UserServiceConfig {
    const fn default_enabled() -> bool {
        true
    }

    fn default_users_url() -> String {
        DEFAULT_USERS_URL.to_string()
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            users_url: Self::default_users_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            user_service: Some(UserServiceConfig::default()),
        }
    }
}
