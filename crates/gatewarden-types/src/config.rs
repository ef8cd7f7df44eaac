//! configuration types for gatewarden.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// main configuration for gatewarden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// address to bind the http server to.
    pub listen_addr: String,

    /// authentication service configuration.
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            auth: AuthConfig::default(),
        }
    }
}

/// configuration for the upstream authentication service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// base url of the authentication service.
    pub base_url: String,

    /// response header carrying the comma-separated permission list.
    pub permissions_header: String,

    /// how long a validated session is trusted without re-validation.
    pub cache_ttl_secs: u64,

    /// timeout for validation requests to the authentication service.
    pub request_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://gateway/auth".to_string(),
            permissions_header: "X-Permissions".to_string(),
            cache_ttl_secs: 60,
            request_timeout_secs: 10,
        }
    }
}

impl AuthConfig {
    /// cache ttl as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
