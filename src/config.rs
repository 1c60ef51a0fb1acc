//! Environment-sourced configuration.
//!
//! Every field has a default so the service boots with no configuration at
//! all, pointing at a local upstream. Values come from process environment
//! variables (after `.env` loading) via figment's `Env` provider; the field
//! names below match the variables case-insensitively, e.g. `CACHE_TTL`.

use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;

fn default_feddit_api_url() -> String {
    "http://localhost:8080".to_owned()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_connections() -> usize {
    10
}

fn default_keepalive_connections() -> usize {
    5
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_cache_size() -> usize {
    100
}

fn default_comment_limit() -> u32 {
    25
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the upstream Feddit API.
    #[serde(default = "default_feddit_api_url")]
    pub feddit_api_url: String,
    /// Per-request timeout against the upstream, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Maximum concurrent upstream connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Maximum idle keepalive connections retained in the pool.
    #[serde(default = "default_keepalive_connections")]
    pub keepalive_connections: usize,
    /// Validity window for cached upstream responses, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,
    /// Maximum number of cached upstream responses.
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    /// Default page size for comment listings.
    #[serde(default = "default_comment_limit")]
    pub comment_limit: u32,
    /// Listen port for the web server.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base tracing level for this crate when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feddit_api_url: default_feddit_api_url(),
            timeout: default_timeout(),
            max_connections: default_max_connections(),
            keepalive_connections: default_keepalive_connections(),
            cache_ttl: default_cache_ttl(),
            cache_size: default_cache_size(),
            comment_limit: default_comment_limit(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Extract configuration from the process environment.
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::raw()).extract()
    }
}
