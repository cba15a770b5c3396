use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path prefix the backend mounts its endpoints under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout applied to every backend request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Idle time after the last keystroke before a live search is sent
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Movies per page on the home screen
    #[serde(default = "default_browse_page_size")]
    pub browse_page_size: u32,

    /// Movies per page on the search results screen
    #[serde(default = "default_search_page_size")]
    pub search_page_size: u32,

    /// Recommendations requested per movie
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: u32,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_browse_page_size() -> u32 {
    12
}

fn default_search_page_size() -> u32 {
    20
}

fn default_recommendation_count() -> u32 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_prefix: default_api_prefix(),
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            search_debounce_ms: default_search_debounce_ms(),
            browse_page_size: default_browse_page_size(),
            search_page_size: default_search_page_size(),
            recommendation_count: default_recommendation_count(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the web server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
