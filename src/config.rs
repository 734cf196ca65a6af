//! Client configuration
//!
//! A `ClientConfig` is built once, validated by `Client::new`, and never
//! mutated afterwards.

use std::time::Duration;

use crate::collector::PageFailurePolicy;
use crate::error::{ApiError, ApiResult};

/// Base URL for the Hypixel API (v2)
pub const DEFAULT_BASE_URL: &str = "https://api.hypixel.net/v2";

/// Default time-to-live for cached collections (3 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3 * 60);

/// Default number of listing pages fetched concurrently per round
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "HYPIXEL_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "HYPIXEL_API_URL";

/// Configuration for a [`crate::Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as the `API-Key` header when present
    pub api_key: Option<String>,
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// How long cached values stay fresh
    pub cache_ttl: Duration,
    /// Pages fetched concurrently per pagination round
    pub batch_size: usize,
    /// What to do when a single listing page fails
    pub page_failure_policy: PageFailurePolicy,
    /// Serve the last cached collection when a refresh fails
    pub serve_stale_on_error: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            batch_size: DEFAULT_BATCH_SIZE,
            page_failure_policy: PageFailurePolicy::default(),
            serve_stale_on_error: true,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `HYPIXEL_API_KEY` and `HYPIXEL_API_URL`.
    ///
    /// Both variables are optional; unset or empty values keep the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = Some(key.trim().to_string());
            }
        }

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }

        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_page_failure_policy(mut self, policy: PageFailurePolicy) -> Self {
        self.page_failure_policy = policy;
        self
    }

    pub fn with_serve_stale_on_error(mut self, enabled: bool) -> Self {
        self.serve_stale_on_error = enabled;
        self
    }

    /// Reject configurations the client cannot run with.
    pub fn validate(&self) -> ApiResult<()> {
        if self.batch_size == 0 {
            return Err(ApiError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ApiError::InvalidConfig("base_url is empty".to_string()));
        }
        Ok(())
    }
}
