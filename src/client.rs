//! SkyBlock API client
//!
//! `Client` owns the configuration, the transport and the TTL cache behind an
//! `Arc`, so clones are cheap and share one cache. Build it once and hand out
//! clones; there is no global instance.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::cache::TtlCache;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::services::{Auctions, Bazaar, Misc, Profiles, Resources};
use crate::transport::{endpoint_of, HttpTransport, Transport};

/// Entry point for every SkyBlock endpoint
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    cache: TtlCache,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.config.base_url)
            .field("has_api_key", &self.inner.config.api_key.is_some())
            .field("cache", &self.inner.cache)
            .finish()
    }
}

impl Client {
    /// Create a client that talks HTTP to `config.base_url`
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config.base_url, config.api_key.clone());
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client from `HYPIXEL_API_KEY` / `HYPIXEL_API_URL`
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> ApiResult<Self> {
        config.validate()?;
        let cache = TtlCache::new(config.cache_ttl);
        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                cache,
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn cache(&self) -> &TtlCache {
        &self.inner.cache
    }

    /// Drop every cached value
    pub fn reset_cache(&self) {
        self.inner.cache.reset();
    }

    pub fn auctions(&self) -> Auctions {
        Auctions::new(self.clone())
    }

    pub fn bazaar(&self) -> Bazaar {
        Bazaar::new(self.clone())
    }

    pub fn profiles(&self) -> Profiles {
        Profiles::new(self.clone())
    }

    /// Collections, items and skills
    pub fn resources(&self) -> Resources {
        Resources::new(self.clone())
    }

    pub fn misc(&self) -> Misc {
        Misc::new(self.clone())
    }

    /// GET `path` and decode it as `T`.
    ///
    /// A body carrying `"success": false` is rejected before decoding.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, requires_key: bool) -> ApiResult<T> {
        let value = self.inner.transport.get_json(path, requires_key).await?;
        let endpoint = endpoint_of(path);

        if value.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ApiError::Unsuccessful {
                endpoint: endpoint.to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| ApiError::malformed(endpoint, e))
    }

    /// Serve `key` from cache or compute it with `producer`.
    ///
    /// When the producer fails and `serve_stale_on_error` is set, the last
    /// stored value is returned even if it has expired.
    pub(crate) async fn cached<T, F, Fut>(&self, key: &str, producer: F) -> ApiResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let cache = &self.inner.cache;
        match cache.get_or_compute(key, producer).await {
            Ok(value) => Ok(value),
            Err(err) if self.inner.config.serve_stale_on_error => match cache.read::<T>(key) {
                Some(stale) => {
                    warn!(key, error = %err, cached_at = %stale.cached_at, "refresh failed, serving stale cache");
                    Ok(stale.data)
                }
                None => Err(err),
            },
            Err(err) => Err(err),
        }
    }
}
