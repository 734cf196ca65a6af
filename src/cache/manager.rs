//! In-memory TTL cache
//!
//! Entries are keyed by string and hold any `Send + Sync` value behind an
//! `Arc`. An entry is fresh while `now < expires_at`; `get_or_compute` never
//! serves anything else. `read` also returns expired entries, flagged with
//! `is_expired`, so callers can degrade to stale data when a refresh fails.
//!
//! There is no single-flight: two concurrent misses for one key both run
//! their producer and the last write wins.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;

type Payload = Arc<dyn Any + Send + Sync>;

struct CacheEntry {
    value: Payload,
    cached_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was stored
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Keyed store of values with a shared time-to-live
pub struct TtlCache {
    ttl: chrono::Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl std::fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("ttl", &self.ttl)
            .field("len", &self.len())
            .finish()
    }
}

impl TtlCache {
    /// Creates an empty cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the fresh value for `key`, or runs `producer` and stores its result.
    ///
    /// A producer error is returned as-is and leaves the cache untouched, so
    /// an older fresh entry keeps being served.
    pub async fn get_or_compute<T, E, F, Fut>(&self, key: &str, producer: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.fresh::<T>(key) {
            debug!(key, "cache hit");
            return Ok(hit);
        }

        debug!(key, "cache miss");
        let value = Arc::new(producer().await?);
        self.insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Reads an entry regardless of expiry
    ///
    /// Returns `None` if the key is absent or holds a value of another type.
    pub fn read<T: Send + Sync + 'static>(&self, key: &str) -> Option<CachedData<Arc<T>>> {
        let entries = self.entries.lock();
        let entry = entries.get(key)?;
        let data = Arc::clone(&entry.value).downcast::<T>().ok()?;

        Some(CachedData {
            data,
            cached_at: entry.cached_at,
            is_expired: Utc::now() >= entry.expires_at,
        })
    }

    /// Stores `value` under `key`, replacing any previous entry
    pub fn insert<T: Send + Sync + 'static>(&self, key: &str, value: Arc<T>) {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.entries.lock().insert(
            key.to_string(),
            CacheEntry {
                value,
                cached_at: now,
                expires_at,
            },
        );
    }

    /// Drops a single entry
    pub fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    /// Drops every entry
    pub fn reset(&self) {
        self.entries.lock().clear();
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fresh<T: Send + Sync + 'static>(&self, key: &str) -> Option<Arc<T>> {
        self.read::<T>(key)
            .filter(|cached| !cached.is_expired)
            .map(|cached| cached.data)
    }
}
