//! In-memory cache for assembled API results
//!
//! The cache stores values with a time-to-live. Fresh entries short-circuit
//! network calls; expired entries remain readable with an `is_expired` flag so
//! the client can fall back to stale data when the API is unavailable.

mod manager;

pub use manager::{CachedData, TtlCache};
