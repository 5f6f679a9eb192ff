//! Listing cache with lightweight in-memory memoization of derived lists.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::errors::StakeholderMapResult;
use crate::models::QueryConfig;
use crate::query::engine::CharterListing;
use crate::query::guards::{clamp_cache_entries, clamp_cache_ttl};

struct CacheEntry {
    value: CharterListing,
    expires_at: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    Hit,
    Miss,
}

/// Timing breakdown for a single cache lookup, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CacheTrace {
    pub lookup_ms: f64,
    pub compute_ms: f64,
    pub total_ms: f64,
    pub fingerprint: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub max_entries: usize,
}

fn round_ms(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub struct ListingCache {
    max_entries: usize,
    ttl: Duration,
    cache: Mutex<IndexMap<String, CacheEntry>>,
}

impl ListingCache {
    pub fn new(max_entries: i64, ttl_seconds: f64) -> Self {
        Self {
            max_entries: clamp_cache_entries(max_entries),
            ttl: Duration::from_secs_f64(clamp_cache_ttl(ttl_seconds)),
            cache: Mutex::new(IndexMap::new()),
        }
    }

    fn cache_key(fingerprint: &str, config: &QueryConfig) -> StakeholderMapResult<String> {
        let normalized = serde_json::to_string(config)?;
        Ok(format!("{fingerprint}:{normalized}"))
    }

    fn evict_expired(&self) {
        let mut cache = self.cache.lock();
        let now = Instant::now();
        cache.retain(|_, entry| entry.expires_at > now);
    }

    fn evict_over_capacity(&self) {
        let mut cache = self.cache.lock();
        while cache.len() > self.max_entries {
            cache.shift_remove_index(0);
        }
    }

    /// Return the cached listing for `(fingerprint, config)` or compute and
    /// store it.
    pub fn get_or_compute<F>(
        &self,
        fingerprint: &str,
        config: &QueryConfig,
        compute: F,
    ) -> StakeholderMapResult<(CharterListing, CacheMode, CacheTrace)>
    where
        F: FnOnce() -> CharterListing,
    {
        let cache_key = Self::cache_key(fingerprint, config)?;
        let lookup_started = Instant::now();

        self.evict_expired();
        {
            let mut cache = self.cache.lock();
            if let Some(entry) = cache.shift_remove(&cache_key) {
                // Re-insert at the back for LRU order.
                let value = entry.value.clone();
                cache.insert(cache_key, entry);

                let lookup_ms = round_ms(lookup_started.elapsed().as_secs_f64() * 1000.0);
                debug!(fingerprint, "listing cache hit");
                let trace = CacheTrace {
                    lookup_ms,
                    compute_ms: 0.0,
                    total_ms: lookup_ms,
                    fingerprint: fingerprint.to_string(),
                };
                return Ok((value, CacheMode::Hit, trace));
            }
        }

        let compute_started = Instant::now();
        let result = compute();
        let compute_ms = compute_started.elapsed().as_secs_f64() * 1000.0;

        {
            let mut cache = self.cache.lock();
            cache.insert(
                cache_key,
                CacheEntry {
                    value: result.clone(),
                    expires_at: Instant::now() + self.ttl,
                },
            );
        }
        self.evict_over_capacity();
        debug!(fingerprint, compute_ms, "listing cache miss");

        let total_ms = lookup_started.elapsed().as_secs_f64() * 1000.0;
        let lookup_ms = (total_ms - compute_ms).max(0.0);
        let trace = CacheTrace {
            lookup_ms: round_ms(lookup_ms),
            compute_ms: round_ms(compute_ms),
            total_ms: round_ms(total_ms),
            fingerprint: fingerprint.to_string(),
        };
        Ok((result, CacheMode::Miss, trace))
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let cache = self.cache.lock();
        CacheStats {
            entries: cache.len(),
            max_entries: self.max_entries,
        }
    }
}
