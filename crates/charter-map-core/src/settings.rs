//! Environment-driven engine settings.

use crate::models::DateOrdering;
use crate::query::guards::clamp_cache_ttl;

pub const DATE_ORDERING_ENV: &str = "CHARTER_MAP_DATE_ORDERING";
pub const CACHE_ENTRIES_ENV: &str = "CHARTER_MAP_CACHE_ENTRIES";
pub const CACHE_TTL_ENV: &str = "CHARTER_MAP_CACHE_TTL_SECS";

pub const DEFAULT_CACHE_ENTRIES: i64 = 64;
pub const DEFAULT_CACHE_TTL_SECONDS: f64 = 15.0;

#[derive(Clone, Debug, PartialEq)]
pub struct EngineSettings {
    pub date_ordering: DateOrdering,
    pub cache_entries: i64,
    pub cache_ttl_seconds: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            date_ordering: DateOrdering::Legacy,
            cache_entries: DEFAULT_CACHE_ENTRIES,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

impl EngineSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.  Unparseable values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let date_ordering = lookup(DATE_ORDERING_ENV)
            .and_then(|value| DateOrdering::parse(&value))
            .unwrap_or(defaults.date_ordering);
        let cache_entries = lookup(CACHE_ENTRIES_ENV)
            .and_then(|value| value.trim().parse::<i64>().ok())
            .map(|value| value.max(1))
            .unwrap_or(defaults.cache_entries);
        let cache_ttl_seconds = lookup(CACHE_TTL_ENV)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .map(clamp_cache_ttl)
            .unwrap_or(defaults.cache_ttl_seconds);
        Self {
            date_ordering,
            cache_entries,
            cache_ttl_seconds,
        }
    }
}
