//! Shared guardrails for query input and cache limits.

pub const MAX_CACHE_ENTRIES: usize = 4096;
pub const MIN_CACHE_TTL_SECONDS: f64 = 0.1;
pub const MAX_CACHE_TTL_SECONDS: f64 = 86_400.0;

pub fn clamp_int(value: i64, minimum: i64, maximum: i64) -> i64 {
    value.max(minimum).min(maximum)
}

pub fn clamp_cache_entries(value: i64) -> usize {
    clamp_int(value, 1, MAX_CACHE_ENTRIES as i64) as usize
}

/// Bound a TTL to `[MIN_CACHE_TTL_SECONDS, MAX_CACHE_TTL_SECONDS]`; NaN maps
/// to the minimum.
pub fn clamp_cache_ttl(seconds: f64) -> f64 {
    if seconds.is_nan() {
        MIN_CACHE_TTL_SECONDS
    } else {
        seconds.clamp(MIN_CACHE_TTL_SECONDS, MAX_CACHE_TTL_SECONDS)
    }
}

/// Lowercased, trimmed search needle, or `None` when the search imposes no
/// exclusion.  The full text is kept: a charter only matches when a field
/// contains all of it.
pub fn normalize_search_text(search_text: &str) -> Option<String> {
    let stripped = search_text.trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_lowercase())
    }
}
