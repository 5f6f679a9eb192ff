//! Sort comparators for charter listings.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{CharterSummary, DateOrdering, QueryConfig, SortDirection, SortKey};

// Decompose, drop combining marks, then lowercase: "Ǎb" and "ab" share a
// primary key.
fn primary_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Locale-style string comparison.
///
/// Accents and case are ignored first, then accents count, and finally
/// lowercase sorts ahead of uppercase so the order stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_compare(a: &CharterSummary, b: &CharterSummary, config: &QueryConfig) -> Ordering {
    match config.sort_key {
        SortKey::Title => locale_compare(&a.title, &b.title),
        SortKey::Steward => locale_compare(&a.steward_name(), &b.steward_name()),
        SortKey::Date => match config.date_ordering {
            DateOrdering::Legacy => b.created_at.cmp(&a.created_at),
            DateOrdering::Chronological => a.created_at.cmp(&b.created_at),
        },
    }
}

/// Full comparator: base comparison for the sort key, reversed for descending.
pub fn compare_charters(a: &CharterSummary, b: &CharterSummary, config: &QueryConfig) -> Ordering {
    let ordering = base_compare(a, b, config);
    match config.sort_direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
