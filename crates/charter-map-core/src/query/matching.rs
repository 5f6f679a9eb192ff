//! Search and department predicates over charter summaries.

use crate::models::{CharterSummary, Department, StakeholderEntry};

fn contains_needle(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn stakeholder_matches(stakeholder: &StakeholderEntry, needle: &str) -> bool {
    contains_needle(&stakeholder.email, needle)
        || contains_needle(stakeholder.department.as_str(), needle)
        || contains_needle(stakeholder.role.as_str(), needle)
        || stakeholder
            .profile
            .as_ref()
            .is_some_and(|profile| contains_needle(&profile.full_name(), needle))
}

/// Whether the charter matches an already-lowercased search needle.
///
/// Title, description, any stakeholder (email, department, role, name) and
/// the owner's name are all searched.
pub fn charter_matches_search(charter: &CharterSummary, needle: &str) -> bool {
    contains_needle(&charter.title, needle)
        || charter
            .description
            .as_deref()
            .is_some_and(|description| contains_needle(description, needle))
        || charter
            .stakeholders
            .iter()
            .any(|stakeholder| stakeholder_matches(stakeholder, needle))
        || charter
            .owner_profile
            .as_ref()
            .is_some_and(|profile| contains_needle(&profile.full_name(), needle))
}

pub fn charter_matches_department(charter: &CharterSummary, department: Option<Department>) -> bool {
    match department {
        Some(department) => charter.has_department(department),
        None => true,
    }
}
