//! Add-stakeholder dialog form and its validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{StakeholderMapError, StakeholderMapResult};
use crate::models::{Department, NewStakeholder, StakeholderRole};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Normalize and check an email address: trimmed, lowercased, and shaped
/// like `local@domain.tld`.
pub fn validate_email(email: &str) -> StakeholderMapResult<String> {
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(StakeholderMapError::InvalidEmail(
            "email is required".to_string(),
        ));
    }
    if !EMAIL_RE.is_match(&normalized) {
        return Err(StakeholderMapError::InvalidEmail(normalized));
    }
    Ok(normalized)
}

/// Raw field values as entered in the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddStakeholderForm {
    pub email: String,
    pub role: Option<StakeholderRole>,
    pub department: Option<Department>,
}

impl AddStakeholderForm {
    pub fn new(email: &str, role: StakeholderRole, department: Department) -> Self {
        Self {
            email: email.to_string(),
            role: Some(role),
            department: Some(department),
        }
    }

    pub fn validate(&self) -> StakeholderMapResult<NewStakeholder> {
        let email = validate_email(&self.email)?;
        let role = self
            .role
            .ok_or_else(|| StakeholderMapError::Validation("role is required".to_string()))?;
        let department = self
            .department
            .ok_or_else(|| StakeholderMapError::Validation("department is required".to_string()))?;
        Ok(NewStakeholder {
            email,
            role,
            department,
        })
    }
}
