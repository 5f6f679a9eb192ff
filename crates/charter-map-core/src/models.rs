//! Shared typed models used across the query engine, host page, and bindings.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::StakeholderMapResult;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Department a stakeholder belongs to.  Wire form is snake_case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Engineering,
    Product,
    Design,
    Marketing,
    Sales,
    Legal,
    Finance,
    Operations,
    HumanResources,
    CustomerSuccess,
    Executive,
}

impl Department {
    /// Every department, in declaration order.
    pub const ALL: [Department; 11] = [
        Department::Engineering,
        Department::Product,
        Department::Design,
        Department::Marketing,
        Department::Sales,
        Department::Legal,
        Department::Finance,
        Department::Operations,
        Department::HumanResources,
        Department::CustomerSuccess,
        Department::Executive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "engineering",
            Department::Product => "product",
            Department::Design => "design",
            Department::Marketing => "marketing",
            Department::Sales => "sales",
            Department::Legal => "legal",
            Department::Finance => "finance",
            Department::Operations => "operations",
            Department::HumanResources => "human_resources",
            Department::CustomerSuccess => "customer_success",
            Department::Executive => "executive",
        }
    }

    /// Parse a wire value; surrounding whitespace and case are ignored.
    pub fn parse(value: &str) -> Option<Department> {
        let needle = value.trim().to_lowercase();
        Department::ALL
            .into_iter()
            .find(|department| department.as_str() == needle)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a stakeholder plays on a charter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    Sponsor,
    Approver,
    Contributor,
    Reviewer,
    Observer,
}

impl StakeholderRole {
    pub const ALL: [StakeholderRole; 5] = [
        StakeholderRole::Sponsor,
        StakeholderRole::Approver,
        StakeholderRole::Contributor,
        StakeholderRole::Reviewer,
        StakeholderRole::Observer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StakeholderRole::Sponsor => "sponsor",
            StakeholderRole::Approver => "approver",
            StakeholderRole::Contributor => "contributor",
            StakeholderRole::Reviewer => "reviewer",
            StakeholderRole::Observer => "observer",
        }
    }
}

impl fmt::Display for StakeholderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Charter records
// ---------------------------------------------------------------------------

/// Display name attached to a user profile.  Either half may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileName {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl ProfileName {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }

    /// `"{first} {last}"` with missing halves rendered as empty strings.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }
}

/// A single stakeholder attached to a charter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderEntry {
    pub email: String,
    pub department: Department,
    pub role: StakeholderRole,
    #[serde(default)]
    pub profile: Option<ProfileName>,
}

/// Summary row for a charter as delivered by the charter-listing collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    #[serde(default)]
    pub owner_profile: Option<ProfileName>,
    #[serde(default)]
    pub is_owned_by_current_user: bool,
    #[serde(default)]
    pub stakeholders: Vec<StakeholderEntry>,
}

impl CharterSummary {
    /// Trimmed steward (owner) name, empty when no owner profile is attached.
    pub fn steward_name(&self) -> String {
        self.owner_profile
            .as_ref()
            .map(|profile| profile.full_name().trim().to_string())
            .unwrap_or_default()
    }

    pub fn has_department(&self, department: Department) -> bool {
        self.stakeholders
            .iter()
            .any(|stakeholder| stakeholder.department == department)
    }
}

// ---------------------------------------------------------------------------
// Query configuration
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Steward,
    Date,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// How the `date` sort key orders creation times before direction is applied.
///
/// `Legacy` compares newest-first and then applies the requested direction on
/// top, so an ascending request lists the newest charter first.
/// `Chronological` compares oldest-first like the other keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrdering {
    #[default]
    Legacy,
    Chronological,
}

impl DateOrdering {
    pub fn parse(value: &str) -> Option<DateOrdering> {
        match value.trim().to_lowercase().as_str() {
            "legacy" => Some(DateOrdering::Legacy),
            "chronological" => Some(DateOrdering::Chronological),
            _ => None,
        }
    }
}

/// Search, filter, and sort settings held by the host page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub search_text: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub department_filter: Option<Department>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub date_ordering: DateOrdering,
}

// The page sends `""` for "all departments".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Department>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Department::parse(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown department: {value}"))),
    }
}

/// Payload submitted by the add-stakeholder dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStakeholder {
    pub email: String,
    pub role: StakeholderRole,
    pub department: Department,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Derive a short fingerprint (first 16 hex chars of SHA-256) of a charter
/// collection's JSON form.
pub fn collection_fingerprint(charters: &[CharterSummary]) -> StakeholderMapResult<String> {
    let encoded = serde_json::to_vec(charters)?;
    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    let digest = format!("{:x}", hasher.finalize());
    Ok(digest[..16].to_string())
}
