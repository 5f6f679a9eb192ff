//! Charter search/filter/sort engine backing the stakeholder map list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::StakeholderMapResult;
use crate::models::{CharterSummary, QueryConfig};
use crate::query::guards::normalize_search_text;
use crate::query::matching::{charter_matches_department, charter_matches_search};
use crate::query::ordering::compare_charters;

/// Filtered, ordered charters plus the counts the list header shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterListing {
    pub charters: Vec<CharterSummary>,
    pub total_matches: usize,
    pub total_charters: usize,
    pub is_loading: bool,
}

impl CharterListing {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }
}

/// Apply search, department filter, and sort to a charter collection.
///
/// The input is never modified.  The sort is stable, so charters comparing
/// equal keep their relative input order.
pub fn filter_and_sort(charters: &[CharterSummary], config: &QueryConfig) -> Vec<CharterSummary> {
    let needle = normalize_search_text(&config.search_text);

    let mut retained: Vec<CharterSummary> = charters
        .iter()
        .filter(|charter| match needle.as_deref() {
            Some(needle) => charter_matches_search(charter, needle),
            None => true,
        })
        .filter(|charter| charter_matches_department(charter, config.department_filter))
        .cloned()
        .collect();

    retained.sort_by(|a, b| compare_charters(a, b, config));

    debug!(
        total = charters.len(),
        retained = retained.len(),
        sort_key = ?config.sort_key,
        sort_direction = ?config.sort_direction,
        "derived charter list"
    );
    retained
}

pub fn list_charters(charters: &[CharterSummary], config: &QueryConfig) -> CharterListing {
    let ordered = filter_and_sort(charters, config);
    CharterListing {
        total_matches: ordered.len(),
        total_charters: charters.len(),
        charters: ordered,
        is_loading: false,
    }
}

/// JSON boundary for hosts: a charter array and a config object in, a
/// `CharterListing` object out.
pub fn filter_and_sort_json(charters_json: &str, config_json: &str) -> StakeholderMapResult<String> {
    let charters: Vec<CharterSummary> = serde_json::from_str(charters_json)?;
    let config: QueryConfig = if config_json.trim().is_empty() {
        QueryConfig::default()
    } else {
        serde_json::from_str(config_json)?
    };
    let listing = list_charters(&charters, &config);
    Ok(serde_json::to_string(&listing)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DateOrdering, Department, ProfileName, SortDirection, SortKey, StakeholderEntry,
        StakeholderRole,
    };

    fn make_charter(title: &str, created_at: i64) -> CharterSummary {
        CharterSummary {
            id: format!("id-{}", title.to_lowercase()),
            title: title.to_string(),
            description: None,
            created_at,
            owner_profile: None,
            is_owned_by_current_user: false,
            stakeholders: Vec::new(),
        }
    }

    fn with_stakeholder(mut charter: CharterSummary, department: Department) -> CharterSummary {
        charter.stakeholders.push(StakeholderEntry {
            email: format!("{}@example.com", department.as_str()),
            department,
            role: StakeholderRole::Contributor,
            profile: None,
        });
        charter
    }

    fn titles(charters: &[CharterSummary]) -> Vec<&str> {
        charters.iter().map(|c| c.title.as_str()).collect()
    }

    fn sample() -> Vec<CharterSummary> {
        vec![
            with_stakeholder(make_charter("Gamma", 30), Department::Legal),
            with_stakeholder(make_charter("Alpha", 10), Department::Engineering),
            with_stakeholder(
                with_stakeholder(make_charter("Beta", 20), Department::Legal),
                Department::Finance,
            ),
            make_charter("Delta", 40),
        ]
    }

    #[test]
    fn test_empty_collection() {
        let config = QueryConfig {
            search_text: "anything".to_string(),
            ..QueryConfig::default()
        };
        assert!(filter_and_sort(&[], &config).is_empty());
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let charters = sample();
        let result = filter_and_sort(&charters, &QueryConfig::default());
        assert_eq!(titles(&result), vec!["Alpha", "Beta", "Delta", "Gamma"]);
    }

    #[test]
    fn test_whitespace_search_keeps_everything() {
        let charters = sample();
        let config = QueryConfig {
            search_text: "   ".to_string(),
            ..QueryConfig::default()
        };
        assert_eq!(filter_and_sort(&charters, &config).len(), charters.len());
    }

    #[test]
    fn test_long_search_requires_whole_text() {
        let charters = vec![make_charter(&"a".repeat(256), 1)];
        let config = QueryConfig {
            search_text: format!("{}ZZZ", "a".repeat(300)),
            ..QueryConfig::default()
        };
        assert!(filter_and_sort(&charters, &config).is_empty());

        let config = QueryConfig {
            search_text: "A".repeat(256),
            ..QueryConfig::default()
        };
        assert_eq!(filter_and_sort(&charters, &config).len(), 1);
    }

    #[test]
    fn test_title_sort_scenario() {
        let charters = vec![make_charter("Alpha", 1), make_charter("Beta", 2)];
        let mut config = QueryConfig {
            sort_key: SortKey::Title,
            sort_direction: SortDirection::Ascending,
            ..QueryConfig::default()
        };
        assert_eq!(titles(&filter_and_sort(&charters, &config)), vec!["Alpha", "Beta"]);
        config.sort_direction = SortDirection::Descending;
        assert_eq!(titles(&filter_and_sort(&charters, &config)), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_steward_sort_uses_trimmed_owner_names() {
        let mut zed = make_charter("Zed's charter", 1);
        zed.owner_profile = Some(ProfileName::new("Zed", "Adams  "));
        let mut amy = make_charter("Amy's charter", 2);
        amy.owner_profile = Some(ProfileName {
            first_name: Some("".to_string()),
            last_name: Some("Amy Zhu".to_string()),
        });
        let orphan = make_charter("Unowned", 3);
        let charters = vec![zed, orphan, amy];

        let mut config = QueryConfig {
            sort_key: SortKey::Steward,
            ..QueryConfig::default()
        };
        assert_eq!(
            titles(&filter_and_sort(&charters, &config)),
            vec!["Unowned", "Amy's charter", "Zed's charter"]
        );
        config.sort_direction = SortDirection::Descending;
        assert_eq!(
            titles(&filter_and_sort(&charters, &config)),
            vec!["Zed's charter", "Amy's charter", "Unowned"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_on_department() {
        let charters = sample();
        let config = QueryConfig {
            search_text: "ENG".to_string(),
            ..QueryConfig::default()
        };
        assert_eq!(titles(&filter_and_sort(&charters, &config)), vec!["Alpha"]);
    }

    #[test]
    fn test_search_matches_steward_name() {
        let mut jane = make_charter("Roadmap", 1);
        jane.owner_profile = Some(ProfileName::new("Jane", "Doe"));
        let charters = vec![make_charter("Other", 2), jane];
        let config = QueryConfig {
            search_text: "jane".to_string(),
            ..QueryConfig::default()
        };
        assert_eq!(titles(&filter_and_sort(&charters, &config)), vec!["Roadmap"]);
    }

    #[test]
    fn test_department_filter_exclusivity() {
        let charters = sample();
        let config = QueryConfig {
            department_filter: Some(Department::Legal),
            ..QueryConfig::default()
        };
        let result = filter_and_sort(&charters, &config);
        assert_eq!(titles(&result), vec!["Beta", "Gamma"]);
        assert!(result.iter().all(|c| c.has_department(Department::Legal)));
    }

    #[test]
    fn test_search_and_department_combine() {
        let charters = sample();
        let config = QueryConfig {
            search_text: "finance".to_string(),
            department_filter: Some(Department::Legal),
            ..QueryConfig::default()
        };
        assert_eq!(titles(&filter_and_sort(&charters, &config)), vec!["Beta"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut first = make_charter("Same", 1);
        first.id = "first".to_string();
        let mut second = make_charter("same", 1);
        second.id = "second".to_string();
        second.title = "Same".to_string();
        let charters = vec![first, second];

        let by_date = QueryConfig {
            sort_key: SortKey::Date,
            ..QueryConfig::default()
        };
        let ids: Vec<String> = filter_and_sort(&charters, &by_date)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["first", "second"]);

        let by_steward = QueryConfig {
            sort_key: SortKey::Steward,
            sort_direction: SortDirection::Descending,
            ..QueryConfig::default()
        };
        let ids: Vec<String> = filter_and_sort(&charters, &by_steward)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_repeated_application_is_identical() {
        let charters = sample();
        let config = QueryConfig {
            sort_key: SortKey::Date,
            sort_direction: SortDirection::Descending,
            ..QueryConfig::default()
        };
        let once = filter_and_sort(&charters, &config);
        let twice = filter_and_sort(&charters, &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_ordering_modes() {
        let charters = sample();
        let mut config = QueryConfig {
            sort_key: SortKey::Date,
            ..QueryConfig::default()
        };
        assert_eq!(
            titles(&filter_and_sort(&charters, &config)),
            vec!["Delta", "Gamma", "Beta", "Alpha"]
        );
        config.sort_direction = SortDirection::Descending;
        assert_eq!(
            titles(&filter_and_sort(&charters, &config)),
            vec!["Alpha", "Beta", "Gamma", "Delta"]
        );
        config.date_ordering = DateOrdering::Chronological;
        assert_eq!(
            titles(&filter_and_sort(&charters, &config)),
            vec!["Delta", "Gamma", "Beta", "Alpha"]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let charters = sample();
        let snapshot = charters.clone();
        let config = QueryConfig {
            sort_key: SortKey::Date,
            ..QueryConfig::default()
        };
        let _ = filter_and_sort(&charters, &config);
        assert_eq!(charters, snapshot);
    }

    #[test]
    fn test_list_charters_counts() {
        let charters = sample();
        let config = QueryConfig {
            department_filter: Some(Department::Legal),
            ..QueryConfig::default()
        };
        let listing = list_charters(&charters, &config);
        assert_eq!(listing.total_matches, 2);
        assert_eq!(listing.total_charters, 4);
        assert!(!listing.is_loading);
    }

    #[test]
    fn test_filter_and_sort_json() {
        let charters = r#"[
            {"id":"b","title":"Beta","created_at":2},
            {"id":"a","title":"Alpha","created_at":1,
             "owner_profile":{"first_name":"Jane","last_name":"Doe"}}
        ]"#;
        let payload = filter_and_sort_json(charters, r#"{"sort_direction":"desc"}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["total_matches"], 2);
        assert_eq!(value["charters"][0]["title"], "Beta");
        assert_eq!(value["charters"][1]["title"], "Alpha");

        let payload = filter_and_sort_json(charters, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["charters"][0]["title"], "Alpha");
    }

    #[test]
    fn test_filter_and_sort_json_rejects_malformed_input() {
        assert!(filter_and_sort_json("not json", "{}").is_err());
    }
}
