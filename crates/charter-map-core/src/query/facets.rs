//! Department facet counts for the filter dropdown.

use indexmap::IndexMap;

use crate::models::{CharterSummary, Department};

/// Number of charters with at least one stakeholder in each department.
///
/// Keys follow `Department::ALL` order; departments with no charters are
/// omitted.
pub fn department_facets(charters: &[CharterSummary]) -> IndexMap<Department, usize> {
    let mut facets = IndexMap::new();
    for department in Department::ALL {
        let count = charters
            .iter()
            .filter(|charter| charter.has_department(department))
            .count();
        if count > 0 {
            facets.insert(department, count);
        }
    }
    facets
}
