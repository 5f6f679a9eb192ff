//! Python extension module: `_charter_map_core`.
//!
//! Payloads cross the boundary as JSON and come back as native Python
//! objects via `json.loads`.

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::host::dialog::validate_email;
use crate::models::CharterSummary;
use crate::query::engine::filter_and_sort_json;
use crate::query::facets::department_facets;
use crate::query::guards::MAX_CACHE_TTL_SECONDS;

fn json_to_py(py: Python<'_>, payload: String) -> PyResult<PyObject> {
    let json_module = py.import("json")?;
    json_module
        .call_method1("loads", (payload,))
        .map(|o| o.into())
}

#[pyfunction]
#[pyo3(name = "filter_and_sort", signature = (charters_json, config_json="{}"))]
pub fn py_filter_and_sort(py: Python<'_>, charters_json: &str, config_json: &str) -> PyResult<PyObject> {
    let payload = filter_and_sort_json(charters_json, config_json)?;
    json_to_py(py, payload)
}

#[pyfunction]
#[pyo3(name = "department_facets")]
pub fn py_department_facets(py: Python<'_>, charters_json: &str) -> PyResult<PyObject> {
    let charters: Vec<CharterSummary> = serde_json::from_str(charters_json)
        .map_err(crate::errors::StakeholderMapError::from)?;
    let facets = department_facets(&charters);
    let payload = serde_json::to_string(&facets).map_err(crate::errors::StakeholderMapError::from)?;
    json_to_py(py, payload)
}

#[pyfunction]
#[pyo3(name = "validate_email")]
pub fn py_validate_email(email: &str) -> PyResult<String> {
    Ok(validate_email(email)?)
}

#[pymodule]
fn _charter_map_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("MAX_CACHE_TTL_SECONDS", MAX_CACHE_TTL_SECONDS)?;

    m.add_function(wrap_pyfunction!(py_filter_and_sort, m)?)?;
    m.add_function(wrap_pyfunction!(py_department_facets, m)?)?;
    m.add_function(wrap_pyfunction!(py_validate_email, m)?)?;

    Ok(())
}
