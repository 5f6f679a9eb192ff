//! Error types for the charter map core library.

/// Top-level error enum for the charter map core library.
#[derive(Debug, thiserror::Error)]
pub enum StakeholderMapError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "python")]
impl From<StakeholderMapError> for pyo3::PyErr {
    fn from(err: StakeholderMapError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};
        match &err {
            StakeholderMapError::InvalidEmail(_) | StakeholderMapError::Validation(_) => {
                PyValueError::new_err(err.to_string())
            }
            StakeholderMapError::Transport(_) => PyRuntimeError::new_err(err.to_string()),
            StakeholderMapError::Json(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

pub type StakeholderMapResult<T> = Result<T, StakeholderMapError>;
