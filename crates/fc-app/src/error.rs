//! Error types for the fc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario file error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario file validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Column error in scenario '{scenario}': {source}")]
    Column {
        scenario: String,
        source: fc_column::ColumnError,
    },

    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },

    #[error("Report rendering failed: {0}")]
    Report(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for fc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<fc_project::ProjectError> for AppError {
    fn from(err: fc_project::ProjectError) -> Self {
        match err {
            fc_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<fc_project::ValidationError> for AppError {
    fn from(err: fc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(err.to_string())
    }
}
