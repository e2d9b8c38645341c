//! fc-project: scenario file format, validation, and the reference scenario set.

pub mod reference;
pub mod schema;
pub mod validate;

pub use reference::reference_scenarios;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_file};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// `.json` is JSON, anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<ScenarioFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ScenarioFile = serde_yaml::from_str(&content)?;
    validate_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &ScenarioFile) -> ProjectResult<()> {
    validate_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<ScenarioFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ScenarioFile = serde_json::from_str(&content)?;
    validate_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &ScenarioFile) -> ProjectResult<()> {
    validate_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario file, picking the format from the extension.
pub fn load_file(path: &Path) -> ProjectResult<ScenarioFile> {
    match FileFormat::from_path(path) {
        FileFormat::Yaml => load_yaml(path),
        FileFormat::Json => load_json(path),
    }
}

/// Save a scenario file, picking the format from the extension.
pub fn save_file(path: &Path, file: &ScenarioFile) -> ProjectResult<()> {
    match FileFormat::from_path(path) {
        FileFormat::Yaml => save_yaml(path, file),
        FileFormat::Json => save_json(path, file),
    }
}
