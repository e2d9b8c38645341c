//! Scenario file validation logic.
//!
//! Only the file structure is checked here. Physical validity of each column
//! is decided by `fc_column::ColumnSpec::new` when the scenario is built.

use crate::schema::{ScenarioDef, ScenarioFile};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_file(file: &ScenarioFile) -> Result<(), ValidationError> {
    if file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut ids = HashSet::new();
    for scenario in &file.scenarios {
        if !ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }

    Ok(())
}

fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "id".to_string(),
            value: format!("{:?}", scenario.id),
            reason: "scenario id must not be empty".to_string(),
        });
    }

    if !scenario.flow_scale.is_finite() || scenario.flow_scale < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{}.flow_scale", scenario.id),
            value: scenario.flow_scale.to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }

    Ok(())
}
