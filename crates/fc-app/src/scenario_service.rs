//! Scenario file loading, saving, validation, and introspection.

use std::path::Path;

use fc_column::{ColumnParams, ColumnSpec};
use fc_project::schema::{ScenarioDef, ScenarioFile};
use fc_project::{FileFormat, ProjectError, validate_file};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub diameter_m: f64,
    pub flow_scale: f64,
}

/// Load a scenario file (YAML, or JSON for `.json` paths) and validate it.
pub fn load_scenarios(path: &Path) -> AppResult<ScenarioFile> {
    let file = fc_project::load_file(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::ScenarioFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => AppError::from(other),
    })?;

    tracing::info!(
        path = %path.display(),
        format = ?FileFormat::from_path(path),
        scenarios = file.scenarios.len(),
        "loaded scenario file"
    );
    Ok(file)
}

/// Save a scenario file, format chosen by extension.
pub fn save_scenarios(path: &Path, file: &ScenarioFile) -> AppResult<()> {
    fc_project::save_file(path, file).map_err(|e| match e {
        ProjectError::Io(source) => AppError::ScenarioFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => AppError::from(other),
    })?;

    tracing::info!(path = %path.display(), "wrote scenario file");
    Ok(())
}

/// Validate scenario file structure and every column's physical inputs.
pub fn validate_scenarios(file: &ScenarioFile) -> AppResult<()> {
    validate_file(file)?;

    if file.scenarios.is_empty() {
        return Err(AppError::Validation(
            "Scenario file must have at least one scenario".to_string(),
        ));
    }

    for scenario in &file.scenarios {
        build_spec(scenario)?;
    }

    Ok(())
}

/// List all scenarios in the file with summaries.
pub fn list_scenarios(file: &ScenarioFile) -> Vec<ScenarioSummary> {
    file.scenarios
        .iter()
        .map(|s| ScenarioSummary {
            id: s.id.clone(),
            name: s.name.clone(),
            diameter_m: s.column.diameter_m,
            flow_scale: s.flow_scale,
        })
        .collect()
}

/// Get a specific scenario by ID.
pub fn get_scenario<'a>(file: &'a ScenarioFile, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    file.scenario(scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}

/// Build the validated column for a scenario, applying its flow scale.
pub fn build_spec(scenario: &ScenarioDef) -> AppResult<ColumnSpec> {
    let column_err = |source| AppError::Column {
        scenario: scenario.id.clone(),
        source,
    };

    let spec = ColumnSpec::new(ColumnParams::from(scenario.column)).map_err(column_err)?;
    if scenario.flow_scale == 1.0 {
        return Ok(spec);
    }
    spec.scale_flows(scenario.flow_scale).map_err(column_err)
}
