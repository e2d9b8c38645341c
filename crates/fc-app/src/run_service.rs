//! Scenario evaluation: serial or fanned out across a rayon pool.

use fc_column::{ColumnError, EvaluationDetails, simulate_detailed};
use fc_project::schema::{ScenarioDef, ScenarioFile};
use rayon::prelude::*;

use crate::error::{AppError, AppResult};
use crate::scenario_service::{build_spec, get_scenario};

/// How a batch of scenarios is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Serial,
    Parallel,
}

/// Outcome of one scenario. A failed scenario carries its error instead of
/// a partial result.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub id: String,
    pub name: String,
    pub outcome: Result<EvaluationDetails, ScenarioFailure>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Why a scenario produced no result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioFailure {
    #[error("{0}")]
    Column(#[from] ColumnError),

    #[error("{0}")]
    Setup(String),
}

/// Build and evaluate a single scenario.
pub fn evaluate_scenario(scenario: &ScenarioDef) -> ScenarioOutcome {
    let outcome = match build_spec(scenario) {
        Ok(spec) => simulate_detailed(&spec).map_err(ScenarioFailure::from),
        Err(AppError::Column { source, .. }) => Err(ScenarioFailure::Column(source)),
        Err(other) => Err(ScenarioFailure::Setup(other.to_string())),
    };

    match &outcome {
        Ok(details) => {
            tracing::debug!(
                scenario = %scenario.id,
                flv = details.flv,
                csbf = details.csbf,
                vapor_mass_flow = details.flow_rates.vapor_mass_flow,
                "flooding correlation inputs"
            );
            if details.flv_outside_correlation_range {
                tracing::warn!(
                    scenario = %scenario.id,
                    flv = details.flv,
                    "flow parameter outside the fitted range of the capacity factor; result is extrapolated"
                );
            }
            tracing::info!(
                scenario = %scenario.id,
                flooding_percentage = details.result.flooding_percentage,
                "evaluated scenario"
            );
        }
        Err(e) => tracing::warn!(scenario = %scenario.id, error = %e, "scenario failed"),
    }

    ScenarioOutcome {
        id: scenario.id.clone(),
        name: scenario.name.clone(),
        outcome,
    }
}

/// Evaluate scenarios one after another, in order.
pub fn evaluate_all(scenarios: &[ScenarioDef]) -> Vec<ScenarioOutcome> {
    scenarios.iter().map(evaluate_scenario).collect()
}

/// Evaluate scenarios across the rayon pool. Output order matches input order.
pub fn evaluate_all_parallel(scenarios: &[ScenarioDef]) -> Vec<ScenarioOutcome> {
    scenarios.par_iter().map(evaluate_scenario).collect()
}

/// Evaluate a whole file, or only `scenario_id` when given.
pub fn run_file(
    file: &ScenarioFile,
    scenario_id: Option<&str>,
    mode: RunMode,
) -> AppResult<Vec<ScenarioOutcome>> {
    let selected: &[ScenarioDef] = match scenario_id {
        Some(id) => std::slice::from_ref(get_scenario(file, id)?),
        None => &file.scenarios,
    };

    tracing::info!(
        file = %file.name,
        scenarios = selected.len(),
        mode = ?mode,
        "running scenarios"
    );

    Ok(match mode {
        RunMode::Serial => evaluate_all(selected),
        RunMode::Parallel => evaluate_all_parallel(selected),
    })
}

/// `Err(ScenariosFailed)` if any outcome is a failure.
pub fn ensure_all_succeeded(outcomes: &[ScenarioOutcome]) -> AppResult<()> {
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        return Err(AppError::ScenariosFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}
