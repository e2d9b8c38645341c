//! Single-pass column evaluation: flow rates, velocities, percent flooding.

use crate::column::ColumnSpec;
use crate::error::{ColumnError, ColumnResult};
use crate::flow::{FlowRates, calculate_flow_rates};
use crate::velocity::{calculate_operating_velocity, flooding_point};
use fc_core::numeric::checked_div;
use serde::{Deserialize, Serialize};

/// Headline hydraulic figures for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// ft/s
    pub flooding_velocity: f64,
    /// ft/s
    pub operating_velocity: f64,
    /// operating / flooding * 100
    pub flooding_percentage: f64,
}

/// [`EvaluationResult`] together with the intermediate values behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDetails {
    pub result: EvaluationResult,
    pub flow_rates: FlowRates,
    pub flv: f64,
    pub csbf: f64,
    /// m²
    pub cross_sectional_area: f64,
    pub flv_outside_correlation_range: bool,
}

/// Evaluate one column.
///
/// Stateless and re-entrant: distinct specs can be evaluated from any number
/// of threads at once.
pub fn simulate(spec: &ColumnSpec) -> ColumnResult<EvaluationResult> {
    simulate_detailed(spec).map(|d| d.result)
}

pub fn simulate_detailed(spec: &ColumnSpec) -> ColumnResult<EvaluationDetails> {
    let flow_rates = calculate_flow_rates(spec);

    let operating_velocity = calculate_operating_velocity(flow_rates.vapor_mole_flow, spec)?;
    let flooding = flooding_point(
        flow_rates.bottoms_mass_flow_actual,
        flow_rates.vapor_mass_flow,
        spec,
    )?;

    let flooding_velocity = flooding.velocity;
    let flooding_percentage =
        checked_div(operating_velocity, flooding_velocity, "flooding velocity")? * 100.0;
    // A subnormal flooding velocity overflows the quotient
    if !flooding_percentage.is_finite() {
        return Err(ColumnError::DivisionByZero {
            what: "flooding velocity",
        });
    }

    Ok(EvaluationDetails {
        result: EvaluationResult {
            flooding_velocity,
            operating_velocity,
            flooding_percentage,
        },
        flow_rates,
        flv: flooding.flv,
        csbf: flooding.csbf,
        cross_sectional_area: spec.cross_sectional_area(),
        flv_outside_correlation_range: !flooding.within_correlation_range(),
    })
}
