//! Text and JSON rendering of scenario outcomes.

use fc_column::{EvaluationDetails, EvaluationResult};
use serde::Serialize;

use crate::error::AppResult;
use crate::run_service::ScenarioOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Include flow rates, Flv and Csbf.
    pub details: bool,
}

#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<EvaluationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<EvaluationDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render(outcomes: &[ScenarioOutcome], options: ReportOptions) -> AppResult<String> {
    match options.format {
        ReportFormat::Text => Ok(render_text(outcomes, options.details)),
        ReportFormat::Json => render_json(outcomes, options.details),
    }
}

/// One block per scenario, separated by blank lines, values to 2 decimals.
pub fn render_text(outcomes: &[ScenarioOutcome], details: bool) -> String {
    let blocks: Vec<String> = outcomes
        .iter()
        .map(|o| render_text_block(o, details))
        .collect();
    blocks.join("\n")
}

fn render_text_block(outcome: &ScenarioOutcome, details: bool) -> String {
    let mut out = String::new();
    match &outcome.outcome {
        Ok(d) => {
            let r = &d.result;
            out.push_str(&format!("{} Simulation Results:\n", outcome.name));
            out.push_str(&format!(
                "Flooding Velocity (ft/s): {:.2}\n",
                r.flooding_velocity
            ));
            out.push_str(&format!(
                "Operating Velocity (ft/s): {:.2}\n",
                r.operating_velocity
            ));
            out.push_str(&format!("Flooding Percentage: {:.2}%\n", r.flooding_percentage));
            if details {
                let f = &d.flow_rates;
                out.push_str(&format!(
                    "  Cross-Sectional Area (m^2): {:.4}\n",
                    d.cross_sectional_area
                ));
                out.push_str(&format!(
                    "  Vapor Mole Flow (mole/hr): {:.2}\n",
                    f.vapor_mole_flow
                ));
                out.push_str(&format!(
                    "  Bottoms Mole Flow (mole/hr): {:.2}\n",
                    f.bottoms_mole_flow_actual
                ));
                out.push_str(&format!(
                    "  Vapor Mass Flow (kg/hr): {:.2}\n",
                    f.vapor_mass_flow
                ));
                out.push_str(&format!(
                    "  Bottoms Mass Flow (kg/hr): {:.2}\n",
                    f.bottoms_mass_flow_actual
                ));
                out.push_str(&format!("  Flow Parameter Flv: {:.4}\n", d.flv));
                out.push_str(&format!("  Capacity Factor Csbf (ft/s): {:.4}\n", d.csbf));
                if d.flv_outside_correlation_range {
                    out.push_str("  Warning: Flv outside correlation range 0.01-1.0\n");
                }
            }
        }
        Err(e) => {
            out.push_str(&format!("{} Simulation Failed:\n", outcome.name));
            out.push_str(&format!("Error: {e}\n"));
        }
    }
    out
}

pub fn render_json(outcomes: &[ScenarioOutcome], details: bool) -> AppResult<String> {
    let entries: Vec<ReportEntry<'_>> = outcomes
        .iter()
        .map(|o| match &o.outcome {
            Ok(d) => ReportEntry {
                id: &o.id,
                name: &o.name,
                result: Some(d.result),
                details: details.then_some(*d),
                error: None,
            },
            Err(e) => ReportEntry {
                id: &o.id,
                name: &o.name,
                result: None,
                details: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}
