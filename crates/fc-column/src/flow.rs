//! Internal vapor and bottoms traffic from reflux and boilup ratios.

use crate::column::ColumnSpec;
use serde::{Deserialize, Serialize};

/// Actual (reflux/boilup-adjusted) traffic for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowRates {
    /// mole/hr
    pub vapor_mole_flow: f64,
    /// mole/hr
    pub bottoms_mole_flow_actual: f64,
    /// kg/hr
    pub vapor_mass_flow: f64,
    /// kg/hr
    pub bottoms_mass_flow_actual: f64,
}

/// Scale the nominal distillate and bottoms flows by `ratio + 1`.
pub fn calculate_flow_rates(spec: &ColumnSpec) -> FlowRates {
    let reflux_factor = spec.reflux_ratio() + 1.0;
    let boilup_factor = spec.boilup_ratio() + 1.0;

    FlowRates {
        vapor_mole_flow: spec.distillate_mole_flow() * reflux_factor,
        bottoms_mole_flow_actual: spec.bottoms_mole_flow() * boilup_factor,
        vapor_mass_flow: spec.distillate_mass_flow() * reflux_factor,
        bottoms_mass_flow_actual: spec.bottoms_mass_flow() * boilup_factor,
    }
}
