//! Scenario file schema definitions.

use fc_column::ColumnParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub column: ColumnDef,
    /// Multiplier applied to all four nominal flows.
    #[serde(default = "default_flow_scale")]
    pub flow_scale: f64,
}

fn default_flow_scale() -> f64 {
    1.0
}

/// Column inputs as written in a scenario file, units in the field names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColumnDef {
    pub diameter_m: f64,
    /// mole/hr
    pub distillate_mole_flow: f64,
    /// mole/hr
    pub bottoms_mole_flow: f64,
    pub distillate_mass_flow_kg_per_hr: f64,
    pub bottoms_mass_flow_kg_per_hr: f64,
    pub reflux_ratio: f64,
    pub boilup_ratio: f64,
    pub liquid_density_kg_per_m3: f64,
    pub vapor_density_kg_per_m3: f64,
    pub molecular_weight_kg_per_kmol: f64,
    pub surface_tension_mn_per_m: f64,
}

impl From<ColumnDef> for ColumnParams {
    fn from(def: ColumnDef) -> Self {
        ColumnParams {
            diameter: def.diameter_m,
            distillate_mole_flow: def.distillate_mole_flow,
            bottoms_mole_flow: def.bottoms_mole_flow,
            distillate_mass_flow: def.distillate_mass_flow_kg_per_hr,
            bottoms_mass_flow: def.bottoms_mass_flow_kg_per_hr,
            reflux_ratio: def.reflux_ratio,
            boilup_ratio: def.boilup_ratio,
            liquid_density: def.liquid_density_kg_per_m3,
            vapor_density: def.vapor_density_kg_per_m3,
            molecular_weight: def.molecular_weight_kg_per_kmol,
            surface_tension: def.surface_tension_mn_per_m,
        }
    }
}

impl From<ColumnParams> for ColumnDef {
    fn from(p: ColumnParams) -> Self {
        ColumnDef {
            diameter_m: p.diameter,
            distillate_mole_flow: p.distillate_mole_flow,
            bottoms_mole_flow: p.bottoms_mole_flow,
            distillate_mass_flow_kg_per_hr: p.distillate_mass_flow,
            bottoms_mass_flow_kg_per_hr: p.bottoms_mass_flow,
            reflux_ratio: p.reflux_ratio,
            boilup_ratio: p.boilup_ratio,
            liquid_density_kg_per_m3: p.liquid_density,
            vapor_density_kg_per_m3: p.vapor_density,
            molecular_weight_kg_per_kmol: p.molecular_weight,
            surface_tension_mn_per_m: p.surface_tension,
        }
    }
}

impl ScenarioFile {
    pub fn scenario(&self, id: &str) -> Option<&ScenarioDef> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}
