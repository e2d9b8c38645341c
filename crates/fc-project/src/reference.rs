//! Reference scenario set: a base column, the same column with 33% more
//! throughput, and an optimized operating scheme at that throughput.

use crate::schema::{ColumnDef, ScenarioDef, ScenarioFile};
use crate::validate::LATEST_VERSION;

/// Throughput multiplier of the scaled and optimal cases.
pub const SCALE_UP_FACTOR: f64 = 1.33;

pub fn base_column() -> ColumnDef {
    ColumnDef {
        diameter_m: 1.8,
        distillate_mole_flow: 103.75,
        bottoms_mole_flow: 86.087,
        distillate_mass_flow_kg_per_hr: 5700.0,
        bottoms_mass_flow_kg_per_hr: 4300.0,
        reflux_ratio: 2.25,
        boilup_ratio: 3.77,
        liquid_density_kg_per_m3: 723.15,
        vapor_density_kg_per_m3: 2.9,
        molecular_weight_kg_per_kmol: 54.93,
        surface_tension_mn_per_m: 25.9,
    }
}

pub fn reference_scenarios() -> ScenarioFile {
    ScenarioFile {
        version: LATEST_VERSION,
        name: "Reference columns".to_string(),
        scenarios: vec![
            ScenarioDef {
                id: "base".to_string(),
                name: "Base Column".to_string(),
                description: None,
                column: base_column(),
                flow_scale: 1.0,
            },
            ScenarioDef {
                id: "scaled".to_string(),
                name: "Scaled Column".to_string(),
                description: Some("Base column at 1.33x throughput".to_string()),
                column: ColumnDef {
                    boilup_ratio: 3.78,
                    ..base_column()
                },
                flow_scale: SCALE_UP_FACTOR,
            },
            ScenarioDef {
                id: "optimal".to_string(),
                name: "Optimal Scheme".to_string(),
                description: Some("Scaled throughput with reduced reflux and boilup".to_string()),
                column: ColumnDef {
                    reflux_ratio: 1.05,
                    boilup_ratio: 2.378,
                    liquid_density_kg_per_m3: 742.0,
                    vapor_density_kg_per_m3: 2.09,
                    surface_tension_mn_per_m: 29.6,
                    ..base_column()
                },
                flow_scale: SCALE_UP_FACTOR,
            },
        ],
    }
}
