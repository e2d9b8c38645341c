//! fc-column: steady-state hydraulics of a distillation column.
//!
//! The calculation is a fixed pipeline over an immutable [`ColumnSpec`]:
//! - flow rates: reflux/boilup-adjusted vapor and bottoms traffic
//! - operating velocity: vapor flow through the net column area
//! - flooding velocity: Souders–Brown with Fair's capacity factor
//! - percent flooding: operating over flooding velocity
//!
//! Nothing here logs, prints, or holds shared state.
//!
//! # Example
//!
//! ```
//! use fc_column::{ColumnParams, ColumnSpec, simulate};
//!
//! let spec = ColumnSpec::new(ColumnParams {
//!     diameter: 1.8,
//!     distillate_mole_flow: 103.75,
//!     bottoms_mole_flow: 86.087,
//!     distillate_mass_flow: 5700.0,
//!     bottoms_mass_flow: 4300.0,
//!     reflux_ratio: 2.25,
//!     boilup_ratio: 3.77,
//!     liquid_density: 723.15,
//!     vapor_density: 2.9,
//!     molecular_weight: 54.93,
//!     surface_tension: 25.9,
//! })
//! .unwrap();
//!
//! let result = simulate(&spec).unwrap();
//! assert_eq!(format!("{:.2}", result.flooding_percentage), "58.99");
//! ```

pub mod column;
pub mod common;
pub mod error;
pub mod evaluate;
pub mod flow;
pub mod velocity;

// Re-exports
pub use column::{ColumnParams, ColumnSpec};
pub use error::{ColumnError, ColumnResult};
pub use evaluate::{EvaluationDetails, EvaluationResult, simulate, simulate_detailed};
pub use flow::{FlowRates, calculate_flow_rates};
pub use velocity::{
    FloodingPoint, calculate_flooding_velocity, calculate_operating_velocity, capacity_factor,
    flooding_point, flow_parameter,
};
