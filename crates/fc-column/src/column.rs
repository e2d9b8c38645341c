//! Column geometry and operating point.

use crate::common::{NET_AREA_FRACTION, check_non_negative, check_positive};
use crate::error::{ColumnError, ColumnResult};
use fc_core::units::{Area, m2};
use serde::{Deserialize, Serialize};

/// Raw inputs for one column, before validation.
///
/// Flows are nominal, i.e. not yet adjusted for reflux or boilup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnParams {
    /// Column diameter (m)
    pub diameter: f64,
    /// Distillate mole flow (mole/hr)
    pub distillate_mole_flow: f64,
    /// Bottoms mole flow (mole/hr)
    pub bottoms_mole_flow: f64,
    /// Distillate mass flow (kg/hr)
    pub distillate_mass_flow: f64,
    /// Bottoms mass flow (kg/hr)
    pub bottoms_mass_flow: f64,
    pub reflux_ratio: f64,
    pub boilup_ratio: f64,
    /// Liquid density (kg/m³)
    pub liquid_density: f64,
    /// Vapor density (kg/m³)
    pub vapor_density: f64,
    /// Average molecular weight (kg/kmole)
    pub molecular_weight: f64,
    /// Surface tension (mN/m)
    pub surface_tension: f64,
}

/// Validated, immutable description of one column.
///
/// The net cross-sectional area is derived from the diameter once, at
/// construction. There are no setters: a modified column is a new
/// `ColumnSpec` that goes through [`ColumnSpec::new`] again.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    params: ColumnParams,
    cross_sectional_area: f64,
}

impl ColumnSpec {
    /// Validate `params` and derive the net cross-sectional area.
    ///
    /// # Errors
    ///
    /// [`ColumnError::InvalidParameter`] if the diameter, a density, the
    /// molecular weight or the surface tension is not strictly positive, if a
    /// flow or ratio is negative, if any value is non-finite, or if the liquid
    /// is not denser than the vapor.
    pub fn new(params: ColumnParams) -> ColumnResult<Self> {
        check_positive(params.diameter, "diameter")?;
        check_non_negative(params.distillate_mole_flow, "distillate_mole_flow")?;
        check_non_negative(params.bottoms_mole_flow, "bottoms_mole_flow")?;
        check_non_negative(params.distillate_mass_flow, "distillate_mass_flow")?;
        check_non_negative(params.bottoms_mass_flow, "bottoms_mass_flow")?;
        check_non_negative(params.reflux_ratio, "reflux_ratio")?;
        check_non_negative(params.boilup_ratio, "boilup_ratio")?;
        check_positive(params.liquid_density, "liquid_density")?;
        check_positive(params.vapor_density, "vapor_density")?;
        check_positive(params.molecular_weight, "molecular_weight")?;
        check_positive(params.surface_tension, "surface_tension")?;

        if params.liquid_density <= params.vapor_density {
            return Err(ColumnError::InvalidParameter {
                what: "liquid_density must exceed vapor_density",
                value: params.liquid_density,
            });
        }

        Ok(Self {
            params,
            cross_sectional_area: net_area(params.diameter),
        })
    }

    /// Same column with all four nominal flows multiplied by `factor`.
    pub fn scale_flows(&self, factor: f64) -> ColumnResult<Self> {
        check_non_negative(factor, "flow scale factor")?;
        let p = self.params;
        Self::new(ColumnParams {
            distillate_mole_flow: p.distillate_mole_flow * factor,
            bottoms_mole_flow: p.bottoms_mole_flow * factor,
            distillate_mass_flow: p.distillate_mass_flow * factor,
            bottoms_mass_flow: p.bottoms_mass_flow * factor,
            ..p
        })
    }

    pub fn params(&self) -> &ColumnParams {
        &self.params
    }

    pub fn diameter(&self) -> f64 {
        self.params.diameter
    }

    pub fn distillate_mole_flow(&self) -> f64 {
        self.params.distillate_mole_flow
    }

    pub fn bottoms_mole_flow(&self) -> f64 {
        self.params.bottoms_mole_flow
    }

    pub fn distillate_mass_flow(&self) -> f64 {
        self.params.distillate_mass_flow
    }

    pub fn bottoms_mass_flow(&self) -> f64 {
        self.params.bottoms_mass_flow
    }

    pub fn reflux_ratio(&self) -> f64 {
        self.params.reflux_ratio
    }

    pub fn boilup_ratio(&self) -> f64 {
        self.params.boilup_ratio
    }

    pub fn liquid_density(&self) -> f64 {
        self.params.liquid_density
    }

    pub fn vapor_density(&self) -> f64 {
        self.params.vapor_density
    }

    pub fn molecular_weight(&self) -> f64 {
        self.params.molecular_weight
    }

    pub fn surface_tension(&self) -> f64 {
        self.params.surface_tension
    }

    /// Net cross-sectional area (m²).
    pub fn cross_sectional_area(&self) -> f64 {
        self.cross_sectional_area
    }

    pub fn area(&self) -> Area {
        m2(self.cross_sectional_area)
    }
}

impl TryFrom<ColumnParams> for ColumnSpec {
    type Error = ColumnError;

    fn try_from(params: ColumnParams) -> ColumnResult<Self> {
        Self::new(params)
    }
}

fn net_area(diameter: f64) -> f64 {
    NET_AREA_FRACTION * std::f64::consts::PI * diameter * diameter / 4.0
}



#[cfg(test)]
mod proptests {
    use super::test_support::base_params;
    use super::*;
    use fc_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn area_is_net_fraction_of_circle(diameter in 1e-3_f64..20.0) {
            let spec = ColumnSpec::new(ColumnParams { diameter, ..base_params() }).unwrap();
            let expected = 0.85 * std::f64::consts::PI * diameter * diameter / 4.0;
            let tol = Tolerances { abs: 0.0, rel: 1e-9 };
            prop_assert!(nearly_equal(spec.cross_sectional_area(), expected, tol));
        }

        #[test]
        fn non_positive_diameter_always_rejected(diameter in -20.0_f64..=0.0) {
            let result = ColumnSpec::new(ColumnParams { diameter, ..base_params() });
            let rejected = matches!(result, Err(ColumnError::InvalidParameter { .. }));
            prop_assert!(rejected);
        }
    }
}
