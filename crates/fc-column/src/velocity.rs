//! Operating and flooding vapor velocities.
//!
//! The flooding velocity follows the Souders–Brown relation with Fair's
//! capacity factor expressed as a quadratic in `log10(Flv)`:
//!
//! ```text
//! Flv     = (L / V) * sqrt(rho_v / rho_l)
//! Csbf    = 10^(a + b*log10(Flv) + c*log10(Flv)^2)
//! v_flood = Csbf * (sigma / 20)^0.2 * sqrt((rho_l - rho_v) / rho_v)
//! ```
//!
//! The curve fit yields ft/s directly, so no unit conversion follows it.

use crate::column::ColumnSpec;
use crate::common::{check_finite, check_nonzero, flv_within_correlation_range};
use crate::error::{ColumnError, ColumnResult};
use fc_core::units::{constants::SECONDS_PER_HOUR, mps, to_ftps};

/// Capacity factor curve fit coefficients.
pub const CSBF_INTERCEPT: f64 = -1.0262;
pub const CSBF_LINEAR: f64 = -0.63513;
pub const CSBF_QUADRATIC: f64 = -0.20097;

/// Surface tension the capacity factor is referenced to (mN/m).
pub const REFERENCE_SURFACE_TENSION: f64 = 20.0;

const SURFACE_TENSION_EXPONENT: f64 = 0.2;

/// Intermediate values of the flooding calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloodingPoint {
    /// Flow parameter (dimensionless)
    pub flv: f64,
    /// Capacity factor (ft/s)
    pub csbf: f64,
    /// Flooding velocity (ft/s)
    pub velocity: f64,
}

impl FloodingPoint {
    pub fn within_correlation_range(&self) -> bool {
        flv_within_correlation_range(self.flv)
    }
}

/// Superficial vapor velocity through the net area, in ft/s.
pub fn calculate_operating_velocity(vapor_mole_flow: f64, spec: &ColumnSpec) -> ColumnResult<f64> {
    let rho_v = check_nonzero(spec.vapor_density(), "vapor density")?;
    let area = check_nonzero(spec.cross_sectional_area(), "cross-sectional area")?;

    let v = vapor_mole_flow * spec.molecular_weight() / (rho_v * area * SECONDS_PER_HOUR);
    check_finite(v, "operating velocity")?;

    Ok(to_ftps(mps(v)))
}

/// Flooding velocity in ft/s.
pub fn calculate_flooding_velocity(
    bottoms_mass_flow_actual: f64,
    vapor_mass_flow: f64,
    spec: &ColumnSpec,
) -> ColumnResult<f64> {
    flooding_point(bottoms_mass_flow_actual, vapor_mass_flow, spec).map(|p| p.velocity)
}

/// Full flooding calculation, keeping Flv and Csbf.
pub fn flooding_point(
    bottoms_mass_flow_actual: f64,
    vapor_mass_flow: f64,
    spec: &ColumnSpec,
) -> ColumnResult<FloodingPoint> {
    let flv = flow_parameter(bottoms_mass_flow_actual, vapor_mass_flow, spec)?;
    let csbf = capacity_factor(flv);
    check_finite(csbf, "capacity factor")?;

    let density_excess = spec.liquid_density() - spec.vapor_density();
    if density_excess <= 0.0 {
        return Err(ColumnError::InvalidParameter {
            what: "liquid_density - vapor_density",
            value: density_excess,
        });
    }
    let rho_v = check_nonzero(spec.vapor_density(), "vapor density")?;

    let tension_term =
        (spec.surface_tension() / REFERENCE_SURFACE_TENSION).powf(SURFACE_TENSION_EXPONENT);
    let velocity = csbf * tension_term * (density_excess / rho_v).sqrt();
    check_finite(velocity, "flooding velocity")?;

    Ok(FloodingPoint {
        flv,
        csbf,
        velocity,
    })
}

/// Flow parameter `Flv = (L / V) * sqrt(rho_v / rho_l)`.
///
/// # Errors
///
/// [`ColumnError::DivisionByZero`] for a zero vapor mass flow,
/// [`ColumnError::InvalidParameter`] when the result is not strictly positive
/// (the capacity factor takes its logarithm).
pub fn flow_parameter(
    bottoms_mass_flow_actual: f64,
    vapor_mass_flow: f64,
    spec: &ColumnSpec,
) -> ColumnResult<f64> {
    let vapor_mass_flow = check_nonzero(vapor_mass_flow, "vapor mass flow")?;
    let rho_l = check_nonzero(spec.liquid_density(), "liquid density")?;

    let flv =
        (bottoms_mass_flow_actual / vapor_mass_flow) * (spec.vapor_density() / rho_l).sqrt();
    if !flv.is_finite() || flv <= 0.0 {
        return Err(ColumnError::InvalidParameter {
            what: "flow parameter Flv",
            value: flv,
        });
    }
    Ok(flv)
}

/// Fair's capacity factor at flooding (ft/s) for a positive `flv`.
///
/// Values far outside [`crate::common::FLV_CORRELATION_RANGE`] are computed
/// all the same; the fit is extrapolated there.
pub fn capacity_factor(flv: f64) -> f64 {
    let x = flv.log10();
    10f64.powf(CSBF_INTERCEPT + CSBF_LINEAR * x + CSBF_QUADRATIC * x * x)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::column::test_support::base_params;
    use fc_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn flooding_velocity_depends_only_on_mass_flow_ratio(
            bottoms in 100.0_f64..100_000.0,
            vapor in 100.0_f64..100_000.0,
            k in 1e-3_f64..1e3,
        ) {
            let spec = ColumnSpec::new(base_params()).unwrap();
            let v1 = calculate_flooding_velocity(bottoms, vapor, &spec).unwrap();
            let v2 = calculate_flooding_velocity(k * bottoms, k * vapor, &spec).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(v1, v2, tol), "{} vs {}", v1, v2);
        }

        #[test]
        fn operating_velocity_linear_in_vapor_traffic(
            vapor_mole_flow in 0.0_f64..10_000.0,
            k in 0.0_f64..10.0,
        ) {
            let spec = ColumnSpec::new(base_params()).unwrap();
            let v1 = calculate_operating_velocity(vapor_mole_flow, &spec).unwrap();
            let v2 = calculate_operating_velocity(k * vapor_mole_flow, &spec).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(k * v1, v2, tol));
        }
    }
}
