// fc-core/src/units.rs

use uom::si::f64::{Area as UomArea, Velocity as UomVelocity};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Velocity = UomVelocity;

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// Velocity magnitude in ft/s, the reporting unit for column hydraulics.
#[inline]
pub fn to_ftps(v: Velocity) -> f64 {
    use uom::si::velocity::foot_per_second;
    v.get::<foot_per_second>()
}

pub mod constants {
    /// Flow rates are given per hour; velocities are per second.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::area::square_meter;

    #[test]
    fn area_constructor() {
        assert_eq!(m2(2.16).get::<square_meter>(), 2.16);
    }

    #[test]
    fn feet_per_second_conversion() {
        // exact international foot
        assert!((to_ftps(mps(0.3048)) - 1.0).abs() < 1e-12);
        assert!((to_ftps(mps(1.0)) - 3.280_839_895).abs() < 1e-9);
    }
}
