//! Common constants and checks for column calculations.

use crate::error::{ColumnError, ColumnResult};
use fc_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};

/// Fraction of the total column area available to vapor (downcomer allowance).
pub const NET_AREA_FRACTION: f64 = 0.85;

/// Flv range the capacity factor curve was fitted over.
pub const FLV_CORRELATION_RANGE: (f64, f64) = (0.01, 1.0);

pub(crate) fn check_finite(value: f64, what: &'static str) -> ColumnResult<f64> {
    Ok(ensure_finite(value, what)?)
}

pub(crate) fn check_positive(value: f64, what: &'static str) -> ColumnResult<f64> {
    Ok(ensure_positive(value, what)?)
}

pub(crate) fn check_non_negative(value: f64, what: &'static str) -> ColumnResult<f64> {
    Ok(ensure_non_negative(value, what)?)
}

/// Zero is a denominator failure, anything else passes through.
pub(crate) fn check_nonzero(value: f64, what: &'static str) -> ColumnResult<f64> {
    if value == 0.0 {
        Err(ColumnError::DivisionByZero { what })
    } else {
        Ok(value)
    }
}

/// Whether `flv` lies inside the range the capacity factor was fitted over.
pub fn flv_within_correlation_range(flv: f64) -> bool {
    let (lo, hi) = FLV_CORRELATION_RANGE;
    (lo..=hi).contains(&flv)
}
