//! fc-core: stable foundation for floodcalc.
//!
//! Contains:
//! - units (uom SI types + constructors, ft/s conversion)
//! - numeric (Real + tolerances + float and domain checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FcError, FcResult};
pub use numeric::*;
pub use units::*;
