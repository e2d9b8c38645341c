//! Error types for column calculations.

use fc_core::error::FcError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a column.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColumnError {
    #[error("Invalid parameter: {what} (value={value})")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },
}

pub type ColumnResult<T> = Result<T, ColumnError>;

impl From<FcError> for ColumnError {
    fn from(e: FcError) -> Self {
        match e {
            FcError::NonFinite { what, value } => ColumnError::InvalidParameter { what, value },
            FcError::InvalidArg { what, value } => ColumnError::InvalidParameter { what, value },
            FcError::DivisionByZero { what } => ColumnError::DivisionByZero { what },
        }
    }
}

impl From<ColumnError> for FcError {
    fn from(e: ColumnError) -> Self {
        match e {
            ColumnError::InvalidParameter { what, value } => FcError::InvalidArg { what, value },
            ColumnError::DivisionByZero { what } => FcError::DivisionByZero { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ColumnError::InvalidParameter {
            what: "diameter",
            value: 0.0,
        };
        assert!(err.to_string().contains("diameter"));
    }

    #[test]
    fn error_conversion() {
        let col_err = ColumnError::DivisionByZero {
            what: "vapor mass flow",
        };
        let fc_err: FcError = col_err.into();
        assert!(matches!(fc_err, FcError::DivisionByZero { .. }));

        let back: ColumnError = FcError::NonFinite {
            what: "diameter",
            value: f64::INFINITY,
        }
        .into();
        assert!(matches!(
            back,
            ColumnError::InvalidParameter {
                what: "diameter",
                ..
            }
        ));
    }
}
