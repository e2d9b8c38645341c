use thiserror::Error;

pub type FcResult<T> = Result<T, FcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what} (value={value})")]
    InvalidArg { what: &'static str, value: f64 },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },
}
