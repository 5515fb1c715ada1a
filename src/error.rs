/// Errors raised by the checked (`try_`) entry points.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FuelError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("cannot add a negative amount of fuel ({0})")]
    NegativeAmount(f64),
}

pub type Result<T> = std::result::Result<T, FuelError>;
