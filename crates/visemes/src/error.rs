use thiserror::Error;

/// Rejected timing or audio constants
#[derive(Debug, Error, PartialEq)]
pub enum InvalidProfile {
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("short word threshold ({short}) must not exceed long word threshold ({long})")]
    Thresholds { short: usize, long: usize },
}
