//! Model error types.
//!
//! Every failure mode has a named variant. No stringly-typed errors.
//! Invalid numeric inputs fail fast here rather than propagating NaN or
//! infinity through the scoring chain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GaugeError {
    /// A margin percentage at or above 100 leaves no price basis to divide
    /// by in the margin-on-price formula.
    #[error("{field} of {value}% is out of range (must be below 100%)")]
    MarginOutOfRange { field: &'static str, value: f64 },

    #[error("cost of goods must be positive, got {0}")]
    NonPositiveCogs(f64),
}

/// Result type alias for model operations.
pub type GaugeResult<T> = Result<T, GaugeError>;
