//! Error types for the nutrition target engine

use thiserror::Error;

/// Engine error taxonomy.
///
/// Callers are expected to validate input before invoking the engine; the
/// engine performs the same checks defensively and fails with one of these
/// variants rather than producing NaN or infinite results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Non-positive or non-finite age/weight, inches outside [0, 12), or an
    /// unknown enum key at a string parsing boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Height converted to a non-positive metric value; BMI and BMR are
    /// undefined and the engine refuses to divide.
    #[error("Degenerate height: {0} cm (must be > 0)")]
    DegenerateHeight(f64),
}
