//! Clinical Nutrition Target Engine
//!
//! A stateless calculator that turns anthropometric inputs (age, weight,
//! height, sex, activity level, weight-loss goal, medical conditions) into
//! personalized nutrition targets: BMI, ideal and adjusted body weight,
//! basal and total energy expenditure, target calories, a protein range,
//! a macro distribution, and condition-specific clinical adjustments.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic, no side effects
//! 2. **Evidence-Based**: Hamwi, Mifflin-St Jeor, and BMI-tiered ABW formulas
//! 3. **Closed Inputs**: Activity levels, goals, and conditions are closed
//!    enums backed by fixed lookup tables, so unknown keys cannot reach the
//!    formulas at runtime
//! 4. **Complete or Nothing**: [`calculate`](engine::calculate) returns a
//!    fully populated [`NutritionTargets`](engine::NutritionTargets) or an
//!    error, never a partial result

pub mod conditions;
pub mod engine;
pub mod errors;
pub mod profile;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use conditions::*;
pub use engine::*;
pub use errors::*;
pub use profile::*;
pub use units::*;
