//! Patient intake profile and the closed input enums that parameterize
//! the calculation chain.
//!
//! Activity factors and calorie deficits are fixed lookup tables attached
//! to their enums, so an unknown key is a compile-time exhaustiveness
//! concern rather than a runtime lookup miss. The only place an unknown
//! key can appear at runtime is the [`FromStr`](std::str::FromStr)
//! boundary, which fails with [`CalcError::InvalidInput`].

use crate::errors::CalcError;
use crate::units::ImperialHeight;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            _ => Err(CalcError::InvalidInput(format!("Unknown sex: {}", s))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Very => "Hard exercise 6-7 days/week",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "very" => Ok(ActivityLevel::Very),
            _ => Err(CalcError::InvalidInput(format!(
                "Unknown activity level: {}",
                s
            ))),
        }
    }
}

/// Weight loss pace, expressed as a daily calorie deficit from TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightLossGoal {
    /// ~0.5 lb/week
    Conservative,
    /// ~1 lb/week
    #[default]
    Moderate,
    /// ~1.5 lb/week
    Aggressive,
}

impl WeightLossGoal {
    /// Daily calorie deficit subtracted from TDEE
    pub fn deficit_kcal(&self) -> f64 {
        match self {
            WeightLossGoal::Conservative => 250.0,
            WeightLossGoal::Moderate => 500.0,
            WeightLossGoal::Aggressive => 750.0,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            WeightLossGoal::Conservative => "Conservative (~0.5 lb/week)",
            WeightLossGoal::Moderate => "Moderate (~1 lb/week)",
            WeightLossGoal::Aggressive => "Aggressive (~1.5 lb/week)",
        }
    }
}

impl FromStr for WeightLossGoal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(WeightLossGoal::Conservative),
            "moderate" => Ok(WeightLossGoal::Moderate),
            "aggressive" => Ok(WeightLossGoal::Aggressive),
            _ => Err(CalcError::InvalidInput(format!(
                "Unknown weight loss goal: {}",
                s
            ))),
        }
    }
}

/// Medical conditions with dedicated clinical adjustment rules.
///
/// Declaration order is the canonical reporting order for
/// condition adjustments on the result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Diabetes,
    Kidney,
    Hypertension,
    Liver,
}

impl Condition {
    /// All conditions, in canonical reporting order.
    pub const ALL: [Condition; 4] = [
        Condition::Diabetes,
        Condition::Kidney,
        Condition::Hypertension,
        Condition::Liver,
    ];

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::Kidney => "Kidney Disease",
            Condition::Hypertension => "Hypertension",
            Condition::Liver => "Liver Disease",
        }
    }
}

impl FromStr for Condition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diabetes" => Ok(Condition::Diabetes),
            "kidney" => Ok(Condition::Kidney),
            "hypertension" => Ok(Condition::Hypertension),
            "liver" => Ok(Condition::Liver),
            _ => Err(CalcError::InvalidInput(format!("Unknown condition: {}", s))),
        }
    }
}

/// Validated intake profile supplied by the caller, immutable once passed
/// to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Age in years (must be > 0)
    pub age_years: u32,
    /// Current weight in pounds (must be > 0)
    pub weight_lbs: f64,
    /// Height in feet and inches
    pub height: ImperialHeight,
    /// Biological sex for physiological calculations
    pub sex: Sex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Weight loss pace
    pub goal: WeightLossGoal,
    /// Selected medical conditions (zero or more)
    #[serde(default)]
    pub conditions: Vec<Condition>,
}
