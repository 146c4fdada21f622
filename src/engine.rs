//! The calculation chain: BMI, ideal and adjusted body weight, energy
//! expenditure, protein range, and condition adjustments.
//!
//! Every function here is pure; [`calculate`] composes them into one
//! invocation that either produces a complete [`NutritionTargets`] or
//! fails with a [`CalcError`]. Identical input always yields identical
//! output; there is no hidden state, clock, or randomness.
//!
//! # Formula provenance
//!
//! - IBW: Hamwi equation, pounds arithmetic (100/106 lb base at 5 feet)
//! - BMR: Mifflin-St Jeor
//! - ABW: BMI-tiered adjustment factor applied unconditionally. A source
//!   revision instead gated ABW on `weight > 1.2 x IBW` with a fixed 0.4
//!   factor; the tiered variant is the more clinically complete one and is
//!   the single rule implemented here (see DESIGN.md).

use crate::conditions::{ConditionRule, MacroSplit, DEFAULT_MACRO_SPLIT};
use crate::errors::CalcError;
use crate::profile::{Condition, PatientProfile, Sex};
use crate::units::{lbs_to_kg, LBS_PER_KG};
use crate::validation::validate_profile;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Precondition: `height_cm > 0`. [`calculate`] enforces this before
/// calling; direct callers must do the same.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

// ============================================================================
// Ideal and Adjusted Body Weight
// ============================================================================

/// Calculate ideal body weight in pounds using the Hamwi equation
///
/// Female: 100 lb + 5 lb per inch over 5 feet
/// Male: 106 lb + 6 lb per inch over 5 feet
///
/// Inches over 5 feet may be negative for short stature; the formula still
/// applies and the result falls below the 100/106 lb base. Not clamped.
pub fn ideal_body_weight_lbs(total_inches: f64, sex: Sex) -> f64 {
    let inches_over_5ft = total_inches - 60.0;
    match sex {
        Sex::Female => 100.0 + 5.0 * inches_over_5ft,
        Sex::Male => 106.0 + 6.0 * inches_over_5ft,
    }
}

/// Fraction of excess weight (actual minus ideal) that counts toward
/// metabolic load, as a step function of BMI.
pub fn adjustment_factor(bmi: f64) -> f64 {
    if bmi > 40.0 {
        0.25
    } else if bmi > 35.0 {
        0.30
    } else if bmi > 30.0 {
        0.35
    } else {
        0.40
    }
}

/// Adjusted body weight in kilograms.
///
/// ABW = IBW + factor × (actual − IBW). Excess may be negative when actual
/// weight is below ideal; the blend still applies, pulling ABW toward the
/// actual weight. Not clamped.
pub fn adjusted_body_weight_kg(weight_kg: f64, ibw_kg: f64, factor: f64) -> f64 {
    ibw_kg + factor * (weight_kg - ibw_kg)
}

// ============================================================================
// Energy Expenditure
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Male: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Female: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

// ============================================================================
// Result Record
// ============================================================================

/// One clinical adjustment entry, looked up from the static rule table for
/// a condition selected on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionAdjustment {
    pub condition: Condition,
    pub protein: String,
    pub calories: String,
    pub note: String,
    pub macros: MacroSplit,
}

impl ConditionAdjustment {
    fn from_rule(condition: Condition, rule: &'static ConditionRule) -> Self {
        Self {
            condition,
            protein: rule.protein.to_string(),
            calories: rule.calories.to_string(),
            note: rule.note.to_string(),
            macros: rule.macros,
        }
    }
}

/// Complete nutrition targets for one profile, produced fresh per
/// calculation and owned by the caller.
///
/// Energy and protein figures are rounded to the nearest integer for
/// display; all intermediate computation keeps full floating precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Body Mass Index, kg/m²
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Ideal body weight (Hamwi), pounds
    pub ibw_lbs: f64,
    /// Adjusted body weight, pounds (display conversion)
    pub abw_lbs: f64,
    /// BMI-tiered fraction of excess weight counted toward metabolic load
    pub adjustment_factor: f64,
    /// Basal Metabolic Rate, kcal/day
    pub bmr: i32,
    /// Total Daily Energy Expenditure, kcal/day
    pub tdee: i32,
    /// TDEE minus the goal deficit, kcal/day
    pub target_calories: i32,
    /// Protein range low end, g/day (1.2 g/kg ABW)
    pub protein_low_g: i32,
    /// Protein range high end, g/day (1.6 g/kg ABW)
    pub protein_high_g: i32,
    /// Default macro distribution; condition-specific splits are carried on
    /// the adjustment entries and do not override this
    pub macros: MacroSplit,
    /// One entry per selected condition, canonical declaration order
    pub condition_adjustments: Vec<ConditionAdjustment>,
}

impl NutritionTargets {
    /// Protein range formatted for display, e.g. "77-102 g/day"
    pub fn protein_range(&self) -> String {
        format!("{}-{} g/day", self.protein_low_g, self.protein_high_g)
    }
}

// ============================================================================
// Engine Entry Point
// ============================================================================

/// Run the full calculation chain for one profile.
///
/// Validates defensively, converts imperial input to metric once, then
/// computes BMI → IBW/ABW → BMR/TDEE/target calories → protein range →
/// condition adjustments. Returns a complete record or an error, never a
/// partial result.
pub fn calculate(profile: &PatientProfile) -> Result<NutritionTargets, CalcError> {
    if let Err(err) = validate_profile(profile) {
        tracing::warn!(%err, "rejected profile");
        return Err(err);
    }

    let weight_kg = lbs_to_kg(profile.weight_lbs);
    let height_cm = profile.height.to_cm();

    let bmi = calculate_bmi(weight_kg, height_cm);
    let ibw_lbs = ideal_body_weight_lbs(profile.height.total_inches(), profile.sex);
    let ibw_kg = lbs_to_kg(ibw_lbs);
    let factor = adjustment_factor(bmi);
    let abw_kg = adjusted_body_weight_kg(weight_kg, ibw_kg, factor);

    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, profile.age_years, profile.sex);
    let tdee = bmr * profile.activity_level.multiplier();
    let target_calories = tdee - profile.goal.deficit_kcal();

    // Canonical declaration order; duplicate selections report once
    let condition_adjustments: Vec<ConditionAdjustment> = Condition::ALL
        .iter()
        .filter(|c| profile.conditions.contains(c))
        .map(|&c| ConditionAdjustment::from_rule(c, c.rule()))
        .collect();

    tracing::debug!(
        bmi,
        tdee,
        target_calories,
        conditions = condition_adjustments.len(),
        "computed nutrition targets"
    );

    Ok(NutritionTargets {
        bmi,
        bmi_category: classify_bmi(bmi),
        ibw_lbs,
        abw_lbs: abw_kg * LBS_PER_KG,
        adjustment_factor: factor,
        bmr: bmr.round() as i32,
        tdee: tdee.round() as i32,
        target_calories: target_calories.round() as i32,
        protein_low_g: (abw_kg * 1.2).round() as i32,
        protein_high_g: (abw_kg * 1.6).round() as i32,
        macros: DEFAULT_MACRO_SPLIT,
        condition_adjustments,
    })
}
