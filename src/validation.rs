//! Defensive input validation
//!
//! The caller is responsible for rejecting bad input before invoking the
//! engine; these checks run again at the top of
//! [`calculate`](crate::engine::calculate) so the formulas never see a
//! non-positive or non-finite value.

use crate::errors::CalcError;
use crate::profile::PatientProfile;
use crate::units::ImperialHeight;

/// Validate age in years (must be > 0)
pub fn validate_age(age_years: u32) -> Result<(), CalcError> {
    if age_years == 0 {
        return Err(CalcError::InvalidInput(
            "Age must be at least 1 year".to_string(),
        ));
    }
    Ok(())
}

/// Validate weight in pounds (must be finite and > 0)
pub fn validate_weight_lbs(weight_lbs: f64) -> Result<(), CalcError> {
    if weight_lbs.is_nan() || weight_lbs.is_infinite() {
        return Err(CalcError::InvalidInput(
            "Weight must be a valid number".to_string(),
        ));
    }
    if weight_lbs <= 0.0 {
        return Err(CalcError::InvalidInput(
            "Weight must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Validate height: inch remainder in [0, 12), total strictly positive
pub fn validate_height(height: &ImperialHeight) -> Result<(), CalcError> {
    if height.inches.is_nan() || height.inches.is_infinite() {
        return Err(CalcError::InvalidInput(
            "Height inches must be a valid number".to_string(),
        ));
    }
    if !(0.0..12.0).contains(&height.inches) {
        return Err(CalcError::InvalidInput(
            "Height inches must be in [0, 12)".to_string(),
        ));
    }
    if height.total_inches() <= 0.0 {
        return Err(CalcError::DegenerateHeight(height.to_cm()));
    }
    Ok(())
}

/// Validate a complete profile before calculation
pub fn validate_profile(profile: &PatientProfile) -> Result<(), CalcError> {
    validate_age(profile.age_years)?;
    validate_weight_lbs(profile.weight_lbs)?;
    validate_height(&profile.height)?;
    Ok(())
}
