//! Unit conversion between imperial input and the metric units the
//! formulas run in.
//!
//! All calculations are performed in SI units (kg, cm); imperial input is
//! converted once at the engine boundary and never inside the formulas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per avoirdupois pound (exact definition).
pub const KG_PER_LB: f64 = 0.45359237;

/// Pounds per kilogram, display-precision factor used when converting
/// adjusted body weight back to pounds for the result record.
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters per inch (exact definition).
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms.
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert kilograms to pounds via the exact inverse of [`lbs_to_kg`],
/// so lbs -> kg -> lbs round-trips within floating tolerance.
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Height expressed as feet plus a fractional inch remainder, as entered
/// on an imperial intake form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperialHeight {
    pub feet: u32,
    /// Remainder inches, expected in [0, 12).
    pub inches: f64,
}

impl ImperialHeight {
    pub fn new(feet: u32, inches: f64) -> Self {
        Self { feet, inches }
    }

    /// Total height in inches.
    pub fn total_inches(&self) -> f64 {
        self.feet as f64 * 12.0 + self.inches
    }

    /// Total height in centimeters.
    pub fn to_cm(&self) -> f64 {
        self.total_inches() * CM_PER_INCH
    }

    /// Total height in meters.
    pub fn to_meters(&self) -> f64 {
        self.to_cm() / 100.0
    }
}

impl fmt::Display for ImperialHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Conversion Tests
    // =========================================================================

    #[test]
    fn test_known_weight_conversions() {
        // 180 lbs = 81.6466 kg
        let kg = lbs_to_kg(180.0);
        assert!((kg - 81.6466).abs() < 0.001);

        // 1 kg = 2.20462 lbs
        let lbs = kg_to_lbs(1.0);
        assert!((lbs - 2.20462).abs() < 0.001);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip_lbs(lbs in 44.0f64..1100.0) {
            let kg = lbs_to_kg(lbs);
            let back_to_lbs = kg_to_lbs(kg);
            prop_assert!((lbs - back_to_lbs).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", lbs, kg, back_to_lbs);
        }

        #[test]
        fn prop_weight_roundtrip_kg(kg in 20.0f64..500.0) {
            let lbs = kg_to_lbs(kg);
            let back_to_kg = lbs_to_kg(lbs);
            prop_assert!((kg - back_to_kg).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", kg, lbs, back_to_kg);
        }

        /// Property: Conversion preserves sign and ordering
        #[test]
        fn prop_weight_conversion_monotonic(a in 1.0f64..500.0, b in 1.0f64..500.0) {
            prop_assert_eq!(a < b, lbs_to_kg(a) < lbs_to_kg(b));
        }
    }

    // =========================================================================
    // Height Tests
    // =========================================================================

    #[test]
    fn test_total_inches() {
        let height = ImperialHeight::new(5, 4.0);
        assert_eq!(height.total_inches(), 64.0);

        let height = ImperialHeight::new(6, 0.0);
        assert_eq!(height.total_inches(), 72.0);
    }

    #[test]
    fn test_known_height_conversions() {
        // 5'4" = 64 in = 162.56 cm
        let height = ImperialHeight::new(5, 4.0);
        assert!((height.to_cm() - 162.56).abs() < 0.001);
        assert!((height.to_meters() - 1.6256).abs() < 0.0001);

        // 6'0" = 182.88 cm
        let height = ImperialHeight::new(6, 0.0);
        assert!((height.to_cm() - 182.88).abs() < 0.001);
    }

    #[test]
    fn test_height_display() {
        let height = ImperialHeight::new(6, 2.0);
        assert_eq!(format!("{}", height), "6'2\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: cm and total inches agree through the same constant
        #[test]
        fn prop_height_cm_consistent(feet in 0u32..8, inches in 0.0f64..12.0) {
            let height = ImperialHeight::new(feet, inches);
            let expected = height.total_inches() * CM_PER_INCH;
            prop_assert!((height.to_cm() - expected).abs() < 1e-9);
            prop_assert!((height.to_meters() * 100.0 - expected).abs() < 1e-9);
        }
    }
}
