//! Static clinical adjustment rules keyed by medical condition.
//!
//! These are fixed guidance text and macro tables, initialized at build
//! time and never mutated. They are surfaced verbatim on the result
//! record, not derived from the other formulas. No conflict resolution is
//! performed between co-selected conditions; each rule is reported
//! independently side-by-side.

use crate::profile::Condition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage range for one macronutrient, e.g. 25-30%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRange {
    pub min_pct: u8,
    pub max_pct: u8,
}

impl MacroRange {
    pub const fn new(min_pct: u8, max_pct: u8) -> Self {
        Self { min_pct, max_pct }
    }
}

impl fmt::Display for MacroRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}%", self.min_pct, self.max_pct)
    }
}

/// Macro distribution as percentage ranges of total calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: MacroRange,
    pub carbs: MacroRange,
    pub fat: MacroRange,
}

impl fmt::Display for MacroSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} protein / {} carbs / {} fat",
            self.protein, self.carbs, self.fat
        )
    }
}

/// Default distribution when no condition overrides apply.
pub const DEFAULT_MACRO_SPLIT: MacroSplit = MacroSplit {
    protein: MacroRange::new(25, 30),
    carbs: MacroRange::new(45, 50),
    fat: MacroRange::new(25, 30),
};

/// Clinical adjustment guidance for one condition.
///
/// The protein and calorie fields are descriptive text, not computed
/// values; they are keyed guidance surfaced exactly as written here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionRule {
    pub protein: &'static str,
    pub calories: &'static str,
    pub note: &'static str,
    pub macros: MacroSplit,
}

static DIABETES_RULE: ConditionRule = ConditionRule {
    protein: "1.2-1.5g/kg ABW",
    calories: "-500 kcal from TDEE",
    note: "Emphasize consistent carbohydrate timing and low glycemic index choices",
    macros: MacroSplit {
        protein: MacroRange::new(20, 30),
        carbs: MacroRange::new(40, 45),
        fat: MacroRange::new(30, 35),
    },
};

static KIDNEY_RULE: ConditionRule = ConditionRule {
    protein: "0.6-0.8g/kg ABW (non-dialysis)",
    calories: "25-35 kcal/kg to maintain weight",
    note: "Restrict sodium, potassium, and phosphorus per labs; protein rises to 1.2g/kg on dialysis",
    macros: MacroSplit {
        protein: MacroRange::new(10, 15),
        carbs: MacroRange::new(50, 60),
        fat: MacroRange::new(30, 35),
    },
};

static HYPERTENSION_RULE: ConditionRule = ConditionRule {
    protein: "0.8-1.0g/kg ABW",
    calories: "-250 to -500 kcal from TDEE",
    note: "DASH pattern; sodium under 2300mg/day, ideally 1500mg/day",
    macros: MacroSplit {
        protein: MacroRange::new(15, 20),
        carbs: MacroRange::new(50, 55),
        fat: MacroRange::new(25, 30),
    },
};

static LIVER_RULE: ConditionRule = ConditionRule {
    protein: "1.2-1.5g/kg ABW",
    calories: "30-35 kcal/kg to maintain weight",
    note: "Avoid protein restriction; small frequent meals with a late-evening snack",
    macros: MacroSplit {
        protein: MacroRange::new(20, 25),
        carbs: MacroRange::new(45, 55),
        fat: MacroRange::new(25, 30),
    },
};

impl Condition {
    /// Look up the static adjustment rule for this condition.
    pub fn rule(&self) -> &'static ConditionRule {
        match self {
            Condition::Diabetes => &DIABETES_RULE,
            Condition::Kidney => &KIDNEY_RULE,
            Condition::Hypertension => &HYPERTENSION_RULE,
            Condition::Liver => &LIVER_RULE,
        }
    }
}
