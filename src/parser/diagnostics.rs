use std::fmt;

use log::debug;
use serde::Serialize;

use crate::parser::nutrition::Nutrient;

/// What was defaulted or synthesized during a parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fallback {
    /// Raw text was too short; the whole plan was synthesized.
    UnusableInput { length: usize },
    /// No day header existed for this day.
    SynthesizedDay,
    /// Too few meal blocks existed for this meal slot.
    SynthesizedMeal,
    DefaultTitle,
    DefaultIngredients,
    DefaultInstructions,
    DefaultTimings,
    DefaultNutrient { nutrient: Nutrient },
    /// Calories strayed too far from the target; macros were recomputed.
    DeviationCorrected { calories: u32, target: f64 },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::UnusableInput { length } => {
                write!(f, "input unusable ({length} chars), plan synthesized")
            }
            Fallback::SynthesizedDay => f.write_str("day synthesized"),
            Fallback::SynthesizedMeal => f.write_str("meal synthesized"),
            Fallback::DefaultTitle => f.write_str("title synthesized"),
            Fallback::DefaultIngredients => f.write_str("default ingredients"),
            Fallback::DefaultInstructions => f.write_str("default instructions"),
            Fallback::DefaultTimings => f.write_str("default timings"),
            Fallback::DefaultNutrient { nutrient } => write!(f, "default {nutrient}"),
            Fallback::DeviationCorrected { calories, target } => write!(
                f,
                "{calories} kcal deviates from target {target:.0} kcal, macros recomputed"
            ),
        }
    }
}

/// A fallback tagged with where in the plan it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub day: Option<u32>,
    /// Zero-based meal index within the day.
    pub meal: Option<usize>,
    pub fallback: Fallback,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.day, self.meal) {
            (Some(day), Some(meal)) => write!(f, "day {day}, meal {}: {}", meal + 1, self.fallback),
            (Some(day), None) => write!(f, "day {day}: {}", self.fallback),
            (None, Some(meal)) => write!(f, "meal {}: {}", meal + 1, self.fallback),
            (None, None) => write!(f, "plan: {}", self.fallback),
        }
    }
}

/// Collects fallbacks for one parse invocation.
///
/// The current day and meal are set by the day and plan parsers as they walk
/// the text, so meal-level records carry their location.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    #[serde(skip)]
    day: Option<u32>,
    #[serde(skip)]
    meal: Option<usize>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current day; clears the current meal.
    pub fn at_day(&mut self, day: u32) {
        self.day = Some(day);
        self.meal = None;
    }

    pub fn at_meal(&mut self, meal: usize) {
        self.meal = Some(meal);
    }

    pub fn record(&mut self, fallback: Fallback) {
        let entry = Diagnostic {
            day: self.day,
            meal: self.meal,
            fallback,
        };
        debug!("fallback: {entry}");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries matching a predicate.
    pub fn count(&self, pred: impl Fn(&Fallback) -> bool) -> usize {
        self.entries.iter().filter(|d| pred(&d.fallback)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_carry_location() {
        let mut diag = Diagnostics::new();
        diag.record(Fallback::UnusableInput { length: 4 });
        diag.at_day(2);
        diag.at_meal(1);
        diag.record(Fallback::DefaultTitle);
        diag.at_day(3);
        diag.record(Fallback::SynthesizedDay);

        let entries = diag.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!((entries[0].day, entries[0].meal), (None, None));
        assert_eq!((entries[1].day, entries[1].meal), (Some(2), Some(1)));
        assert_eq!((entries[2].day, entries[2].meal), (Some(3), None));
    }

    #[test]
    fn test_display() {
        let d = Diagnostic {
            day: Some(1),
            meal: Some(0),
            fallback: Fallback::DefaultNutrient {
                nutrient: Nutrient::Fat,
            },
        };
        assert_eq!(d.to_string(), "day 1, meal 1: default fat");
    }

    #[test]
    fn test_count() {
        let mut diag = Diagnostics::new();
        diag.record(Fallback::DefaultTitle);
        diag.record(Fallback::DefaultTimings);
        diag.record(Fallback::DefaultTitle);
        assert_eq!(diag.count(|f| *f == Fallback::DefaultTitle), 2);
    }
}
