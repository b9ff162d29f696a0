use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::meal::{Nutrition, ParsedMeal};
use crate::parser::constants::{MAX_CALORIES_PER_DAY, MAX_MEALS_PER_DAY};

/// Requested plan shape and calorie budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseContext {
    pub days: u32,
    pub meals_per_day: u32,
    pub calories_per_day: u32,
}

impl ParseContext {
    /// Build a context, rejecting zero values and budgets too large to total.
    pub fn new(days: u32, meals_per_day: u32, calories_per_day: u32) -> Result<Self> {
        if days == 0 {
            return Err(PlanError::InvalidInput("days must be at least 1".to_string()));
        }
        if meals_per_day == 0 {
            return Err(PlanError::InvalidInput(
                "meals per day must be at least 1".to_string(),
            ));
        }
        if meals_per_day > MAX_MEALS_PER_DAY {
            return Err(PlanError::InvalidInput(format!(
                "meals per day must be at most {MAX_MEALS_PER_DAY}"
            )));
        }
        if calories_per_day == 0 {
            return Err(PlanError::InvalidInput(
                "calories per day must be at least 1".to_string(),
            ));
        }
        if calories_per_day > MAX_CALORIES_PER_DAY {
            return Err(PlanError::InvalidInput(format!(
                "calories per day must be at most {MAX_CALORIES_PER_DAY}"
            )));
        }
        Ok(Self {
            days,
            meals_per_day,
            calories_per_day,
        })
    }

    /// Per-meal calorie target: `calories_per_day / meals_per_day`.
    #[inline]
    pub fn target_calories(&self) -> f64 {
        self.calories_per_day as f64 / self.meals_per_day.max(1) as f64
    }

    /// Rounded per-meal baseline, never below 1.
    pub fn baseline_calories(&self) -> u32 {
        (self.target_calories().round() as u32).max(1)
    }

    /// Default nutrition for a meal when nothing was extracted.
    pub fn baseline_nutrition(&self) -> Nutrition {
        Nutrition::from_calories(self.baseline_calories())
    }
}

/// One day of the plan. Totals are the exact sum over `meals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDay {
    pub day_number: u32,
    pub title: String,
    pub meals: Vec<ParsedMeal>,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl ParsedDay {
    /// Build a day whose totals are summed from its meals.
    pub fn from_meals(day_number: u32, title: String, meals: Vec<ParsedMeal>) -> Self {
        let totals: Nutrition = meals.iter().map(ParsedMeal::nutrition).sum();
        Self {
            day_number,
            title,
            meals,
            calories: totals.calories,
            protein: totals.protein,
            carbs: totals.carbs,
            fat: totals.fat,
        }
    }

    pub fn totals(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// A full plan: exactly `ParseContext::days` entries.
pub type ParsedPlan = Vec<ParsedDay>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meal::MealType;

    fn meal(calories: u32) -> ParsedMeal {
        let n = Nutrition::from_calories(calories);
        ParsedMeal {
            meal_type: MealType::Dinner,
            title: "Test".to_string(),
            ingredients: vec!["a".to_string()],
            instructions: vec!["b".to_string()],
            timings: vec!["c".to_string()],
            calories: n.calories,
            protein: n.protein,
            carbs: n.carbs,
            fat: n.fat,
        }
    }

    #[test]
    fn test_context_rejects_zero() {
        assert!(ParseContext::new(0, 3, 2000).is_err());
        assert!(ParseContext::new(3, 0, 2000).is_err());
        assert!(ParseContext::new(3, 3, 0).is_err());
        assert!(ParseContext::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_context_rejects_oversized_budgets() {
        assert!(ParseContext::new(1, 2, u32::MAX).is_err());
        assert!(ParseContext::new(1, u32::MAX, 2000).is_err());
        assert!(ParseContext::new(1, MAX_MEALS_PER_DAY + 1, 2000).is_err());
        assert!(ParseContext::new(1, 2, MAX_CALORIES_PER_DAY + 1).is_err());
    }

    #[test]
    fn test_largest_context_totals_fit() {
        let ctx = ParseContext::new(1, MAX_MEALS_PER_DAY, MAX_CALORIES_PER_DAY).unwrap();
        let meals = (0..MAX_MEALS_PER_DAY)
            .map(|_| meal(ctx.baseline_calories()))
            .collect();
        let day = ParsedDay::from_meals(1, "Day 1".to_string(), meals);
        assert_eq!(day.calories, ctx.baseline_calories() * MAX_MEALS_PER_DAY);
    }

    #[test]
    fn test_baseline_calories() {
        let ctx = ParseContext::new(3, 3, 1800).unwrap();
        assert_eq!(ctx.baseline_calories(), 600);
        assert!((ctx.target_calories() - 600.0).abs() < f64::EPSILON);

        // Tiny budgets still yield a positive baseline
        let tiny = ParseContext::new(1, 3, 1).unwrap();
        assert_eq!(tiny.baseline_calories(), 1);
    }

    #[test]
    fn test_day_totals_are_exact_sums() {
        let day = ParsedDay::from_meals(1, "Day 1".to_string(), vec![meal(450), meal(733)]);
        assert_eq!(day.calories, 450 + 733);
        assert_eq!(day.protein, day.meals[0].protein + day.meals[1].protein);
        assert_eq!(day.carbs, day.meals[0].carbs + day.meals[1].carbs);
        assert_eq!(day.fat, day.meals[0].fat + day.meals[1].fat);
    }
}
