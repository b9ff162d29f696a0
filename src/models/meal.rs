use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::parser::constants::{
    CALORIES_PER_GRAM_CARBS, CALORIES_PER_GRAM_FAT, CALORIES_PER_GRAM_PROTEIN, CARBS_RATIO,
    FAT_RATIO, PROTEIN_RATIO,
};

/// Kind of meal within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    /// Generic slot used past the fourth meal of a day.
    Meal,
}

impl MealType {
    /// The four named meal types, in the order a day is expected to list them.
    pub const SEQUENCE: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Expected type for the meal at `index` within a day; `Meal` past the sequence.
    pub fn expected_at(index: usize) -> Self {
        Self::SEQUENCE.get(index).copied().unwrap_or(MealType::Meal)
    }

    /// Type for the meal at `index`, cycling through the sequence.
    pub fn cycled_at(index: usize) -> Self {
        Self::SEQUENCE[index % Self::SEQUENCE.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Meal => "Meal",
        }
    }

    /// Lowercase keyword searched for in meal-type header lines.
    pub fn keyword(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Meal => "meal",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calorie and macro figures for a meal or a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Nutrition {
    /// Standard macro split for a calorie amount.
    ///
    /// 25% protein and 45% carbs at 4 kcal/g, 30% fat at 9 kcal/g.
    pub fn from_calories(calories: u32) -> Self {
        let kcal = calories as f64;
        Self {
            calories,
            protein: (kcal * PROTEIN_RATIO / CALORIES_PER_GRAM_PROTEIN).round() as u32,
            carbs: (kcal * CARBS_RATIO / CALORIES_PER_GRAM_CARBS).round() as u32,
            fat: (kcal * FAT_RATIO / CALORIES_PER_GRAM_FAT).round() as u32,
        }
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::default(), Add::add)
    }
}

/// A single normalized meal.
///
/// `ingredients`, `instructions` and `timings` are never empty and
/// `calories` is always positive; missing content is replaced with defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMeal {
    pub meal_type: MealType,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub timings: Vec<String>,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl ParsedMeal {
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}
