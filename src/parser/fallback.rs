use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{MealType, ParseContext, ParsedDay, ParsedMeal};
use crate::parser::constants::{
    DEFAULT_INGREDIENTS, DEFAULT_INSTRUCTIONS, DEFAULT_TIMINGS, TITLE_ADJECTIVES, title_pool,
};

pub fn default_ingredients() -> Vec<String> {
    DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect()
}

pub fn default_instructions() -> Vec<String> {
    DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect()
}

pub fn default_timings() -> Vec<String> {
    DEFAULT_TIMINGS.iter().map(|s| s.to_string()).collect()
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Title for a parsed block that had none: `"{adjective} {meal type} Bowl"`.
pub fn synthesize_title<R: Rng + ?Sized>(meal_type: MealType, rng: &mut R) -> String {
    format!("{} {} Bowl", pick(&TITLE_ADJECTIVES, rng), meal_type)
}

/// A complete meal built without any source text.
///
/// The title comes from the per-type pool; nutrition is the standard split of
/// the per-meal baseline.
pub fn synthesize_meal<R: Rng + ?Sized>(
    meal_type: MealType,
    ctx: &ParseContext,
    rng: &mut R,
) -> ParsedMeal {
    let nutrition = ctx.baseline_nutrition();
    ParsedMeal {
        meal_type,
        title: pick(title_pool(meal_type), rng).to_string(),
        ingredients: default_ingredients(),
        instructions: default_instructions(),
        timings: default_timings(),
        calories: nutrition.calories,
        protein: nutrition.protein,
        carbs: nutrition.carbs,
        fat: nutrition.fat,
    }
}

/// A complete day of synthesized meals, types cycling through the standard sequence.
pub fn synthesize_day<R: Rng + ?Sized>(
    day_number: u32,
    ctx: &ParseContext,
    rng: &mut R,
) -> ParsedDay {
    let meals = (0..ctx.meals_per_day as usize)
        .map(|i| synthesize_meal(MealType::cycled_at(i), ctx, rng))
        .collect();
    ParsedDay::from_meals(day_number, format!("Day {day_number}"), meals)
}
