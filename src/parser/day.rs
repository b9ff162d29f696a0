use rand::Rng;

use crate::models::{MealType, ParseContext, ParsedDay};
use crate::parser::classifier::{LineTag, classify, is_day_header};
use crate::parser::constants::MEAL_SEPARATOR;
use crate::parser::diagnostics::{Diagnostics, Fallback};
use crate::parser::fallback::synthesize_meal;
use crate::parser::meal::{block_lines, clean_title, parse_meal};

/// Split a day block into meal blocks on the separator token.
///
/// Blocks that are empty or hold nothing but a day header and noise are dropped.
pub fn split_meal_blocks(day_block: &str) -> Vec<&str> {
    day_block
        .split(MEAL_SEPARATOR)
        .filter(|block| {
            block_lines(block)
                .iter()
                .any(|line| !matches!(classify(line, false), LineTag::DayHeader | LineTag::Noise))
        })
        .collect()
}

/// Title of a day: its cleaned header line, or `Day N`.
fn day_title(day_block: &str, day_number: u32) -> String {
    block_lines(day_block)
        .first()
        .filter(|line| is_day_header(clean_title(line)))
        .map(|line| clean_title(line).to_string())
        .unwrap_or_else(|| format!("Day {day_number}"))
}

/// Parse one day block into exactly `ctx.meals_per_day` meals.
///
/// Meal blocks are assigned expected types by position. Missing meals are
/// synthesized; surplus blocks are ignored.
pub fn parse_day<R: Rng + ?Sized>(
    day_block: &str,
    day_number: u32,
    ctx: &ParseContext,
    rng: &mut R,
    diag: &mut Diagnostics,
) -> ParsedDay {
    let wanted = ctx.meals_per_day as usize;
    diag.at_day(day_number);

    let mut meals = Vec::with_capacity(wanted);
    for block in split_meal_blocks(day_block).into_iter().take(wanted) {
        let index = meals.len();
        diag.at_meal(index);
        meals.push(parse_meal(block, MealType::expected_at(index), ctx, rng, diag));
    }

    while meals.len() < wanted {
        let index = meals.len();
        diag.at_meal(index);
        diag.record(Fallback::SynthesizedMeal);
        meals.push(synthesize_meal(MealType::expected_at(index), ctx, rng));
    }
    meals.truncate(wanted);

    ParsedDay::from_meals(day_number, day_title(day_block, day_number), meals)
}
