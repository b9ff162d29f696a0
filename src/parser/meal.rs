use rand::Rng;

use crate::models::{MealType, Nutrition, ParseContext, ParsedMeal};
use crate::parser::classifier::{LineTag, classify, is_numbered_item};
use crate::parser::constants::{
    DEVIATION_THRESHOLD, INGREDIENT_BULLET, MEAL_TYPE_SCAN_LINES, MIN_LINE_LEN,
};
use crate::parser::diagnostics::{Diagnostics, Fallback};
use crate::parser::fallback::{
    default_ingredients, default_instructions, default_timings, synthesize_title,
};
use crate::parser::nutrition::{Nutrient, extract};

/// Trimmed, non-empty lines of a block.
pub fn block_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Meal type from a header in the first few lines, else `expected`.
fn resolve_meal_type(lines: &[&str], expected: MealType) -> MealType {
    lines
        .iter()
        .take(MEAL_TYPE_SCAN_LINES)
        .find_map(|line| match classify(line, false) {
            LineTag::MealTypeHeader(meal_type) => Some(meal_type),
            _ => None,
        })
        .unwrap_or(expected)
}

/// Strip markdown decoration and a trailing colon from a title line.
pub fn clean_title(line: &str) -> &str {
    line.trim_matches(|c: char| c == '#' || c == '*' || c == '_' || c.is_whitespace())
        .trim_end_matches(':')
        .trim_end()
}

/// First line that survives classification as a title.
fn find_title(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .filter(|line| classify(line, false).can_be_title())
        .map(|line| clean_title(line))
        .find(|title| title.chars().count() >= MIN_LINE_LEN)
        .map(str::to_string)
}

fn collect_ingredients(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| line.strip_prefix(INGREDIENT_BULLET))
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn collect_instructions(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_numbered_item(line))
        .map(|line| line.to_string())
        .collect()
}

fn collect_timings(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| classify(line, true) == LineTag::Timing)
        .map(|line| line.to_string())
        .collect()
}

/// Baseline nutrition with each figure overridden by an extracted value.
fn extract_nutrition(lines: &[&str], ctx: &ParseContext, diag: &mut Diagnostics) -> Nutrition {
    let baseline = ctx.baseline_nutrition();
    let mut value_for = |nutrient: Nutrient, default: u32| {
        extract(lines, nutrient).unwrap_or_else(|| {
            diag.record(Fallback::DefaultNutrient { nutrient });
            default
        })
    };

    Nutrition {
        calories: value_for(Nutrient::Calories, baseline.calories),
        protein: value_for(Nutrient::Protein, baseline.protein),
        carbs: value_for(Nutrient::Carbs, baseline.carbs),
        fat: value_for(Nutrient::Fat, baseline.fat),
    }
}

/// Recompute macros from calories when calories stray more than 40% from target.
///
/// Individually extracted macros are discarded in that case so the meal stays
/// internally consistent.
pub fn correct_deviation(
    nutrition: Nutrition,
    ctx: &ParseContext,
    diag: &mut Diagnostics,
) -> Nutrition {
    let target = ctx.target_calories();
    let deviation = (nutrition.calories as f64 - target).abs() / target;
    if deviation > DEVIATION_THRESHOLD {
        diag.record(Fallback::DeviationCorrected {
            calories: nutrition.calories,
            target,
        });
        Nutrition::from_calories(nutrition.calories)
    } else {
        nutrition
    }
}

fn or_default(
    items: Vec<String>,
    default: fn() -> Vec<String>,
    fallback: Fallback,
    diag: &mut Diagnostics,
) -> Vec<String> {
    if items.is_empty() {
        diag.record(fallback);
        default()
    } else {
        items
    }
}

/// Parse one meal block. Never fails: missing fields degrade to defaults.
pub fn parse_meal<R: Rng + ?Sized>(
    block: &str,
    expected: MealType,
    ctx: &ParseContext,
    rng: &mut R,
    diag: &mut Diagnostics,
) -> ParsedMeal {
    let lines = block_lines(block);
    let meal_type = resolve_meal_type(&lines, expected);

    let title = find_title(&lines).unwrap_or_else(|| {
        diag.record(Fallback::DefaultTitle);
        synthesize_title(meal_type, rng)
    });

    let ingredients = or_default(
        collect_ingredients(&lines),
        default_ingredients,
        Fallback::DefaultIngredients,
        diag,
    );
    let instructions = or_default(
        collect_instructions(&lines),
        default_instructions,
        Fallback::DefaultInstructions,
        diag,
    );
    let timings = or_default(
        collect_timings(&lines),
        default_timings,
        Fallback::DefaultTimings,
        diag,
    );

    let nutrition = extract_nutrition(&lines, ctx, diag);
    let nutrition = correct_deviation(nutrition, ctx, diag);

    ParsedMeal {
        meal_type,
        title,
        ingredients,
        instructions,
        timings,
        calories: nutrition.calories,
        protein: nutrition.protein,
        carbs: nutrition.carbs,
        fat: nutrition.fat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::constants::{DEFAULT_INGREDIENTS, TITLE_ADJECTIVES};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SALMON: &str = "\
Dinner
**Lemon Herb Salmon**
Ingredients:
• 150g salmon fillet
• 1 lemon
• Fresh dill
Instructions:
1. Season the salmon.
2. Bake for 15 minutes.
Prep: 10 min
Calories: 620
Protein: 40g
Carbs: 60g
Fat: 22g
";

    fn ctx(meals: u32, calories: u32) -> ParseContext {
        ParseContext::new(1, meals, calories).unwrap()
    }

    fn parse(block: &str, expected: MealType, ctx: &ParseContext) -> (ParsedMeal, Diagnostics) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut diag = Diagnostics::new();
        let meal = parse_meal(block, expected, ctx, &mut rng, &mut diag);
        (meal, diag)
    }

    #[test]
    fn test_parse_well_formed_block() {
        let (meal, diag) = parse(SALMON, MealType::Breakfast, &ctx(3, 1800));

        assert_eq!(meal.meal_type, MealType::Dinner);
        assert_eq!(meal.title, "Lemon Herb Salmon");
        assert_eq!(meal.ingredients, vec!["150g salmon fillet", "1 lemon", "Fresh dill"]);
        assert_eq!(
            meal.instructions,
            vec!["1. Season the salmon.", "2. Bake for 15 minutes."]
        );
        // Numbered steps mentioning a duration are timing lines as well
        assert_eq!(meal.timings, vec!["2. Bake for 15 minutes.", "Prep: 10 min"]);
        assert_eq!(
            (meal.calories, meal.protein, meal.carbs, meal.fat),
            (620, 40, 60, 22)
        );
        assert!(diag.is_empty());
    }

    #[test]
    fn test_meal_type_only_from_first_lines() {
        let block = "Tasty Oats\n• oats\n1. Mix\nServes one person\nLunch leftovers work too";
        let (meal, _) = parse(block, MealType::Breakfast, &ctx(3, 1800));
        assert_eq!(meal.meal_type, MealType::Breakfast);
        assert_eq!(meal.title, "Tasty Oats");
    }

    #[test]
    fn test_title_skips_classified_lines() {
        let block = "Day 1\n=====\n12\nCalories: 500\n• rice\n## Chicken Rice Pot:\n";
        let (meal, _) = parse(block, MealType::Lunch, &ctx(3, 1500));
        assert_eq!(meal.title, "Chicken Rice Pot");
    }

    #[test]
    fn test_title_skips_horizontal_rules() {
        let block = "Lunch\n-----\n======\nGrilled Salmon Bowl\n• salmon\n1. Cook.";
        let (meal, diag) = parse(block, MealType::Lunch, &ctx(3, 1800));
        assert_eq!(meal.title, "Grilled Salmon Bowl");
        assert_eq!(diag.count(|f| *f == Fallback::DefaultTitle), 0);
    }

    #[test]
    fn test_title_synthesized_when_missing() {
        let block = "Breakfast\n• eggs\n1. Scramble";
        let (meal, diag) = parse(block, MealType::Lunch, &ctx(3, 1800));

        assert_eq!(meal.meal_type, MealType::Breakfast);
        assert!(meal.title.ends_with(" Breakfast Bowl"));
        let adjective = meal.title.trim_end_matches(" Breakfast Bowl");
        assert!(TITLE_ADJECTIVES.contains(&adjective));
        assert_eq!(diag.count(|f| *f == Fallback::DefaultTitle), 1);
    }

    #[test]
    fn test_defaults_when_buckets_empty() {
        let (meal, diag) = parse("Simple Green Salad", MealType::Lunch, &ctx(2, 1200));

        assert_eq!(meal.ingredients, DEFAULT_INGREDIENTS.to_vec());
        assert_eq!(meal.instructions, default_instructions());
        assert_eq!(meal.timings, default_timings());
        assert_eq!(meal.nutrition(), Nutrition::from_calories(600));
        assert_eq!(
            diag.count(|f| matches!(f, Fallback::DefaultNutrient { .. })),
            4
        );
    }

    #[test]
    fn test_deviation_recomputes_macros() {
        // Target 1000 kcal; 450 deviates by 55%
        let block = "Light Lunch\nCalories: 450\nProtein: 90g\nCarbs: 10g\nFat: 5g";
        let (meal, diag) = parse(block, MealType::Lunch, &ctx(2, 2000));

        assert_eq!(meal.calories, 450);
        assert_eq!(meal.nutrition(), Nutrition::from_calories(450));
        assert_eq!(
            diag.count(|f| matches!(f, Fallback::DeviationCorrected { .. })),
            1
        );
    }

    #[test]
    fn test_within_threshold_keeps_extracted_macros() {
        // Target 600 kcal; 700 deviates by ~17%
        let block = "Steak Plate\nCalories: 700\nProtein: 55g";
        let (meal, _) = parse(block, MealType::Dinner, &ctx(3, 1800));

        assert_eq!(meal.calories, 700);
        assert_eq!(meal.protein, 55);
        // Carbs and fat fall back to the baseline split, not the 700 kcal split
        assert_eq!(meal.carbs, Nutrition::from_calories(600).carbs);
        assert_eq!(meal.fat, Nutrition::from_calories(600).fat);
    }

    #[test]
    fn test_correct_deviation_boundary() {
        let ctx = ctx(1, 1000);
        let mut diag = Diagnostics::new();
        let at_limit = Nutrition {
            calories: 1400,
            protein: 1,
            carbs: 1,
            fat: 1,
        };
        // Exactly 40% is not corrected
        assert_eq!(correct_deviation(at_limit, &ctx, &mut diag), at_limit);
        assert!(diag.is_empty());
    }
}
