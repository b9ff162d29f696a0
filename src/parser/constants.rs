use crate::models::MealType;

// ─────────────────────────────────────────────────────────────────────────────
// Wire format markers
// ─────────────────────────────────────────────────────────────────────────────

/// Separator between meal blocks inside a day block.
pub const MEAL_SEPARATOR: &str = "=====";

/// Marker that starts an ingredient line.
pub const INGREDIENT_BULLET: char = '•';

/// Characters treated as list bullets when classifying lines.
pub const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];

/// Characters that make up horizontal-rule lines (`-----`, `======`, `***`).
pub const SEPARATOR_CHARS: [char; 5] = ['=', '-', '*', '_', '~'];

/// Raw text shorter than this (in characters, after trimming) is treated as unusable.
pub const MIN_USABLE_TEXT_LEN: usize = 500;

/// Minimum length (in characters) of a title or a non-noise line.
pub const MIN_LINE_LEN: usize = 3;

/// Upper bounds accepted by `ParseContext::new`. They keep day totals within `u32`.
pub const MAX_MEALS_PER_DAY: u32 = 24;
pub const MAX_CALORIES_PER_DAY: u32 = 100_000;

/// Number of leading lines searched for a meal-type header.
pub const MEAL_TYPE_SCAN_LINES: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Classifier keywords (matched against lowercased lines)
// ─────────────────────────────────────────────────────────────────────────────

pub const TIMING_KEYWORDS: [&str; 5] = ["preparation", "cooking", "servings", "prep:", "cook:"];

pub const NUTRITION_KEYWORDS: [&str; 9] = [
    "calories",
    "protein",
    "carbs",
    "carbohydrates",
    "fat",
    "fiber",
    "sodium",
    "sugar",
    "nutritional",
];

/// Abbreviated macro words that mark a nutrition line when paired with a colon.
pub const MACRO_ABBREVIATIONS: [&str; 4] = ["kcal", "cal", "prot", "carb"];

pub const LIST_SECTION_KEYWORDS: [&str; 2] = ["ingredients", "instructions"];

// ─────────────────────────────────────────────────────────────────────────────
// Macro ratios
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_RATIO: f64 = 0.25;
pub const CARBS_RATIO: f64 = 0.45;
pub const FAT_RATIO: f64 = 0.30;

pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
pub const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;

/// Relative deviation from the per-meal target above which macros are recomputed.
pub const DEVIATION_THRESHOLD: f64 = 0.4;

// ─────────────────────────────────────────────────────────────────────────────
// Plausible ranges (exclusive bounds)
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_RANGE: (u32, u32) = (50, 3000);
pub const PROTEIN_RANGE: (u32, u32) = (0, 200);
pub const CARBS_RANGE: (u32, u32) = (0, 500);
pub const FAT_RANGE: (u32, u32) = (0, 200);

// ─────────────────────────────────────────────────────────────────────────────
// Fallback content
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_INGREDIENTS: [&str; 3] = [
    "Lean protein of choice",
    "Seasonal vegetables",
    "Whole grains",
];

pub const DEFAULT_INSTRUCTIONS: [&str; 3] = [
    "1. Prepare and portion all ingredients.",
    "2. Cook the protein and vegetables until done.",
    "3. Combine with the grains and serve.",
];

pub const DEFAULT_TIMINGS: [&str; 3] = ["Prep: 15 min", "Cook: 20 min", "Servings: 2"];

/// Adjectives for titles synthesized when a parsed block has no usable title.
pub const TITLE_ADJECTIVES: [&str; 6] = [
    "Hearty",
    "Fresh",
    "Savory",
    "Wholesome",
    "Zesty",
    "Balanced",
];

const BREAKFAST_TITLES: [&str; 5] = [
    "Greek Yogurt Parfait",
    "Veggie Egg Scramble",
    "Overnight Oats with Berries",
    "Avocado Toast with Poached Egg",
    "Spinach Banana Smoothie Bowl",
];

const LUNCH_TITLES: [&str; 5] = [
    "Grilled Chicken Quinoa Salad",
    "Turkey and Hummus Wrap",
    "Lentil Vegetable Soup",
    "Mediterranean Chickpea Bowl",
    "Tuna Nicoise Salad",
];

const DINNER_TITLES: [&str; 5] = [
    "Baked Salmon with Roasted Vegetables",
    "Chicken Stir-Fry with Brown Rice",
    "Lean Beef Chili",
    "Herb-Crusted Cod with Sweet Potato",
    "Tofu Vegetable Curry",
];

const SNACK_TITLES: [&str; 5] = [
    "Apple Slices with Almond Butter",
    "Hummus and Veggie Sticks",
    "Cottage Cheese with Pineapple",
    "Trail Mix Handful",
    "Protein Energy Bites",
];

const MEAL_TITLES: [&str; 4] = [
    "Balanced Power Plate",
    "Garden Grain Bowl",
    "Protein Veggie Plate",
    "Harvest Rice Bowl",
];

/// Title pool used when synthesizing a whole meal of the given type.
pub fn title_pool(meal_type: MealType) -> &'static [&'static str] {
    match meal_type {
        MealType::Breakfast => &BREAKFAST_TITLES,
        MealType::Lunch => &LUNCH_TITLES,
        MealType::Dinner => &DINNER_TITLES,
        MealType::Snack => &SNACK_TITLES,
        MealType::Meal => &MEAL_TITLES,
    }
}
