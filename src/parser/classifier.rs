use std::sync::LazyLock;

use regex::Regex;

use crate::models::MealType;
use crate::parser::constants::{
    BULLET_MARKERS, INGREDIENT_BULLET, LIST_SECTION_KEYWORDS, MACRO_ABBREVIATIONS, MIN_LINE_LEN,
    NUTRITION_KEYWORDS, SEPARATOR_CHARS, TIMING_KEYWORDS,
};

static DAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^day\s+\d+").expect("valid day header regex"));

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(?:minutes?|hours?)").expect("valid duration regex"));

static GRAMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+g\b").expect("valid grams regex"));

static MILLIGRAMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*mg\b").expect("valid milligrams regex"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("valid numbered item regex"));

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*$").expect("valid bare number regex"));

/// Category of a single line of plan text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    /// Mentions one of the four meal types.
    MealTypeHeader(MealType),
    DayHeader,
    Timing,
    NutritionFact,
    /// Bullet, numbered step, or an "ingredients"/"instructions" heading.
    ListItem,
    Noise,
    /// Unclassified line seen before a title was accepted.
    TitleCandidate,
    /// Unclassified line seen after a title was accepted.
    Prose,
}

impl LineTag {
    /// Whether the title search may accept a line with this tag.
    pub fn can_be_title(&self) -> bool {
        matches!(self, LineTag::TitleCandidate | LineTag::Prose)
    }
}

/// Classify one line. Rules are tested in priority order; the first match wins.
pub fn classify(line: &str, has_title: bool) -> LineTag {
    let lower = line.to_lowercase();

    if let Some(meal_type) = meal_type_in(&lower) {
        return LineTag::MealTypeHeader(meal_type);
    }
    if is_day_header(line) {
        return LineTag::DayHeader;
    }
    if is_timing(&lower) {
        return LineTag::Timing;
    }
    if is_nutrition_fact(&lower) {
        return LineTag::NutritionFact;
    }
    if is_list_item(line, &lower) {
        return LineTag::ListItem;
    }
    if is_noise(line) {
        return LineTag::Noise;
    }
    if has_title {
        LineTag::Prose
    } else {
        LineTag::TitleCandidate
    }
}

/// First named meal type mentioned in an already-lowercased line.
pub fn meal_type_in(lower: &str) -> Option<MealType> {
    MealType::SEQUENCE
        .into_iter()
        .find(|t| lower.contains(t.keyword()))
}

pub fn is_day_header(line: &str) -> bool {
    DAY_HEADER.is_match(line.trim_start())
}

fn is_timing(lower: &str) -> bool {
    TIMING_KEYWORDS.iter().any(|kw| lower.contains(kw)) || DURATION.is_match(lower)
}

fn is_nutrition_fact(lower: &str) -> bool {
    NUTRITION_KEYWORDS.iter().any(|kw| lower.contains(kw))
        || GRAMS.is_match(lower)
        || MILLIGRAMS.is_match(lower)
        || (lower.contains(':') && MACRO_ABBREVIATIONS.iter().any(|kw| lower.contains(kw)))
}

fn is_list_item(line: &str, lower: &str) -> bool {
    starts_with_bullet(line)
        || is_numbered_item(line)
        || LIST_SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// `•` always marks a bullet; `-` and `*` only when followed by whitespace,
/// so separators and markdown emphasis are not mistaken for list items.
fn starts_with_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(INGREDIENT_BULLET) => true,
        Some(c) if BULLET_MARKERS.contains(&c) => chars.next().is_some_and(char::is_whitespace),
        _ => false,
    }
}

/// Line starts with `<digits>.`, the instruction marker.
pub fn is_numbered_item(line: &str) -> bool {
    NUMBERED.is_match(line)
}

fn is_noise(line: &str) -> bool {
    is_separator_rule(line)
        || BARE_NUMBER.is_match(line)
        || line.chars().count() < MIN_LINE_LEN
}

/// Horizontal rule of any length, e.g. `-----` or `======`.
fn is_separator_rule(line: &str) -> bool {
    let line = line.trim();
    line.chars().count() >= MIN_LINE_LEN && line.chars().all(|c| SEPARATOR_CHARS.contains(&c))
}
