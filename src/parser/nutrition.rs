use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::parser::constants::{CALORIES_RANGE, CARBS_RANGE, FAT_RANGE, PROTEIN_RANGE};

/// Figure the extractor can pull from nutrition lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    /// Lowercase keywords a line must contain to be considered.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Nutrient::Calories => &["cal"],
            Nutrient::Protein => &["protein", "prot"],
            Nutrient::Carbs => &["carb"],
            Nutrient::Fat => &["fat"],
        }
    }

    /// Lowercase words that disqualify a line even if a keyword matched.
    fn exclusions(&self) -> &'static [&'static str] {
        match self {
            Nutrient::Fat => &["fatigue"],
            _ => &[],
        }
    }

    /// Exclusive (min, max) bounds for an accepted value.
    pub fn range(&self) -> (u32, u32) {
        match self {
            Nutrient::Calories => CALORIES_RANGE,
            Nutrient::Protein => PROTEIN_RANGE,
            Nutrient::Carbs => CARBS_RANGE,
            Nutrient::Fat => FAT_RANGE,
        }
    }

    pub fn in_range(&self, value: u32) -> bool {
        let (min, max) = self.range();
        value > min && value < max
    }

    fn patterns(&self) -> &'static [Regex] {
        match self {
            Nutrient::Calories => &CALORIE_PATTERNS,
            Nutrient::Protein => &PROTEIN_PATTERNS,
            Nutrient::Carbs => &CARB_PATTERNS,
            Nutrient::Fat => &FAT_PATTERNS,
        }
    }

    fn is_candidate(&self, lower: &str) -> bool {
        self.keywords().iter().any(|kw| lower.contains(kw))
            && !self.exclusions().iter().any(|ex| lower.contains(ex))
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
        };
        f.write_str(name)
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid nutrient pattern"))
        .collect()
}

// Patterns are tried in order: "<kw>: N", "<kw> <short label>: N", "N <kw>",
// then abbreviated forms.

static CALORIE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)calories?\s*[:=\-]?\s*(\d+)",
        r"(?i)\bcalories?\b[^\d\n,;|]{0,20}?(\d+)",
        r"(?i)(\d+)\s*(?:calories?|kcals?)\b",
        r"(?i)\bkcals?\s*[:=\-]?\s*(\d+)",
        r"(?i)\bcal\s*[:=\-]?\s*(\d+)",
        r"(?i)(\d+)\s*cal\b",
    ])
});

static PROTEIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)protein\s*[:=\-]?\s*(\d+)",
        r"(?i)(\d+)\s*g?\s*(?:of\s+)?protein",
        r"(?i)\bprot\s*[:=\-]?\s*(\d+)",
    ])
});

static CARB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)carb(?:ohydrate)?s?\s*[:=\-]?\s*(\d+)",
        r"(?i)(\d+)\s*g?\s*(?:of\s+)?carb",
    ])
});

static FAT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bfats?\s*[:=\-]?\s*(\d+)",
        r"(?i)(\d+)\s*g?\s*(?:of\s+)?fats?\b",
    ])
});

/// Extract one nutrient value from a block's lines.
///
/// Lines are visited in order; for each candidate line every pattern is tried
/// in order. The first parsed value inside the plausible range wins. Returns
/// `None` when nothing in range was found.
pub fn extract<S: AsRef<str>>(lines: &[S], nutrient: Nutrient) -> Option<u32> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| nutrient.is_candidate(&line.to_lowercase()))
        .find_map(|line| {
            nutrient.patterns().iter().find_map(|pattern| {
                pattern
                    .captures(line)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse::<u32>().ok())
                    .filter(|&value| nutrient.in_range(value))
            })
        })
}
