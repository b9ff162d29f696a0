pub mod classifier;
pub mod constants;
pub mod day;
pub mod diagnostics;
pub mod fallback;
pub mod meal;
pub mod nutrition;
pub mod plan;

pub use classifier::{LineTag, classify};
pub use day::{parse_day, split_meal_blocks};
pub use diagnostics::{Diagnostic, Diagnostics, Fallback};
pub use fallback::{synthesize_day, synthesize_meal};
pub use meal::parse_meal;
pub use nutrition::{Nutrient, extract};
pub use plan::{ParseOutcome, parse_plan, synthesize_plan};
