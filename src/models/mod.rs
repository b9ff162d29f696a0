mod meal;
mod plan;

pub use meal::{MealType, Nutrition, ParsedMeal};
pub use plan::{ParseContext, ParsedDay, ParsedPlan};
