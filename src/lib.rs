pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod interface;
pub mod models;
pub mod parser;

pub use error::{PlanError, Result};
pub use models::{MealType, ParseContext, ParsedDay, ParsedMeal, ParsedPlan};
pub use parser::{ParseOutcome, parse_plan};
