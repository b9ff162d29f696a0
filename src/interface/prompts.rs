use dialoguer::Input;

use crate::error::{PlanError, Result};

/// Prompt for a positive integer, offering `default`.
fn prompt_positive(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PlanError::InvalidInput(format!(
            "'{}' is not a positive whole number",
            input.trim()
        ))),
    }
}

/// Prompt for the number of days in the plan.
pub fn prompt_days(default: u32) -> Result<u32> {
    prompt_positive("How many days should the plan cover?", default)
}

/// Prompt for the number of meals per day.
pub fn prompt_meals_per_day(default: u32) -> Result<u32> {
    prompt_positive("How many meals per day?", default)
}

/// Prompt for the daily calorie target.
pub fn prompt_calories_per_day(default: u32) -> Result<u32> {
    prompt_positive("What is the daily calorie target?", default)
}
