use std::path::Path;

use crate::error::Result;
use crate::models::ParsedPlan;

const CSV_HEADER: [&str; 10] = [
    "day",
    "meal",
    "meal_type",
    "title",
    "calories",
    "protein",
    "carbs",
    "fat",
    "ingredients",
    "instructions",
];

/// Write one CSV row per meal.
pub fn write_csv<P: AsRef<Path>>(plan: &ParsedPlan, path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(CSV_HEADER)?;

    for day in plan {
        for (i, meal) in day.meals.iter().enumerate() {
            wtr.write_record([
                day.day_number.to_string(),
                (i + 1).to_string(),
                meal.meal_type.to_string(),
                meal.title.clone(),
                meal.calories.to_string(),
                meal.protein.to_string(),
                meal.carbs.to_string(),
                meal.fat.to_string(),
                meal.ingredients.len().to_string(),
                meal.instructions.len().to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
