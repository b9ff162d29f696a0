use crate::models::{ParsedDay, ParsedMeal, ParsedPlan};
use crate::parser::Diagnostics;

/// Display a plan as formatted text on stdout.
pub fn display_plan(plan: &ParsedPlan) {
    print!("{}", render_table(plan));
}

/// Render a plan as a human-readable overview.
pub fn render_table(plan: &ParsedPlan) -> String {
    let mut out = String::new();

    for day in plan {
        out.push('\n');
        out.push_str(&format!("=== {} ===\n", day.title));
        out.push_str(&format!(
            "Total: {} kcal | P {}g C {}g F {}g\n\n",
            day.calories, day.protein, day.carbs, day.fat
        ));

        // Align meal types within a day
        let width = day
            .meals
            .iter()
            .map(|m| m.meal_type.as_str().len())
            .max()
            .unwrap_or(4);

        for meal in &day.meals {
            out.push_str(&format!(
                "  {:<width$}  {} - {} kcal | P {}g C {}g F {}g\n",
                meal.meal_type.as_str(),
                meal.title,
                meal.calories,
                meal.protein,
                meal.carbs,
                meal.fat,
                width = width
            ));
            out.push_str(&format!("      Ingredients: {}\n", meal.ingredients.join(", ")));
            out.push_str(&format!("      Steps: {}\n", meal.instructions.len()));
            out.push_str(&format!("      {}\n", meal.timings.join(" | ")));
        }
    }

    let days = plan.len();
    let total: u32 = plan.iter().map(|d| d.calories).sum();
    out.push_str("\n--- Summary ---\n");
    out.push_str(&format!("Days: {days}\n"));
    out.push_str(&format!("Total calories: {total}\n"));
    if days > 0 {
        out.push_str(&format!("Average per day: {:.0}\n", total as f64 / days as f64));
    }
    out
}

fn share_meal(meal: &ParsedMeal, out: &mut String) {
    out.push_str(&format!(
        "{}: {} ({} kcal)\n",
        meal.meal_type, meal.title, meal.calories
    ));
    for item in &meal.ingredients {
        out.push_str(&format!("• {item}\n"));
    }
    for (i, step) in meal.instructions.iter().enumerate() {
        if step.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            out.push_str(&format!("{step}\n"));
        } else {
            out.push_str(&format!("{}. {step}\n", i + 1));
        }
    }
    out.push_str(&meal.timings.join(" | "));
    out.push('\n');
}

fn share_day(day: &ParsedDay, out: &mut String) {
    out.push_str(&day.title);
    out.push('\n');
    out.push_str(&format!(
        "{} kcal | Protein {}g | Carbs {}g | Fat {}g\n\n",
        day.calories, day.protein, day.carbs, day.fat
    ));
    for meal in &day.meals {
        share_meal(meal, out);
        out.push('\n');
    }
}

/// Plain share text for a plan: one section per day, every meal with its
/// ingredients, steps and timings.
pub fn share_text(plan: &ParsedPlan) -> String {
    let mut out = String::new();
    for day in plan {
        share_day(day, &mut out);
    }
    out.trim_end().to_string()
}

/// Print diagnostics to stderr.
pub fn display_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        eprintln!("No fallbacks: every field was parsed from the input.");
        return;
    }

    eprintln!("--- Diagnostics ({} fallbacks) ---", diagnostics.len());
    for entry in diagnostics.entries() {
        eprintln!("  {entry}");
    }
}
