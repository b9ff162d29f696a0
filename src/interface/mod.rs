pub mod prompts;
pub mod render;

pub use prompts::{prompt_calories_per_day, prompt_days, prompt_meals_per_day};
pub use render::{display_diagnostics, display_plan, render_table, share_text};
