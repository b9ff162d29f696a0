mod export;
mod persistence;

pub use export::write_csv;
pub use persistence::{load_plan_json, load_plan_text, plan_to_json, save_plan_json};
