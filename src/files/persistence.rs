use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::Result;
use crate::models::ParsedPlan;

/// Read raw plan text from a file, or from stdin when `source` is `-`.
pub fn load_plan_text(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(source)?)
}

/// Serialize a plan as pretty JSON.
pub fn plan_to_json(plan: &ParsedPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Save a plan to a JSON file.
pub fn save_plan_json<P: AsRef<Path>>(path: P, plan: &ParsedPlan) -> Result<()> {
    fs::write(path, plan_to_json(plan)?)?;
    Ok(())
}

/// Load a plan previously written by [`save_plan_json`].
pub fn load_plan_json<P: AsRef<Path>>(path: P) -> Result<ParsedPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParseContext;
    use crate::parser::synthesize_plan;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_plan_text_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Day 1\r\nOats".as_bytes()).unwrap();

        let text = load_plan_text(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "Day 1\r\nOats");
    }

    #[test]
    fn test_save_and_reload_plan() {
        let ctx = ParseContext::new(2, 3, 2100).unwrap();
        let plan = synthesize_plan(&ctx, &mut StdRng::seed_from_u64(8));

        let out = NamedTempFile::new().unwrap();
        save_plan_json(out.path(), &plan).unwrap();

        let reloaded = load_plan_json(out.path()).unwrap();
        assert_eq!(reloaded, plan);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let ctx = ParseContext::new(1, 1, 500).unwrap();
        let plan = synthesize_plan(&ctx, &mut StdRng::seed_from_u64(8));
        let json = plan_to_json(&plan).unwrap();
        assert!(json.contains("\"dayNumber\": 1"));
        assert!(json.contains("\"mealType\": \"Breakfast\""));
    }
}
