use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

/// Default location of the optional configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "meal_plan.toml";

/// Environment variable prefix, e.g. `MEAL_PLAN__CALORIES_PER_DAY=2200`.
pub const ENV_PREFIX: &str = "MEAL_PLAN";

/// Defaults for the plan parameters when they are not given on the command line.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
    #[serde(default = "default_calories_per_day")]
    pub calories_per_day: u32,
    /// Seed for fallback title selection; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            meals_per_day: default_meals_per_day(),
            calories_per_day: default_calories_per_day(),
            seed: None,
        }
    }
}

fn default_days() -> u32 {
    3
}

fn default_meals_per_day() -> u32 {
    3
}

fn default_calories_per_day() -> u32 {
    2000
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with the `MEAL_PLAN__` prefix
    /// 2. The TOML file at `path` (may be missing)
    /// 3. Default values
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
