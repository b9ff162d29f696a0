use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_PATH;

/// meal_plan_parser: normalizes generated meal-plan text into a fixed-shape plan.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_parser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse plan text from a file (or `-` for stdin).
    Parse {
        /// Input file containing the generated plan text.
        input: String,

        #[command(flatten)]
        options: PlanOptions,
    },

    /// Build a plan entirely from fallback content.
    Synthesize {
        #[command(flatten)]
        options: PlanOptions,
    },
}

impl Command {
    pub fn options(&self) -> &PlanOptions {
        match self {
            Command::Parse { options, .. } | Command::Synthesize { options } => options,
        }
    }
}

/// Plan parameters and output settings shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct PlanOptions {
    /// Number of days in the plan.
    #[arg(long)]
    pub days: Option<u32>,

    /// Number of meals per day.
    #[arg(long)]
    pub meals_per_day: Option<u32>,

    /// Daily calorie target.
    #[arg(long)]
    pub calories_per_day: Option<u32>,

    /// Seed for fallback title selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout (required for csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print which fields were defaulted or synthesized.
    #[arg(long)]
    pub diagnostics: bool,

    /// Prompt for plan parameters not given as flags.
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Share,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_flags() {
        let cli = Cli::try_parse_from([
            "meal_plan_parser",
            "parse",
            "plan.txt",
            "--days",
            "5",
            "--meals-per-day",
            "4",
            "--format",
            "json",
            "--seed",
            "9",
        ])
        .unwrap();

        match &cli.command {
            Command::Parse { input, options } => {
                assert_eq!(input, "plan.txt");
                assert_eq!(options.days, Some(5));
                assert_eq!(options.meals_per_day, Some(4));
                assert_eq!(options.calories_per_day, None);
                assert_eq!(options.seed, Some(9));
                assert_eq!(options.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_synthesize_defaults() {
        let cli = Cli::try_parse_from(["meal_plan_parser", "synthesize"]).unwrap();
        let options = cli.command.options();
        assert_eq!(options.format, OutputFormat::Table);
        assert!(!options.diagnostics);
        assert!(!options.interactive);
    }
}
