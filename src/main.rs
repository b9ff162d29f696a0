use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_plan_parser_rs::cli::{Cli, Command, OutputFormat, PlanOptions};
use meal_plan_parser_rs::config::AppConfig;
use meal_plan_parser_rs::error::{PlanError, Result};
use meal_plan_parser_rs::files::{load_plan_text, plan_to_json, save_plan_json, write_csv};
use meal_plan_parser_rs::interface::{
    display_diagnostics, display_plan, prompt_calories_per_day, prompt_days,
    prompt_meals_per_day, share_text,
};
use meal_plan_parser_rs::models::ParseContext;
use meal_plan_parser_rs::parser::{ParseOutcome, parse_plan};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match &cli.command {
        Command::Parse { input, options } => cmd_parse(input, options, &config),
        Command::Synthesize { options } => cmd_synthesize(options, &config),
    }
}

/// Parse plan text read from a file or stdin.
fn cmd_parse(input: &str, options: &PlanOptions, config: &AppConfig) -> Result<()> {
    let ctx = resolve_context(options, config)?;
    let text = load_plan_text(input)?;
    info!("Read {} bytes of plan text from {}", text.len(), input);

    let outcome = run_parser(&text, &ctx, options.seed.or(config.seed));
    emit(&outcome, options)
}

/// Build a plan purely from fallback content.
fn cmd_synthesize(options: &PlanOptions, config: &AppConfig) -> Result<()> {
    let ctx = resolve_context(options, config)?;
    let outcome = run_parser("", &ctx, options.seed.or(config.seed));
    emit(&outcome, options)
}

fn run_parser(text: &str, ctx: &ParseContext, seed: Option<u64>) -> ParseOutcome {
    match seed {
        Some(seed) => parse_plan(text, ctx, &mut StdRng::seed_from_u64(seed)),
        None => parse_plan(text, ctx, &mut rand::thread_rng()),
    }
}

/// Flags win, then prompts (if interactive), then config values.
fn resolve_context(options: &PlanOptions, config: &AppConfig) -> Result<ParseContext> {
    let days = match options.days {
        Some(days) => days,
        None if options.interactive => prompt_days(config.days)?,
        None => config.days,
    };
    let meals_per_day = match options.meals_per_day {
        Some(meals) => meals,
        None if options.interactive => prompt_meals_per_day(config.meals_per_day)?,
        None => config.meals_per_day,
    };
    let calories_per_day = match options.calories_per_day {
        Some(calories) => calories,
        None if options.interactive => prompt_calories_per_day(config.calories_per_day)?,
        None => config.calories_per_day,
    };

    ParseContext::new(days, meals_per_day, calories_per_day)
}

fn emit(outcome: &ParseOutcome, options: &PlanOptions) -> Result<()> {
    match options.format {
        OutputFormat::Table => display_plan(&outcome.plan),
        OutputFormat::Share => write_text(&share_text(&outcome.plan), options)?,
        OutputFormat::Json => match &options.output {
            Some(path) => {
                save_plan_json(path, &outcome.plan)?;
                println!("Plan saved to {}", path.display());
            }
            None => println!("{}", plan_to_json(&outcome.plan)?),
        },
        OutputFormat::Csv => {
            let path = options.output.as_ref().ok_or_else(|| {
                PlanError::InvalidInput("--output is required for csv".to_string())
            })?;
            write_csv(&outcome.plan, path)?;
            println!("Plan saved to {}", path.display());
        }
    }

    if options.diagnostics {
        display_diagnostics(&outcome.diagnostics);
    }

    Ok(())
}

fn write_text(text: &str, options: &PlanOptions) -> Result<()> {
    match &options.output {
        Some(path) => {
            std::fs::write(path, text)?;
            println!("Plan saved to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
