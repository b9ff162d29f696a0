use std::sync::LazyLock;

use log::{info, warn};
use rand::Rng;
use regex::Regex;

use crate::models::{ParseContext, ParsedPlan};
use crate::parser::constants::MIN_USABLE_TEXT_LEN;
use crate::parser::day::parse_day;
use crate::parser::diagnostics::{Diagnostics, Fallback};
use crate::parser::fallback::synthesize_day;

static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bday\s+(\d+)").expect("valid day marker regex"));

/// A parsed plan together with the fallbacks taken to produce it.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub plan: ParsedPlan,
    pub diagnostics: Diagnostics,
}

/// Unify line endings and trim surrounding whitespace.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Byte offsets of every day header, in order of appearance.
pub fn day_header_offsets(text: &str) -> Vec<usize> {
    DAY_MARKER.find_iter(text).map(|m| m.start()).collect()
}

/// Build a plan made only of synthesized days.
pub fn synthesize_plan<R: Rng + ?Sized>(ctx: &ParseContext, rng: &mut R) -> ParsedPlan {
    (1..=ctx.days)
        .map(|day_number| synthesize_day(day_number, ctx, rng))
        .collect()
}

/// Parse raw plan text into exactly `ctx.days` days of `ctx.meals_per_day` meals.
///
/// Never fails. Short input is replaced wholesale by a synthesized plan; days
/// without a header in the text are synthesized individually.
pub fn parse_plan<R: Rng + ?Sized>(text: &str, ctx: &ParseContext, rng: &mut R) -> ParseOutcome {
    let mut diagnostics = Diagnostics::new();
    let text = normalize_text(text);
    let length = text.chars().count();

    if length < MIN_USABLE_TEXT_LEN {
        warn!(
            "Plan text too short ({length} chars, need {MIN_USABLE_TEXT_LEN}); synthesizing {} days",
            ctx.days
        );
        diagnostics.record(Fallback::UnusableInput { length });
        return ParseOutcome {
            plan: synthesize_plan(ctx, rng),
            diagnostics,
        };
    }

    let offsets = day_header_offsets(&text);
    info!(
        "Found {} day headers for {} requested days",
        offsets.len(),
        ctx.days
    );

    let mut plan = ParsedPlan::with_capacity(ctx.days as usize);
    for (i, day_number) in (1..=ctx.days).enumerate() {
        let day = match offsets.get(i) {
            Some(&start) => {
                let end = offsets.get(i + 1).copied().unwrap_or(text.len());
                parse_day(&text[start..end], day_number, ctx, rng, &mut diagnostics)
            }
            None => {
                diagnostics.at_day(day_number);
                diagnostics.record(Fallback::SynthesizedDay);
                synthesize_day(day_number, ctx, rng)
            }
        };
        plan.push(day);
    }

    while plan.len() < ctx.days as usize {
        let day_number = plan.len() as u32 + 1;
        diagnostics.at_day(day_number);
        diagnostics.record(Fallback::SynthesizedDay);
        plan.push(synthesize_day(day_number, ctx, rng));
    }

    info!(
        "Parsed {} days with {} fallbacks",
        plan.len(),
        diagnostics.len()
    );

    ParseOutcome { plan, diagnostics }
}
