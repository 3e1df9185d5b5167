//! Commission Calculator CLI
//!
//! Flags fall back to environment variables, then to the form defaults.

use anyhow::Context;
use clap::Parser;
use commission_calculator::{
    api::{calculate, CalculateRequest, DEFAULT_CURRENCY_SYMBOL},
    deal::{
        SELECTABLE_DURATIONS, DEFAULT_DEAL_DURATION, DEFAULT_DEAL_SIZE, DEFAULT_YEARLY_BONUS,
        DEFAULT_YEARLY_TARGET,
    },
    display::format_whole_amount,
    CommissionEngine, DurationMultipliers,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "commission_calculator", version, about = "Calculate your commission based on deal parameters and targets")]
struct Args {
    /// Total deal value
    #[arg(long, env = "DEAL_SIZE", default_value_t = DEFAULT_DEAL_SIZE, allow_negative_numbers = true)]
    deal_size: f64,

    /// Deal duration in years (1-5)
    #[arg(long, env = "DEAL_DURATION", default_value_t = DEFAULT_DEAL_DURATION, allow_negative_numbers = true)]
    deal_duration: i64,

    /// Yearly target
    #[arg(long, env = "YEARLY_TARGET", default_value_t = DEFAULT_YEARLY_TARGET, allow_negative_numbers = true)]
    yearly_target: f64,

    /// Yearly bonus
    #[arg(long, env = "YEARLY_BONUS", default_value_t = DEFAULT_YEARLY_BONUS, allow_negative_numbers = true)]
    yearly_bonus: f64,

    /// Currency symbol for display
    #[arg(long, env = "CURRENCY_SYMBOL", default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency_symbol: String,

    /// CSV file (duration,multiplier) replacing the built-in multiplier table
    #[arg(long, env = "DURATION_MULTIPLIERS_PATH")]
    multipliers: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let succeeded = run(&args, &mut std::io::stdout(), &mut std::io::stderr())?;
    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Run one calculation. Returns `false` when the inputs were rejected
/// (message written to `err`); start-up and I/O failures are errors.
fn run(args: &Args, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<bool> {
    let multipliers = match &args.multipliers {
        Some(path) => DurationMultipliers::from_csv_path(path)
            .with_context(|| format!("Failed to load multipliers from {}", path.display()))?,
        None => DurationMultipliers::default(),
    };
    multipliers.warn_unpaid(&SELECTABLE_DURATIONS);
    let engine = CommissionEngine::with_multipliers(multipliers);

    let request = CalculateRequest {
        deal_size: args.deal_size,
        deal_duration: args.deal_duration,
        yearly_target: args.yearly_target,
        yearly_bonus: args.yearly_bonus,
        currency_symbol: args.currency_symbol.clone(),
    };

    // Form rules are checked before the engine runs, overflow after
    let response = match calculate(&engine, &request) {
        Ok(r) => r,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(false);
        }
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        return Ok(true);
    }

    let symbol = &args.currency_symbol;
    writeln!(out, "Commission Calculator")?;
    writeln!(out, "=====================\n")?;

    writeln!(out, "Deal Information")?;
    writeln!(out, "  Deal Size:      {}", format_whole_amount(symbol, request.deal_size))?;
    writeln!(out, "  Deal Duration:  {} year(s)", request.deal_duration)?;
    writeln!(out, "Target Information")?;
    writeln!(out, "  Yearly Target:  {}", format_whole_amount(symbol, request.yearly_target))?;
    writeln!(out, "  Yearly Bonus:   {}", format_whole_amount(symbol, request.yearly_bonus))?;
    writeln!(out)?;

    writeln!(out, "Results")?;
    writeln!(out, "{:>20} {:>20} {:>20}", "Base Rate", "Duration Multiplier", "Commission")?;
    writeln!(out, "{}", "-".repeat(62))?;
    writeln!(
        out,
        "{:>20} {:>20} {:>20}",
        response.display.base_rate, response.display.duration_multiplier, response.display.commission
    )?;
    writeln!(out)?;

    writeln!(out, "Calculation Breakdown")?;
    for line in &response.breakdown {
        writeln!(out, "  {}", line)?;
    }

    Ok(true)
}
