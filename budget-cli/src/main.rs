use std::path::PathBuf;

use anyhow::Result;
use budget_cli::{app, logging, utils::parse_decimal};
use budget_core::{Period, RentRule};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Take-home pay and budget planner.
///
/// Computes net income through federal, state and local brackets, checks a
/// rent against the 30x/40x income rule, and reconciles a budget sheet.
#[derive(Debug, Parser)]
#[command(name = "budget", version, about)]
struct Cli {
    /// CSV file (jurisdiction,upper_bound,rate) replacing built-in bracket tables.
    #[arg(long, global = true)]
    brackets: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `budget_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Do not print log output to the terminal.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the tax breakdown and take-home pay for a gross annual salary.
    Tax {
        #[arg(value_parser = parse_decimal)]
        gross: Decimal,

        /// Show take-home pay per month.
        #[arg(long)]
        monthly: bool,
    },

    /// Check a monthly rent against the income rule.
    Rent {
        #[arg(value_parser = parse_decimal)]
        gross: Decimal,

        #[arg(value_parser = parse_decimal)]
        rent: Decimal,

        /// Use the 40x rule instead of 30x.
        #[arg(long)]
        forty: bool,
    },

    /// Reconcile a TOML budget sheet and print the plan.
    Plan { file: PathBuf },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?cli, "starting");

    let engine = app::build_tax_engine(cli.brackets.as_deref())?;

    let output = match cli.command {
        Command::Tax { gross, monthly } => {
            app::tax_report(&engine, gross, Period::from_monthly(monthly))
        }
        Command::Rent { gross, rent, forty } => {
            let rule = if forty { RentRule::FortyX } else { RentRule::ThirtyX };
            app::rent_report(gross, rent, rule)
        }
        Command::Plan { file } => app::plan_report(engine, &file)?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
