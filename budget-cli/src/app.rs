//! Glue between the command line and the engines.

use std::path::Path;

use anyhow::{Context, Result};
use budget_core::calculations::{check_affordability, net_worth};
use budget_core::{Period, RentRule, TaxEngine};
use budget_data::BracketTableLoader;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::budget_file::BudgetFile;
use crate::report;

/// Built-in tables, optionally overridden from a bracket CSV.
pub fn build_tax_engine(brackets: Option<&Path>) -> Result<TaxEngine> {
    match brackets {
        Some(path) => {
            info!("loading bracket tables from {}", path.display());
            BracketTableLoader::load_engine_from_path(path)
                .with_context(|| format!("Failed to load bracket tables: {}", path.display()))
        }
        None => {
            debug!("using built-in bracket tables");
            Ok(TaxEngine::default())
        }
    }
}

pub fn tax_report(
    engine: &TaxEngine,
    gross: Decimal,
    period: Period,
) -> String {
    report::render_tax(&engine.compute_tax(gross), period)
}

pub fn rent_report(
    gross: Decimal,
    rent: Decimal,
    rule: RentRule,
) -> String {
    report::render_affordability(&check_affordability(Some(gross), Some(rent), rule), rule)
}

/// Loads a budget sheet and renders the full plan, plus net worth when the
/// sheet lists any accounts.
pub fn plan_report(
    engine: TaxEngine,
    path: &Path,
) -> Result<String> {
    let file = BudgetFile::load(path)
        .with_context(|| format!("Failed to load budget sheet: {}", path.display()))?;
    info!(expenses = file.expenses.len(), "loaded budget sheet");

    let assets = file.assets();
    let liabilities = file.liabilities();
    let state = file.into_state(engine);

    let mut out = report::render_plan(&state);
    if !assets.is_empty() || !liabilities.is_empty() {
        out.push('\n');
        out.push_str(&report::render_net_worth(&net_worth(&assets, &liabilities)));
        out.push('\n');
    }
    Ok(out)
}
