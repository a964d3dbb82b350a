use std::path::Path;

use budget_cli::app;
use budget_cli::{BudgetFile, BudgetFileError};
use budget_core::TaxEngine;
use budget_data::BracketTableLoader;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn load_sample_budget_builds_state() {
    let file = BudgetFile::load(&fixture_path("sample_budget.toml")).unwrap();
    let state = file.into_state(TaxEngine::default());

    assert_eq!(state.gross_income(), Some(dec!(100000)));
    assert_eq!(state.tax().net_income, dec!(74617.86));
    assert!(state.affordability().is_valid);

    let items = state.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].percentage, Some(dec!(7.24)));
    // 0.01 * 74617.86
    assert_eq!(items[1].amount, Some(dec!(746.18)));

    // 2000 + 450 + 746.18 / 12 = 2512.18166...
    assert_eq!(
        state.summary().total_monthly_expense.round_dp(2),
        dec!(2512.18)
    );
}

#[test]
fn load_missing_budget_returns_io_error() {
    let err = BudgetFile::load(&fixture_path("does_not_exist.toml")).unwrap_err();

    assert!(matches!(err, BudgetFileError::Io { .. }));
}

#[test]
fn plan_report_renders_plan_and_net_worth() {
    let report =
        app::plan_report(TaxEngine::default(), &fixture_path("sample_budget.toml")).unwrap();

    assert!(report.contains("Estimated Annual Take Home Pay: $74617.86"));
    assert!(report.contains("Your income satisfies the 30x rule"));
    assert!(report.contains("Groceries"));
    assert!(report.contains("Assets: $5200.00  Liabilities: $800.50  Net Worth: $4399.50"));
}

#[test]
fn bracket_override_changes_plan_income() {
    let brackets = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("budget-data")
        .join("test-data")
        .join("flat_local.csv");
    let engine = BracketTableLoader::load_engine_from_path(&brackets).unwrap();

    let state = BudgetFile::load(&fixture_path("sample_budget.toml"))
        .unwrap()
        .into_state(engine);

    // Local becomes a flat 5% of 100000.
    assert_eq!(state.tax().local_tax, dec!(5000));
    assert_eq!(state.tax().federal_tax, dec!(16207.50));
}

#[test]
fn build_tax_engine_without_override_uses_defaults() {
    let engine = app::build_tax_engine(None).unwrap();

    assert_eq!(engine.compute_tax(dec!(10000)).net_income, dec!(8284.70));
}
