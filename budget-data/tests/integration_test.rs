//! Integration tests that load bracket tables from the on-disk fixtures.

use std::path::{Path, PathBuf};

use budget_core::{Jurisdiction, TaxEngine};
use budget_data::{BracketTableLoader, BracketTableLoaderError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const NYC_CSV: &str = include_str!("../test-data/nyc_brackets.csv");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn test_nyc_fixture_matches_built_in_tables() {
    let records = BracketTableLoader::parse(NYC_CSV.as_bytes()).expect("Failed to parse CSV");
    assert_eq!(records.len(), 20);

    let engine = BracketTableLoader::load_engine(&records).expect("Failed to build engine");

    assert_eq!(engine, TaxEngine::default());
}

#[test]
fn test_nyc_fixture_computes_expected_tax() {
    let engine = BracketTableLoader::load_engine_from_path(&fixture("nyc_brackets.csv"))
        .expect("Failed to load fixture");

    let result = engine.compute_tax(dec!(100000));

    assert_eq!(result.total_tax, dec!(25382.14));
    assert_eq!(result.net_income, dec!(74617.86));
}

#[test]
fn test_partial_fixture_overrides_one_jurisdiction() {
    let engine = BracketTableLoader::load_engine_from_path(&fixture("flat_local.csv"))
        .expect("Failed to load fixture");

    assert_eq!(engine.table(Jurisdiction::Local).brackets().len(), 1);
    assert_eq!(
        engine.table(Jurisdiction::Federal),
        TaxEngine::default().table(Jurisdiction::Federal)
    );
    assert_eq!(engine.compute_tax(dec!(100000)).local_tax, dec!(5000.00));
}

#[test]
fn test_missing_file_reports_path() {
    let result = BracketTableLoader::load_engine_from_path(&fixture("does_not_exist.csv"));

    match result {
        Err(BracketTableLoaderError::Io { path, .. }) => {
            assert!(path.ends_with("does_not_exist.csv"));
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}
