//! Built-in bracket tables: US federal, New York State and New York City.
//!
//! Each entry is the *width* of an income layer and the marginal rate applied
//! to it, listed from the lowest layer up. The last layer of every table is
//! unbounded.

use rust_decimal_macros::dec;

use crate::models::{Bracket, Jurisdiction, JurisdictionTable};

pub const FEDERAL_BRACKETS: &[Bracket] = &[
    Bracket::new(dec!(11000), dec!(0.10)),
    Bracket::new(dec!(44725), dec!(0.12)),
    Bracket::new(dec!(95375), dec!(0.22)),
    Bracket::new(dec!(182100), dec!(0.24)),
    Bracket::new(dec!(231250), dec!(0.32)),
    Bracket::new(dec!(578125), dec!(0.35)),
    Bracket::unbounded(dec!(0.37)),
];

pub const STATE_BRACKETS: &[Bracket] = &[
    Bracket::new(dec!(8500), dec!(0.04)),
    Bracket::new(dec!(11700), dec!(0.045)),
    Bracket::new(dec!(13900), dec!(0.0525)),
    Bracket::new(dec!(80650), dec!(0.0585)),
    Bracket::new(dec!(215400), dec!(0.0625)),
    Bracket::new(dec!(1077550), dec!(0.0685)),
    Bracket::new(dec!(5000000), dec!(0.0965)),
    Bracket::new(dec!(25000000), dec!(0.103)),
    Bracket::unbounded(dec!(0.109)),
];

pub const LOCAL_BRACKETS: &[Bracket] = &[
    Bracket::new(dec!(12000), dec!(0.03078)),
    Bracket::new(dec!(25000), dec!(0.03762)),
    Bracket::new(dec!(50000), dec!(0.03819)),
    Bracket::unbounded(dec!(0.03876)),
];

/// Built-in table for a jurisdiction.
pub fn default_table(jurisdiction: Jurisdiction) -> JurisdictionTable {
    let brackets = match jurisdiction {
        Jurisdiction::Federal => FEDERAL_BRACKETS,
        Jurisdiction::State => STATE_BRACKETS,
        Jurisdiction::Local => LOCAL_BRACKETS,
    };
    match JurisdictionTable::new(jurisdiction, brackets) {
        Ok(table) => table,
        // The built-in tables are covered by `built_in_tables_are_valid`.
        Err(error) => unreachable!("built-in {jurisdiction} table is invalid: {error}"),
    }
}
