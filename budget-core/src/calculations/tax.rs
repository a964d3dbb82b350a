//! Progressive take-home pay calculation.
//!
//! Gross annual income is taxed independently by three jurisdictions and the
//! three amounts are summed. Within a jurisdiction, brackets are walked from
//! the lowest layer up:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | `remaining = gross`, `tax = 0` |
//! | 2    | If `remaining` exceeds the layer width, tax the whole layer and subtract it |
//! | 3    | Otherwise tax what is left at the layer's rate and stop |
//!
//! No rounding happens here; results are carried at full decimal precision.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::TaxEngine;
//!
//! let result = TaxEngine::default().compute_tax(dec!(100000));
//!
//! assert_eq!(result.federal_tax, dec!(16207.50));
//! assert_eq!(result.total_tax, dec!(25382.14));
//! assert_eq!(result.net_income, dec!(74617.86));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::brackets::default_table;
use crate::models::{Bracket, Jurisdiction, JurisdictionTable, TaxResult};

/// Computes tax for the three jurisdictions from their bracket tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxEngine {
    federal: JurisdictionTable,
    state: JurisdictionTable,
    local: JurisdictionTable,
}

impl Default for TaxEngine {
    /// Engine using the built-in federal, New York State and New York City tables.
    fn default() -> Self {
        Self {
            federal: default_table(Jurisdiction::Federal),
            state: default_table(Jurisdiction::State),
            local: default_table(Jurisdiction::Local),
        }
    }
}

impl TaxEngine {
    pub fn new(
        federal: JurisdictionTable,
        state: JurisdictionTable,
        local: JurisdictionTable,
    ) -> Self {
        Self {
            federal,
            state,
            local,
        }
    }

    /// Replaces the table for the jurisdiction the given table belongs to.
    pub fn with_table(
        mut self,
        table: JurisdictionTable,
    ) -> Self {
        match table.jurisdiction() {
            Jurisdiction::Federal => self.federal = table,
            Jurisdiction::State => self.state = table,
            Jurisdiction::Local => self.local = table,
        }
        self
    }

    pub fn table(
        &self,
        jurisdiction: Jurisdiction,
    ) -> &JurisdictionTable {
        match jurisdiction {
            Jurisdiction::Federal => &self.federal,
            Jurisdiction::State => &self.state,
            Jurisdiction::Local => &self.local,
        }
    }

    /// Converts gross annual income to net annual income.
    ///
    /// Non-positive income yields [`TaxResult::ZERO`].
    pub fn compute_tax(
        &self,
        gross_annual_income: Decimal,
    ) -> TaxResult {
        if gross_annual_income <= Decimal::ZERO {
            debug!(%gross_annual_income, "non-positive income, no tax");
            return TaxResult::ZERO;
        }

        let federal_tax = tax_for_brackets(gross_annual_income, self.federal.brackets());
        let state_tax = tax_for_brackets(gross_annual_income, self.state.brackets());
        let local_tax = tax_for_brackets(gross_annual_income, self.local.brackets());
        let total_tax = federal_tax
            .saturating_add(state_tax)
            .saturating_add(local_tax);

        debug!(
            %gross_annual_income,
            %federal_tax,
            %state_tax,
            %local_tax,
            %total_tax,
            "computed tax"
        );

        TaxResult {
            gross_income: gross_annual_income,
            federal_tax,
            state_tax,
            local_tax,
            total_tax,
            net_income: gross_annual_income - total_tax,
        }
    }
}

/// Computes tax with the built-in tables.
pub fn compute_tax(gross_annual_income: Decimal) -> TaxResult {
    TaxEngine::default().compute_tax(gross_annual_income)
}

/// Tax owed on `income` under a single table of per-layer widths.
pub fn tax_for_brackets(
    income: Decimal,
    brackets: &[Bracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut remaining = income;

    for bracket in brackets {
        match bracket.upper_bound {
            Some(width) if remaining > width => {
                tax += width * bracket.rate;
                remaining -= width;
            }
            _ => {
                tax += remaining * bracket.rate;
                break;
            }
        }
    }

    tax
}
