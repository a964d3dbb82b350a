//! TOML budget sheet.
//!
//! ```toml
//! gross_income = 100000
//! monthly_rent = 2000
//! rent_rule = "40x"          # or "30x" (default)
//! show_monthly = true        # show take-home pay per month
//! resync_on_income_change = false
//!
//! [[expenses]]
//! name = "Groceries"
//! amount = 450               # in the item's own period
//! monthly = true             # default
//!
//! [[expenses]]
//! name = "Vacation"
//! percentage = 3             # of net annual income
//! monthly = false
//!
//! [[assets]]
//! name = "Checking"
//! value = 5200
//!
//! [[liabilities]]
//! name = "Card"
//! value = 800
//! ```
//!
//! Amounts may be written as TOML numbers or as strings (`"1,250.00"`).

use std::path::Path;

use budget_core::{Account, LineItemEdit, Period, RentRule, TaxEngine};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::warn;

use crate::state::{BudgetState, IncomeChangePolicy};
use crate::utils::parse_amount;

#[derive(Debug, Error)]
pub enum BudgetFileError {
    #[error("cannot read budget file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid budget file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetFile {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub gross_income: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub monthly_rent: Option<Decimal>,
    #[serde(default)]
    pub rent_rule: RentRule,
    #[serde(default)]
    pub show_monthly: bool,
    #[serde(default)]
    pub resync_on_income_change: bool,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub assets: Vec<AccountEntry>,
    #[serde(default)]
    pub liabilities: Vec<AccountEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub percentage: Option<Decimal>,
    #[serde(default = "default_monthly")]
    pub monthly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountEntry {
    pub name: String,
    #[serde(deserialize_with = "strict_amount")]
    pub value: Decimal,
}

fn default_monthly() -> bool {
    true
}

/// Numbers or strings; strings that do not parse become `None`, like a
/// half-typed form field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    fn into_decimal(self) -> Option<Decimal> {
        match self {
            Self::Integer(value) => Some(Decimal::from(value)),
            Self::Float(value) => parse_amount(&value.to_string()),
            Self::Text(text) => parse_amount(&text),
        }
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(raw.and_then(RawAmount::into_decimal))
}

fn strict_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?
        .into_decimal()
        .ok_or_else(|| serde::de::Error::custom("expected a decimal amount"))
}

impl BudgetFile {
    pub fn parse(input: &str) -> Result<Self, BudgetFileError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, BudgetFileError> {
        let input = std::fs::read_to_string(path).map_err(|source| BudgetFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&input)
    }

    /// Replays the sheet through the state reducers, the same way a user
    /// filling in the form would: income and rent first, then each expense
    /// row (name, period, then whichever of amount or percentage is given).
    pub fn into_state(
        self,
        tax_engine: TaxEngine,
    ) -> BudgetState {
        let policy = if self.resync_on_income_change {
            IncomeChangePolicy::Resynchronize
        } else {
            IncomeChangePolicy::KeepStale
        };
        let mut state = BudgetState::new(tax_engine).with_income_policy(policy);

        state.set_gross_income(self.gross_income);
        state.set_monthly_rent(self.monthly_rent);
        state.set_rent_rule(self.rent_rule);
        state.set_display_period(Period::from_monthly(self.show_monthly));

        for expense in self.expenses {
            let id = state.add_item();
            if !expense.monthly {
                // Rows start monthly and the new row has no amount yet, so
                // this only flips the flag.
                state.update_item(id, LineItemEdit::IsMonthly(false));
            }
            if !expense.name.is_empty() {
                state.update_item(id, LineItemEdit::Name(expense.name.clone()));
            }
            match (expense.amount, expense.percentage) {
                (Some(amount), percentage) => {
                    if percentage.is_some() {
                        warn!(name = %expense.name, "both amount and percentage given, amount wins");
                    }
                    state.update_item(id, LineItemEdit::Amount(Some(amount)));
                }
                (None, Some(percentage)) => {
                    state.update_item(id, LineItemEdit::Percentage(Some(percentage)));
                }
                (None, None) => {}
            }
        }

        state
    }

    pub fn assets(&self) -> Vec<Account> {
        to_accounts(&self.assets)
    }

    pub fn liabilities(&self) -> Vec<Account> {
        to_accounts(&self.liabilities)
    }
}

fn to_accounts(entries: &[AccountEntry]) -> Vec<Account> {
    entries
        .iter()
        .map(|entry| Account::new(entry.name.clone(), entry.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const SHEET: &str = r#"
gross_income = 100000
monthly_rent = "2,000"
rent_rule = "40x"
show_monthly = true

[[expenses]]
name = "Groceries"
amount = 450

[[expenses]]
name = "Vacation"
percentage = 3
monthly = false

[[expenses]]
amount = "n/a"
"#;

    #[test]
    fn parse_reads_all_fields() {
        let file = BudgetFile::parse(SHEET).unwrap();

        assert_eq!(file.gross_income, Some(dec!(100000)));
        assert_eq!(file.monthly_rent, Some(dec!(2000)));
        assert_eq!(file.rent_rule, RentRule::FortyX);
        assert!(file.show_monthly);
        assert_eq!(file.expenses.len(), 3);
        assert!(file.expenses[0].monthly);
        assert!(!file.expenses[1].monthly);
        assert_eq!(file.expenses[1].percentage, Some(dec!(3)));
    }

    #[test]
    fn parse_empty_sheet_uses_defaults() {
        assert_eq!(BudgetFile::parse("").unwrap(), BudgetFile::default());
    }

    #[test]
    fn parse_treats_unparseable_amount_as_absent() {
        let file = BudgetFile::parse("gross_income = \"abc\"").unwrap();

        assert_eq!(file.gross_income, None);
    }

    #[test]
    fn parse_rejects_unknown_rule() {
        assert!(matches!(
            BudgetFile::parse("rent_rule = \"50x\""),
            Err(BudgetFileError::Toml(_))
        ));
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        assert!(BudgetFile::parse("salary = 5").is_err());
    }

    #[test]
    fn into_state_replays_rows_in_order() {
        let state = BudgetFile::parse(SHEET)
            .unwrap()
            .into_state(TaxEngine::default());
        let items = state.items();

        assert_eq!(state.tax().net_income, dec!(74617.86));
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].name, "Groceries");
        // 450 * 12 / 74617.86 * 100 = 7.2369...
        assert_eq!(items[0].percentage, Some(dec!(7.24)));

        assert_eq!(items[1].name, "Vacation");
        assert!(!items[1].is_monthly);
        // 0.03 * 74617.86 = 2238.5358
        assert_eq!(items[1].amount, Some(dec!(2238.54)));

        assert_eq!(items[2].amount, None);
        assert_eq!(items[2].percentage, None);
        assert_eq!(items[2].name, "");
    }

    #[test]
    fn accounts_convert_to_core_type() {
        let file = BudgetFile::parse(
            "[[assets]]\nname = \"Checking\"\nvalue = 5200\n\n[[liabilities]]\nname = \"Card\"\nvalue = \"800.50\"\n",
        )
        .unwrap();

        assert_eq!(file.assets(), vec![Account::new("Checking", dec!(5200))]);
        assert_eq!(file.liabilities(), vec![Account::new("Card", dec!(800.50))]);
    }
}
