//! Budget line item reconciliation and expense totals.
//!
//! Every line item carries both a monetary amount (in its own period) and the
//! share of net annual income that amount represents. Whichever field the user
//! edits drives the other:
//!
//! - amount edited: `percentage = annual(amount) / net * 100`
//! - percentage edited: `amount = period(percentage / 100 * net)`
//! - period toggled: the amount is converted, the percentage is left alone
//!
//! Derived values are rounded to two decimal places. Input that is missing,
//! non-positive or would overflow clears the derived field instead of failing.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::calculations::common::{months_per_year, positive, round_half_up};
use crate::models::{AllocationSummary, BreakdownSlice, LineItem, LineItemEdit};

/// Chart colours, assigned to breakdown slices by position and reused cyclically.
pub const PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#36A2EB",
    "#FFCE56", "#4BC0C0",
];

/// Label used for the rent slice of the breakdown.
pub const RENT_LABEL: &str = "Rent";

/// Label used for items the user has not named yet.
pub const UNNAMED_LABEL: &str = "Unnamed Expense";

/// Reconciles line items against a fixed net annual income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationEngine {
    net_annual_income: Decimal,
}

impl AllocationEngine {
    pub fn new(net_annual_income: Decimal) -> Self {
        Self { net_annual_income }
    }

    pub fn net_annual_income(&self) -> Decimal {
        self.net_annual_income
    }

    /// Applies a single field edit and derives the dependent field.
    pub fn reconcile(
        &self,
        item: &LineItem,
        edit: LineItemEdit,
    ) -> LineItem {
        let mut updated = item.clone();

        match edit {
            LineItemEdit::Name(name) => updated.name = name,
            LineItemEdit::Amount(amount) => {
                updated.amount = amount;
                updated.percentage = self.percentage_for(amount, updated.is_monthly);
            }
            LineItemEdit::Percentage(percentage) => {
                updated.percentage = percentage;
                updated.amount = self.amount_for(percentage, updated.is_monthly);
            }
            LineItemEdit::IsMonthly(to_monthly) => {
                updated.is_monthly = to_monthly;
                updated.amount = toggle_period(updated.amount, to_monthly);
            }
        }

        trace!(id = updated.id, ?updated, "reconciled line item");
        updated
    }

    /// Called when net income changes.
    ///
    /// Derived fields are left as they were until the next edit of each item;
    /// use [`AllocationEngine::resynchronize`] to re-derive them.
    pub fn recompute_on_income_change(
        &self,
        items: &[LineItem],
    ) -> Vec<LineItem> {
        debug!(
            net_annual_income = %self.net_annual_income,
            items = items.len(),
            "net income changed, derived fields left stale"
        );
        items.to_vec()
    }

    /// Re-derives every item against the current net income.
    ///
    /// Items with a valid amount get a fresh percentage. Items with only a
    /// valid percentage get a fresh amount. Anything else is returned as is.
    pub fn resynchronize(
        &self,
        items: &[LineItem],
    ) -> Vec<LineItem> {
        items
            .iter()
            .map(|item| {
                if positive(item.amount).is_some() {
                    self.reconcile(item, LineItemEdit::Amount(item.amount))
                } else if positive(item.percentage).is_some() {
                    self.reconcile(item, LineItemEdit::Percentage(item.percentage))
                } else {
                    item.clone()
                }
            })
            .collect()
    }

    fn percentage_for(
        &self,
        amount: Option<Decimal>,
        is_monthly: bool,
    ) -> Option<Decimal> {
        let amount = positive(amount)?;
        let net = positive(Some(self.net_annual_income))?;

        let annual = if is_monthly {
            amount.checked_mul(months_per_year())?
        } else {
            amount
        };
        let percentage = annual
            .checked_div(net)?
            .checked_mul(Decimal::ONE_HUNDRED)?;

        Some(round_half_up(percentage))
    }

    fn amount_for(
        &self,
        percentage: Option<Decimal>,
        is_monthly: bool,
    ) -> Option<Decimal> {
        let percentage = positive(percentage)?;
        let net = positive(Some(self.net_annual_income))?;

        let annual = (percentage / Decimal::ONE_HUNDRED).checked_mul(net)?;
        let amount = if is_monthly {
            annual / months_per_year()
        } else {
            annual
        };

        Some(round_half_up(amount))
    }
}

/// Converts an amount when the periodicity flag is toggled.
///
/// Switching *to* monthly multiplies by 12 and switching to annual divides by
/// 12. Missing or non-positive amounts, and conversions that would overflow,
/// are returned unchanged.
pub fn toggle_period(
    amount: Option<Decimal>,
    to_monthly: bool,
) -> Option<Decimal> {
    let Some(value) = positive(amount) else {
        return amount;
    };

    let converted = if to_monthly {
        value.checked_mul(months_per_year())
    } else {
        value.checked_div(months_per_year())
    };

    match converted {
        Some(converted) => Some(round_half_up(converted)),
        None => amount,
    }
}

/// Sum of every item's monthly amount plus the monthly rent.
pub fn total_monthly_expense(
    items: &[LineItem],
    rent_monthly: Option<Decimal>,
) -> Decimal {
    items
        .iter()
        .map(LineItem::monthly_amount)
        .fold(rent_monthly.unwrap_or_default(), Decimal::saturating_add)
}

/// Chart-ready monthly breakdown: rent first (when positive), then each item
/// in insertion order.
pub fn build_breakdown(
    items: &[LineItem],
    rent_monthly: Option<Decimal>,
) -> Vec<BreakdownSlice> {
    let rent = positive(rent_monthly).map(|rent| (RENT_LABEL.to_string(), rent));
    let expenses = items.iter().map(|item| {
        let label = if item.name.is_empty() {
            UNNAMED_LABEL.to_string()
        } else {
            item.name.clone()
        };
        (label, item.monthly_amount())
    });

    rent.into_iter()
        .chain(expenses)
        .enumerate()
        .map(|(index, (label, value))| BreakdownSlice {
            label,
            value,
            color: palette_color(index),
        })
        .collect()
}

/// Colour for the slice at `index`.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Bundles items with their monthly total and the rent.
pub fn summarize(
    items: Vec<LineItem>,
    rent_monthly: Option<Decimal>,
) -> AllocationSummary {
    let total_monthly_expense = total_monthly_expense(&items, rent_monthly);
    AllocationSummary {
        items,
        total_monthly_expense,
        rent_amount: rent_monthly.unwrap_or_default(),
    }
}
