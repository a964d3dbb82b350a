use rust_decimal::Decimal;

use super::LineItem;

/// Snapshot of a budget: the items in insertion order, their combined
/// monthly cost (rent included), and the monthly rent on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSummary {
    pub items: Vec<LineItem>,
    pub total_monthly_expense: Decimal,
    pub rent_amount: Decimal,
}

/// One labelled slice of the monthly expense chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownSlice {
    pub label: String,
    pub value: Decimal,
    pub color: &'static str,
}
