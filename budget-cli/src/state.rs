//! Caller-owned budget state.
//!
//! The engines in `budget_core` are pure; this module holds everything the
//! user has entered and applies each change through them. Every reducer takes
//! `&mut self`, so callers decide when to re-render.

use budget_core::calculations::{build_breakdown, check_affordability, summarize};
use budget_core::{
    AffordabilityCheck, AllocationEngine, AllocationSummary, BreakdownSlice, LineItem,
    LineItemEdit, Period, RentRule, TaxEngine, TaxResult,
};
use rust_decimal::Decimal;
use tracing::debug;

/// What happens to line items when net income changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeChangePolicy {
    /// Leave derived fields as they were until each item is edited again.
    #[default]
    KeepStale,
    /// Re-derive every item against the new net income.
    Resynchronize,
}

#[derive(Debug, Clone)]
pub struct BudgetState {
    tax_engine: TaxEngine,
    income_policy: IncomeChangePolicy,

    gross_income: Option<Decimal>,
    tax: TaxResult,
    monthly_rent: Option<Decimal>,
    rent_rule: RentRule,
    display_period: Period,

    items: Vec<LineItem>,
    next_item_id: u64,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new(TaxEngine::default())
    }
}

impl BudgetState {
    pub fn new(tax_engine: TaxEngine) -> Self {
        Self {
            tax_engine,
            income_policy: IncomeChangePolicy::default(),
            gross_income: None,
            tax: TaxResult::ZERO,
            monthly_rent: None,
            rent_rule: RentRule::default(),
            display_period: Period::Annual,
            items: Vec::new(),
            next_item_id: 1,
        }
    }

    pub fn with_income_policy(
        mut self,
        policy: IncomeChangePolicy,
    ) -> Self {
        self.income_policy = policy;
        self
    }

    // --- Reducers ---

    /// Records a new gross income, recomputes take-home pay and applies the
    /// income change policy to the line items.
    pub fn set_gross_income(
        &mut self,
        gross_income: Option<Decimal>,
    ) {
        self.gross_income = gross_income;
        self.tax = match gross_income {
            Some(gross) if gross > Decimal::ZERO => self.tax_engine.compute_tax(gross),
            _ => TaxResult::ZERO,
        };

        let engine = self.allocation_engine();
        self.items = match self.income_policy {
            IncomeChangePolicy::KeepStale => engine.recompute_on_income_change(&self.items),
            IncomeChangePolicy::Resynchronize => engine.resynchronize(&self.items),
        };
        debug!(net_income = %self.tax.net_income, "take-home pay updated");
    }

    pub fn set_monthly_rent(
        &mut self,
        monthly_rent: Option<Decimal>,
    ) {
        self.monthly_rent = monthly_rent;
    }

    pub fn set_rent_rule(
        &mut self,
        rule: RentRule,
    ) {
        self.rent_rule = rule;
    }

    pub fn set_display_period(
        &mut self,
        period: Period,
    ) {
        self.display_period = period;
    }

    /// Appends an empty monthly row and returns its id.
    pub fn add_item(&mut self) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(LineItem::new(id));
        id
    }

    /// Applies an edit to the item with `id`. Returns `false` if there is no such item.
    pub fn update_item(
        &mut self,
        id: u64,
        edit: LineItemEdit,
    ) -> bool {
        let engine = self.allocation_engine();
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = engine.reconcile(item, edit);
                true
            }
            None => {
                debug!(id, "edit for unknown line item ignored");
                false
            }
        }
    }

    /// Removes the item with `id`. Returns `false` if there is no such item.
    pub fn remove_item(
        &mut self,
        id: u64,
    ) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    // --- Derived views ---

    pub fn gross_income(&self) -> Option<Decimal> {
        self.gross_income
    }

    pub fn tax(&self) -> &TaxResult {
        &self.tax
    }

    pub fn monthly_rent(&self) -> Option<Decimal> {
        self.monthly_rent
    }

    pub fn rent_rule(&self) -> RentRule {
        self.rent_rule
    }

    pub fn display_period(&self) -> Period {
        self.display_period
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Take-home pay in the selected display period.
    pub fn take_home_pay(&self) -> Decimal {
        self.display_period.scale_annual(self.tax.net_income)
    }

    pub fn affordability(&self) -> AffordabilityCheck {
        check_affordability(self.gross_income, self.monthly_rent, self.rent_rule)
    }

    pub fn summary(&self) -> AllocationSummary {
        summarize(self.items.clone(), self.monthly_rent)
    }

    pub fn breakdown(&self) -> Vec<BreakdownSlice> {
        build_breakdown(&self.items, self.monthly_rent)
    }

    fn allocation_engine(&self) -> AllocationEngine {
        AllocationEngine::new(self.tax.net_income)
    }
}
