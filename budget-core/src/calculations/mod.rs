//! Calculation engines for take-home pay and budget allocation.
//!
//! [`TaxEngine`] turns a gross annual income into net income using layered
//! progressive brackets for three jurisdictions. [`AllocationEngine`] keeps
//! each budget line item's amount and percentage-of-income consistent and
//! derives totals and chart data from them.

pub mod affordability;
pub mod allocation;
pub mod brackets;
pub mod common;
pub mod net_worth;
pub mod tax;

pub use affordability::check_affordability;
pub use allocation::{AllocationEngine, build_breakdown, summarize, total_monthly_expense};
pub use net_worth::net_worth;
pub use tax::{TaxEngine, compute_tax, tax_for_brackets};
