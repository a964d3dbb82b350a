mod affordability;
mod allocation_summary;
mod jurisdiction;
mod line_item;
mod net_worth;
mod tax_result;

pub use affordability::{AffordabilityCheck, RentRule};
pub use allocation_summary::{AllocationSummary, BreakdownSlice};
pub use jurisdiction::{Bracket, BracketTableError, Jurisdiction, JurisdictionTable};
pub use line_item::{LineItem, LineItemEdit, Period};
pub use net_worth::{Account, NetWorth};
pub use tax_result::TaxResult;
