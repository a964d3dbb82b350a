pub mod calculations;
pub mod models;

pub use calculations::{AllocationEngine, TaxEngine};
pub use models::*;
