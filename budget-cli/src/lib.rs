pub mod app;
pub mod budget_file;
pub mod logging;
pub mod report;
pub mod state;
pub mod utils;

pub use budget_file::{BudgetFile, BudgetFileError};
pub use state::{BudgetState, IncomeChangePolicy};
