pub mod holding;
pub mod quote;
pub mod transaction;
pub mod valuation;

pub use holding::{Holding, HoldingKind};
pub use quote::Quote;
pub use transaction::{Transaction, TransactionKind};
pub use valuation::{HoldingValuation, PortfolioValuation};
