//! Read-only lookups the valuation engine depends on.
//!
//! Every call may fail (e.g. the backing storage is unavailable). The engine scopes such
//! failures to the top-level holding being valued, so implementations should simply
//! return the error instead of degrading to an empty result.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Holding, Transaction};

pub trait HoldingRepository: Send + Sync {
    /// Holdings owned directly by the investor. Fund members are not included.
    fn holdings_by_investor(&self, investor_id: &str) -> Result<Vec<Holding>>;

    /// Holdings whose fund membership points at `fund_holding_id`.
    fn holdings_by_fund(&self, fund_holding_id: &str) -> Result<Vec<Holding>>;
}

pub trait TransactionRepository: Send + Sync {
    /// All transactions of the holding dated on or before `as_of`, ascending by date.
    /// Transactions sharing a date keep their original relative order.
    fn transactions_by_holding(&self, holding_id: &str, as_of: NaiveDate)
    -> Result<Vec<Transaction>>;
}

pub trait QuoteRepository: Send + Sync {
    /// Price of the most recent quote on or before `as_of`, `None` if there is none.
    fn latest_quote(&self, instrument_id: &str, as_of: NaiveDate) -> Result<Option<Decimal>>;
}
