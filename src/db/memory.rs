use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    db::repository::{HoldingRepository, QuoteRepository, TransactionRepository},
    models::{Holding, Quote, Transaction},
};

/// Read-only snapshot of holdings, transactions and quotes held in memory.
///
/// Transactions and quotes are grouped by owner and sorted by date once at construction.
/// The sort is stable, so entries sharing a date keep their load order.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    holdings: Vec<Holding>,
    transactions: HashMap<String, Vec<Transaction>>,
    quotes: HashMap<String, Vec<Quote>>,
}

impl SnapshotStore {
    pub fn new(holdings: Vec<Holding>, transactions: Vec<Transaction>, quotes: Vec<Quote>) -> Self {
        let mut transactions_by_holding: HashMap<String, Vec<Transaction>> = HashMap::new();
        for transaction in transactions {
            transactions_by_holding
                .entry(transaction.holding_id().to_string())
                .or_default()
                .push(transaction);
        }
        for entries in transactions_by_holding.values_mut() {
            entries.sort_by_key(|t| *t.date());
        }

        let mut quotes_by_instrument: HashMap<String, Vec<Quote>> = HashMap::new();
        for quote in quotes {
            quotes_by_instrument
                .entry(quote.instrument_id().to_string())
                .or_default()
                .push(quote);
        }
        for entries in quotes_by_instrument.values_mut() {
            entries.sort_by_key(|q| *q.date());
        }

        Self {
            holdings,
            transactions: transactions_by_holding,
            quotes: quotes_by_instrument,
        }
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        &self.holdings
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.values().map(Vec::len).sum()
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.values().map(Vec::len).sum()
    }
}

impl HoldingRepository for SnapshotStore {
    fn holdings_by_investor(&self, investor_id: &str) -> Result<Vec<Holding>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.is_owned_by(investor_id))
            .cloned()
            .collect())
    }

    fn holdings_by_fund(&self, fund_holding_id: &str) -> Result<Vec<Holding>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.is_member_of(fund_holding_id))
            .cloned()
            .collect())
    }
}

impl TransactionRepository for SnapshotStore {
    fn transactions_by_holding(
        &self,
        holding_id: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let Some(transactions) = self.transactions.get(holding_id) else {
            return Ok(Vec::new());
        };

        Ok(transactions
            .iter()
            .take_while(|t| t.is_effective_on(as_of))
            .cloned()
            .collect())
    }
}

impl QuoteRepository for SnapshotStore {
    fn latest_quote(&self, instrument_id: &str, as_of: NaiveDate) -> Result<Option<Decimal>> {
        let Some(quotes) = self.quotes.get(instrument_id) else {
            return Ok(None);
        };

        let end = quotes.partition_point(|q| *q.date() <= as_of);
        if end == 0 {
            return Ok(None);
        }

        // Several quotes may share the latest date; the first one loaded wins.
        let latest_date = *quotes[end - 1].date();
        let first = quotes[..end].partition_point(|q| *q.date() < latest_date);

        Ok(Some(*quotes[first].price()))
    }
}
