use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use derive_getters::Getters;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::{
    db::{
        memory::SnapshotStore,
        utils::{non_empty, parse_date, parse_decimal},
    },
    models::{Holding, HoldingKind, Quote, Transaction, TransactionKind},
};

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "PascalCase")]
pub struct HoldingRecord {
    investor_id: String,
    investment_id: String,
    investment_type: String,
    #[serde(rename = "ISIN", default)]
    isin: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    fund_investor: Option<String>,
}

impl HoldingRecord {
    pub fn into_holding(self) -> Result<Holding> {
        let holding_id = self.investment_id.trim().to_string();
        if holding_id.is_empty() {
            anyhow::bail!("Missing InvestmentId");
        }

        let kind = self
            .investment_type
            .trim()
            .parse::<HoldingKind>()
            .with_context(|| format!("Failed to parse investment type '{}'", self.investment_type))?;

        Ok(Holding::new(
            holding_id,
            self.investor_id.trim().to_string(),
            kind,
            non_empty(self.isin),
            non_empty(self.city),
            non_empty(self.fund_investor),
        ))
    }
}

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionRecord {
    investment_id: String,
    #[serde(rename = "Type")]
    transaction_type: String,
    date: String,
    value: String,
}

impl TransactionRecord {
    pub fn into_transaction(self) -> Result<Transaction> {
        let kind = self
            .transaction_type
            .trim()
            .parse::<TransactionKind>()
            .with_context(|| {
                format!("Failed to parse transaction type '{}'", self.transaction_type)
            })?;

        Ok(Transaction::new(
            self.investment_id.trim().to_string(),
            kind,
            parse_date(&self.date)?,
            parse_decimal(&self.value, "value")?,
        ))
    }
}

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "PascalCase")]
pub struct QuoteRecord {
    #[serde(rename = "ISIN")]
    isin: String,
    date: String,
    price_per_share: String,
}

impl QuoteRecord {
    pub fn into_quote(self) -> Result<Quote> {
        Ok(Quote::new(
            self.isin.trim().to_string(),
            parse_date(&self.date)?,
            parse_decimal(&self.price_per_share, "price")?,
        ))
    }
}

/// Reads every row of a delimited file with a header line. Rows that fail to deserialize
/// or convert are logged and skipped; failing to open the file is an error.
fn read_records<R, T>(
    path: &Path,
    delimiter: u8,
    convert: impl Fn(R) -> Result<T>,
) -> Result<Vec<T>>
where
    R: DeserializeOwned,
{
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))?;

    let mut records = Vec::new();
    for (row_idx, row) in reader.deserialize::<R>().enumerate() {
        let converted = row
            .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))
            .and_then(&convert);

        match converted {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    row = row_idx + 1,
                    "Skipping malformed row: {:#}",
                    err
                );
            }
        }
    }

    Ok(records)
}

pub fn read_holdings(path: &Path, delimiter: u8) -> Result<Vec<Holding>> {
    read_records(path, delimiter, HoldingRecord::into_holding)
}

pub fn read_transactions(path: &Path, delimiter: u8) -> Result<Vec<Transaction>> {
    read_records(path, delimiter, TransactionRecord::into_transaction)
}

pub fn read_quotes(path: &Path, delimiter: u8) -> Result<Vec<Quote>> {
    read_records(path, delimiter, QuoteRecord::into_quote)
}

pub fn load_snapshot(
    holdings_path: &Path,
    transactions_path: &Path,
    quotes_path: &Path,
    delimiter: u8,
) -> Result<SnapshotStore> {
    info!("Reading holdings from: {}", holdings_path.display());
    let holdings = read_holdings(holdings_path, delimiter)?;

    info!("Reading transactions from: {}", transactions_path.display());
    let transactions = read_transactions(transactions_path, delimiter)?;

    info!("Reading quotes from: {}", quotes_path.display());
    let quotes = read_quotes(quotes_path, delimiter)?;

    let store = SnapshotStore::new(holdings, transactions, quotes);
    info!(
        "{} holding, {} transaction and {} quote records loaded.",
        store.holdings().len(),
        store.transaction_count(),
        store.quote_count()
    );

    Ok(store)
}
