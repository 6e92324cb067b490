use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::{
    app::calc,
    db::{HoldingRepository, QuoteRepository, TransactionRepository},
    models::{Holding, HoldingKind, HoldingValuation, PortfolioValuation, TransactionKind},
    services::errors::ValuationError,
};

/// Values portfolios as of a reference date.
///
/// Each top-level holding is resolved by the rule for its kind; funds recurse into their
/// members. A failure anywhere inside one top-level holding zeroes that holding's
/// contribution only, so callers always get an amount back.
#[derive(Clone)]
pub struct ValuationService {
    holding_repository: Arc<dyn HoldingRepository>,
    transaction_repository: Arc<dyn TransactionRepository>,
    quote_repository: Arc<dyn QuoteRepository>,
}

impl ValuationService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepository>,
        transaction_repository: Arc<dyn TransactionRepository>,
        quote_repository: Arc<dyn QuoteRepository>,
    ) -> Self {
        Self {
            holding_repository,
            transaction_repository,
            quote_repository,
        }
    }

    /// Builds a service backed by a single store serving all three lookups.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: HoldingRepository + TransactionRepository + QuoteRepository + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    pub fn calculate_portfolio_value(&self, investor_id: &str, as_of: NaiveDate) -> Decimal {
        *self.value_portfolio(investor_id, as_of).total()
    }

    pub fn value_portfolio(&self, investor_id: &str, as_of: NaiveDate) -> PortfolioValuation {
        let holdings = match self.holding_repository.holdings_by_investor(investor_id) {
            Ok(holdings) => holdings,
            Err(err) => {
                error!(investor_id, "Failed to load holdings for investor: {:#}", err);
                return PortfolioValuation::empty(investor_id, as_of);
            }
        };

        if holdings.is_empty() {
            debug!(investor_id, "Investor has no holdings");
            return PortfolioValuation::empty(investor_id, as_of);
        }

        let mut total = Decimal::ZERO;
        let mut valuations = Vec::with_capacity(holdings.len());

        for holding in holdings {
            // A value that cannot be added to the running total is dropped like a failure.
            let outcome = self.resolve(&holding, as_of).and_then(|value| {
                total
                    .checked_add(value)
                    .map(|new_total| (value, new_total))
                    .ok_or_else(|| anyhow::Error::from(overflow(holding.holding_id())))
            });

            let valuation = match outcome {
                Ok((value, new_total)) => {
                    total = new_total;
                    debug!(holding_id = %holding.holding_id(), %value, "Holding valued");
                    HoldingValuation::new(
                        holding.holding_id().clone(),
                        holding.kind().clone(),
                        value,
                        None,
                    )
                }
                Err(err) => {
                    error!(
                        holding_id = %holding.holding_id(),
                        "Error calculating value for holding {}: {:#}",
                        holding.holding_id(),
                        err
                    );
                    HoldingValuation::new(
                        holding.holding_id().clone(),
                        holding.kind().clone(),
                        Decimal::ZERO,
                        Some(format!("{:#}", err)),
                    )
                }
            };

            valuations.push(valuation);
        }

        PortfolioValuation::new(investor_id.to_string(), as_of, total, valuations)
    }

    /// Values a single holding, recursing through fund members. Errors are returned, not
    /// isolated; isolation happens once per top-level holding in `value_portfolio`.
    pub fn resolve(&self, holding: &Holding, as_of: NaiveDate) -> Result<Decimal> {
        self.resolve_within(holding, as_of, &mut Vec::new())
    }

    fn resolve_within(
        &self,
        holding: &Holding,
        as_of: NaiveDate,
        fund_chain: &mut Vec<String>,
    ) -> Result<Decimal> {
        match holding.kind() {
            HoldingKind::Equity => self.resolve_equity(holding, as_of),
            HoldingKind::Estate | HoldingKind::Building => {
                self.resolve_real_estate(holding, as_of)
            }
            HoldingKind::Fund => self.resolve_fund_within(holding, as_of, fund_chain),
            HoldingKind::Other(label) => {
                warn!(
                    holding_id = %holding.holding_id(),
                    "Unknown holding kind '{}' for holding {}",
                    label,
                    holding.holding_id()
                );
                Ok(Decimal::ZERO)
            }
        }
    }

    pub fn resolve_equity(&self, holding: &Holding, as_of: NaiveDate) -> Result<Decimal> {
        let holding_id = holding.holding_id();
        let instrument_id = holding
            .instrument_id()
            .as_deref()
            .ok_or_else(|| ValuationError::MissingInstrument(holding_id.clone()))?;

        let transactions = self
            .transaction_repository
            .transactions_by_holding(holding_id, as_of)
            .with_context(|| format!("Failed to load transactions for holding {}", holding_id))?;
        let total_shares = calc::sum_of_kind(&transactions, &TransactionKind::Shares)
            .ok_or_else(|| overflow(holding_id))?;

        let price = self
            .quote_repository
            .latest_quote(instrument_id, as_of)
            .with_context(|| format!("Failed to load quote for instrument {}", instrument_id))?;

        if price.is_none() {
            debug!(
                holding_id = %holding_id,
                instrument_id,
                "No quote on or before {}, valuing at zero",
                as_of
            );
        }

        calc::equity_value(total_shares, price).ok_or_else(|| overflow(holding_id).into())
    }

    pub fn resolve_real_estate(&self, holding: &Holding, as_of: NaiveDate) -> Result<Decimal> {
        let transactions = self
            .transaction_repository
            .transactions_by_holding(holding.holding_id(), as_of)
            .with_context(|| {
                format!(
                    "Failed to load transactions for holding {}",
                    holding.holding_id()
                )
            })?;

        calc::real_estate_value(&transactions).ok_or_else(|| overflow(holding.holding_id()).into())
    }

    pub fn resolve_fund(&self, holding: &Holding, as_of: NaiveDate) -> Result<Decimal> {
        self.resolve_fund_within(holding, as_of, &mut Vec::new())
    }

    fn resolve_fund_within(
        &self,
        holding: &Holding,
        as_of: NaiveDate,
        fund_chain: &mut Vec<String>,
    ) -> Result<Decimal> {
        let fund_id = holding.holding_id();

        // Membership lookups ignore case, so the cycle check has to as well.
        if fund_chain.iter().any(|id| id.eq_ignore_ascii_case(fund_id)) {
            let mut chain = fund_chain.clone();
            chain.push(fund_id.clone());
            return Err(ValuationError::FundCycle { chain }.into());
        }

        let transactions = self
            .transaction_repository
            .transactions_by_holding(fund_id, as_of)
            .with_context(|| format!("Failed to load transactions for fund {}", fund_id))?;
        let ownership_fraction = calc::sum_of_kind(&transactions, &TransactionKind::Percentage)
            .ok_or_else(|| overflow(fund_id))?;

        let members = self
            .holding_repository
            .holdings_by_fund(fund_id)
            .with_context(|| format!("Failed to load members of fund {}", fund_id))?;

        if members.is_empty() {
            debug!(holding_id = %fund_id, "Fund has no members");
            return Ok(Decimal::ZERO);
        }

        fund_chain.push(fund_id.clone());
        let members_total = members.iter().try_fold(Decimal::ZERO, |acc, member| {
            let value = self.resolve_within(member, as_of, fund_chain)?;
            acc.checked_add(value)
                .ok_or_else(|| anyhow::Error::from(overflow(fund_id)))
        });
        fund_chain.pop();

        calc::fund_value(members_total?, ownership_fraction).ok_or_else(|| overflow(fund_id).into())
    }
}

fn overflow(holding_id: &str) -> ValuationError {
    ValuationError::Overflow {
        holding_id: holding_id.to_string(),
    }
}
