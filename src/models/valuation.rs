use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::HoldingKind;

/// Contribution of one top-level holding to a portfolio total.
#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct HoldingValuation {
    holding_id: String,
    kind: HoldingKind,
    value: Decimal,
    error: Option<String>,
}

impl HoldingValuation {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct PortfolioValuation {
    investor_id: String,
    as_of: NaiveDate,
    total: Decimal,
    holdings: Vec<HoldingValuation>,
}

impl PortfolioValuation {
    pub fn empty(investor_id: &str, as_of: NaiveDate) -> Self {
        Self::new(investor_id.to_string(), as_of, Decimal::ZERO, Vec::new())
    }

    pub fn failed_count(&self) -> usize {
        self.holdings.iter().filter(|h| h.failed()).count()
    }
}
