use std::fmt;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use strum_macros::EnumString;

/// A dated, signed ledger entry. What `amount` means depends on `kind`:
/// a share count, an estate or building value, or an ownership fraction.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct Transaction {
    holding_id: String,
    kind: TransactionKind,
    date: NaiveDate,
    amount: Decimal,
}

impl Transaction {
    pub fn is_effective_on(&self, as_of: NaiveDate) -> bool {
        self.date <= as_of
    }
}

#[derive(Clone, Debug, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum TransactionKind {
    Shares,
    Estate,
    Building,
    Percentage,
    #[strum(default)]
    Other(String),
}

impl TransactionKind {
    pub fn to_str(&self) -> &str {
        match self {
            TransactionKind::Shares => "Shares",
            TransactionKind::Estate => "Estate",
            TransactionKind::Building => "Building",
            TransactionKind::Percentage => "Percentage",
            TransactionKind::Other(label) => label,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}
