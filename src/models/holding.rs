use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use serde::{Serialize, Serializer};
use strum_macros::EnumString;

/// One line item of a portfolio. Which optional fields carry meaning depends on `kind`:
/// `instrument_id` only for equities, `city` only for real estate.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct Holding {
    holding_id: String,
    investor_id: String,
    kind: HoldingKind,
    instrument_id: Option<String>,
    city: Option<String>,
    fund_id: Option<String>,
}

impl Holding {
    pub fn is_owned_by(&self, investor_id: &str) -> bool {
        self.investor_id.eq_ignore_ascii_case(investor_id)
    }

    pub fn is_member_of(&self, fund_id: &str) -> bool {
        self.fund_id
            .as_deref()
            .is_some_and(|id| id.eq_ignore_ascii_case(fund_id))
    }
}

#[derive(Clone, Debug, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum HoldingKind {
    #[strum(serialize = "Equity", serialize = "Stock")]
    Equity,
    Estate,
    Building,
    #[strum(serialize = "Fund", serialize = "Fonds")]
    Fund,
    /// Any label the engine does not know how to value.
    #[strum(default)]
    Other(String),
}

impl HoldingKind {
    pub fn to_str(&self) -> &str {
        match self {
            HoldingKind::Equity => "Equity",
            HoldingKind::Estate => "Estate",
            HoldingKind::Building => "Building",
            HoldingKind::Fund => "Fund",
            HoldingKind::Other(label) => label,
        }
    }
}

impl fmt::Display for HoldingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl Serialize for HoldingKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}
