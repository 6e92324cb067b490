use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValuationError {
    #[error("Equity holding {0} has no instrument id")]
    MissingInstrument(String),

    #[error("Fund membership cycle detected: {}", .chain.join(" -> "))]
    FundCycle { chain: Vec<String> },

    #[error("Value of holding {holding_id} exceeds the decimal range")]
    Overflow { holding_id: String },
}
