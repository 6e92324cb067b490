use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    instrument_id: String,
    date: NaiveDate,
    price: Decimal,
}
