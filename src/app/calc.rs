use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionKind};

// Every rule returns `None` when the result does not fit in a `Decimal`.

pub fn sum_of_kind(transactions: &[Transaction], kind: &TransactionKind) -> Option<Decimal> {
    transactions
        .iter()
        .filter(|t| t.kind() == kind)
        .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(*t.amount()))
}

/// A missing price values the position at zero, whatever the share count.
pub fn equity_value(total_shares: Decimal, price: Option<Decimal>) -> Option<Decimal> {
    match price {
        Some(price) => total_shares.checked_mul(price),
        None => Some(Decimal::ZERO),
    }
}

/// Latest Estate amount plus latest Building amount. Earlier entries of the same kind are
/// superseded, not added. Entries sharing a date keep their input order.
pub fn real_estate_value(transactions: &[Transaction]) -> Option<Decimal> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|t| *t.date());

    let (estate, building) =
        ordered
            .into_iter()
            .fold((None, None), |(estate, building), t| match t.kind() {
                TransactionKind::Estate => (Some(*t.amount()), building),
                TransactionKind::Building => (estate, Some(*t.amount())),
                _ => (estate, building),
            });

    estate
        .unwrap_or(Decimal::ZERO)
        .checked_add(building.unwrap_or(Decimal::ZERO))
}

pub fn fund_value(members_total: Decimal, ownership_fraction: Decimal) -> Option<Decimal> {
    members_total.checked_mul(ownership_fraction)
}
