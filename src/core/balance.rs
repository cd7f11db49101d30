use super::transaction::Transaction;
use rust_decimal::Decimal;

/// Total income minus total expenses, summed exactly with no intermediate rounding.
pub fn balance<'a, I>(transactions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .map(Transaction::signed_amount)
        .sum()
}
