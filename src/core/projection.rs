//! Derived views: filter, sort and render the transaction list

use super::balance::balance;
use super::format::{format_currency, format_date, format_signed_currency};
use super::transaction::{Transaction, TransactionId, TransactionKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;

/// Ordering applied to the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
    /// Keep insertion order
    #[default]
    None,
}

impl SortKey {
    /// Parse a sort key; anything unrecognized means no reordering.
    pub fn parse(s: &str) -> SortKey {
        match s {
            "date-desc" => SortKey::DateDesc,
            "date-asc" => SortKey::DateAsc,
            "amount-desc" => SortKey::AmountDesc,
            "amount-asc" => SortKey::AmountAsc,
            _ => SortKey::None,
        }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortKey::DateDesc => b.date.cmp(&a.date),
            SortKey::DateAsc => a.date.cmp(&b.date),
            SortKey::AmountDesc => b.amount.cmp(&a.amount),
            SortKey::AmountAsc => a.amount.cmp(&b.amount),
            SortKey::None => Ordering::Equal,
        }
    }
}

/// Current filter and sort settings of the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSortCriteria {
    pub search_term: String,
    pub sort_key: SortKey,
}

impl FilterSortCriteria {
    pub fn new(search_term: impl Into<String>, sort_key: SortKey) -> Self {
        FilterSortCriteria {
            search_term: search_term.into(),
            sort_key,
        }
    }
}

/// Filter by description and sort, leaving `transactions` untouched.
///
/// The sort is stable, so entries that compare equal keep their original
/// relative order.
pub fn project<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterSortCriteria,
) -> Vec<&'a Transaction> {
    let term = criteria.search_term.to_lowercase();
    let mut projected: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.description.to_lowercase().contains(&term))
        .collect();

    if criteria.sort_key != SortKey::None {
        projected.sort_by(|a, b| criteria.sort_key.compare(a, b));
    }
    projected
}

/// A display-ready list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, tabled::Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "ID")]
    pub id: TransactionId,

    #[tabled(rename = "Description")]
    pub description: String,

    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "Amount")]
    pub amount: String,

    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        TransactionRow {
            id: tx.id,
            description: tx.description.clone(),
            date: format_date(&tx.date.to_string()),
            amount: format_signed_currency(tx.amount, tx.kind == TransactionKind::Expense),
            kind: tx.kind,
        }
    }
}

/// Everything the view needs to redraw the list and the balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub rows: Vec<TransactionRow>,
    /// Balance over all transactions, not just the visible rows
    pub balance: Decimal,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn formatted_balance(&self) -> String {
        format_currency(self.balance)
    }
}

/// Run the full pipeline: filter, sort, render rows and aggregate the balance.
pub fn render(transactions: &[Transaction], criteria: &FilterSortCriteria) -> Projection {
    let rows: Vec<TransactionRow> = project(transactions, criteria)
        .into_iter()
        .map(TransactionRow::from)
        .collect();
    log::debug!(
        "Projected {} of {} transactions (search {:?}, sort {:?})",
        rows.len(),
        transactions.len(),
        criteria.search_term,
        criteria.sort_key
    );
    Projection {
        rows,
        balance: balance(transactions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(id: i64, description: &str, amount: Decimal, date: &str) -> Transaction {
        Transaction {
            id: TransactionId(id),
            description: description.to_string(),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind: TransactionKind::Expense,
        }
    }

    fn ids(view: &[&Transaction]) -> Vec<i64> {
        view.iter().map(|t| t.id.0).collect()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, "Salary", dec!(10), "2024-03-05"),
            tx(2, "Groceries", dec!(50), "2024-01-10"),
            tx(3, "Rent", dec!(30), "2024-03-05"),
            tx(4, "salary bonus", dec!(50), "2023-12-01"),
        ]
    }

    #[test]
    fn empty_criteria_keeps_insertion_order() {
        let txs = sample();
        let view = project(&txs, &FilterSortCriteria::default());
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let txs = sample();
        let view = project(&txs, &FilterSortCriteria::new("sal", SortKey::None));
        assert_eq!(ids(&view), vec![1, 4]);

        let view = project(&txs, &FilterSortCriteria::new("RY BO", SortKey::None));
        assert_eq!(ids(&view), vec![4]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let txs = sample();
        let view = project(&txs, &FilterSortCriteria::new("holiday", SortKey::DateDesc));
        assert!(view.is_empty());
    }

    #[test]
    fn amount_desc_with_stable_ties() {
        let txs = vec![
            tx(1, "a", dec!(10), "2024-01-01"),
            tx(2, "b", dec!(50), "2024-01-01"),
            tx(3, "c", dec!(30), "2024-01-01"),
        ];
        let view = project(&txs, &FilterSortCriteria::new("", SortKey::AmountDesc));
        let amounts: Vec<_> = view.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![dec!(50), dec!(30), dec!(10)]);

        let txs = sample();
        let view = project(&txs, &FilterSortCriteria::new("", SortKey::AmountDesc));
        assert_eq!(ids(&view), vec![2, 4, 3, 1]);
    }

    #[test]
    fn amount_asc_compares_numerically() {
        let txs = vec![
            tx(1, "a", dec!(100), "2024-01-01"),
            tx(2, "b", dec!(9.99), "2024-01-01"),
            tx(3, "c", dec!(20), "2024-01-01"),
        ];
        let view = project(&txs, &FilterSortCriteria::new("", SortKey::AmountAsc));
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn date_sorts_are_chronological_and_stable() {
        let txs = sample();
        let view = project(&txs, &FilterSortCriteria::new("", SortKey::DateDesc));
        assert_eq!(ids(&view), vec![1, 3, 2, 4]);

        let view = project(&txs, &FilterSortCriteria::new("", SortKey::DateAsc));
        assert_eq!(ids(&view), vec![4, 2, 1, 3]);
    }

    #[test]
    fn projection_does_not_mutate_input_and_is_deterministic() {
        let txs = sample();
        let before = txs.clone();
        let criteria = FilterSortCriteria::new("a", SortKey::AmountDesc);

        let first = ids(&project(&txs, &criteria));
        let second = ids(&project(&txs, &criteria));

        assert_eq!(first, second);
        assert_eq!(txs, before);
    }

    #[test]
    fn unrecognized_sort_key_means_none() {
        assert_eq!(SortKey::parse("amount-desc"), SortKey::AmountDesc);
        assert_eq!(SortKey::parse("date-asc"), SortKey::DateAsc);
        assert_eq!(SortKey::parse("random"), SortKey::None);
        assert_eq!(SortKey::parse(""), SortKey::None);
    }

    #[test]
    fn render_rows_and_total_balance() {
        let mut txs = sample();
        txs[0].kind = TransactionKind::Income;
        txs[0].amount = dec!(1000);

        let projection = render(&txs, &FilterSortCriteria::new("salary", SortKey::None));

        assert_eq!(projection.rows.len(), 2);
        let first = &projection.rows[0];
        assert_eq!(first.date, "05/03/2024");
        assert_eq!(first.amount, "+ R$ 1.000,00");
        assert_eq!(projection.rows[1].amount, "- R$ 50,00");
        // balance ignores the filter
        assert_eq!(projection.balance, dec!(870));
        assert_eq!(projection.formatted_balance(), "R$ 870,00");
    }

    #[test]
    fn render_empty_state() {
        let projection = render(&[], &FilterSortCriteria::default());
        assert!(projection.is_empty());
        assert_eq!(projection.formatted_balance(), "R$ 0,00");
    }
}
