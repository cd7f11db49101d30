use super::transaction::{NewTransaction, Transaction, TransactionId};
use chrono::Utc;

/// Largest id accepted from persisted state, leaving room for every later add.
pub const MAX_RESTORED_ID: i64 = i64::MAX / 2;

/// Ordered collection of transactions, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_id: i64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a store from previously persisted transactions.
    ///
    /// Ids issued afterwards continue past the largest restored id.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let last_id = transactions.iter().map(|t| t.id.0).max().unwrap_or(0);
        TransactionStore {
            transactions,
            last_id,
        }
    }

    /// Append a validated entry under a fresh id and return the stored copy.
    pub fn add(&mut self, entry: NewTransaction) -> &Transaction {
        let id = self.next_id(Utc::now().timestamp_millis());
        let index = self.transactions.len();
        self.transactions.push(entry.with_id(id));
        &self.transactions[index]
    }

    /// Remove the transaction with the given id. Absent ids are ignored.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // Creation time in ms, bumped past the last issued id if the clock hasn't moved on.
    fn next_id(&mut self, now_millis: i64) -> TransactionId {
        // saturates only for stores restored past MAX_RESTORED_ID
        self.last_id = now_millis.max(self.last_id.saturating_add(1));
        TransactionId(self.last_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transaction::TransactionKind;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn entry(description: &str) -> NewTransaction {
        NewTransaction {
            description: description.to_string(),
            amount: dec!(42.10),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            kind: TransactionKind::Expense,
        }
    }

    #[test]
    fn add_appends_one_entry_with_fields_preserved() {
        let mut store = TransactionStore::new();
        store.add(entry("Coffee"));
        let before = store.len();

        let added = store.add(entry("Groceries")).clone();

        assert_eq!(store.len(), before + 1);
        let last = store.all().last().unwrap();
        assert_eq!(last, &added);
        assert_eq!(last.description, "Groceries");
        assert_eq!(last.amount, dec!(42.10));
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(last.kind, TransactionKind::Expense);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = TransactionStore::new();
        let ids: Vec<_> = (0..100).map(|i| store.add(entry(&i.to_string())).id).collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn next_id_bumps_when_clock_stalls_or_goes_back() {
        let mut store = TransactionStore::new();
        assert_eq!(store.next_id(1000), TransactionId(1000));
        assert_eq!(store.next_id(1000), TransactionId(1001));
        assert_eq!(store.next_id(900), TransactionId(1002));
        assert_eq!(store.next_id(5000), TransactionId(5000));
    }

    #[test]
    fn restored_store_continues_after_largest_id() {
        let far_future = i64::MAX / 2;
        let restored = entry("Old").with_id(TransactionId(far_future));
        let mut store = TransactionStore::from_transactions(vec![restored]);

        let id = store.add(entry("New")).id;
        assert_eq!(id, TransactionId(far_future + 1));
    }

    #[test]
    fn store_restored_at_id_limit_keeps_increasing() {
        let restored = entry("Old").with_id(TransactionId(MAX_RESTORED_ID));
        let mut store = TransactionStore::from_transactions(vec![restored]);

        let first = store.add(entry("New")).id;
        let second = store.add(entry("Newer")).id;
        assert_eq!(first, TransactionId(MAX_RESTORED_ID + 1));
        assert_eq!(second, TransactionId(MAX_RESTORED_ID + 2));
    }

    #[test]
    fn next_id_does_not_overflow() {
        let mut store = TransactionStore::new();
        store.last_id = i64::MAX;
        assert_eq!(store.next_id(1000), TransactionId(i64::MAX));
    }

    #[test]
    fn remove_existing_entry() {
        let mut store = TransactionStore::new();
        let keep = store.add(entry("Keep")).id;
        let drop = store.add(entry("Drop")).id;

        let removed = store.remove(drop);

        assert_eq!(removed.map(|t| t.description), Some("Drop".to_string()));
        assert_eq!(store.len(), 1);
        assert!(store.get(keep).is_some());
        assert!(store.get(drop).is_none());
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut store = TransactionStore::new();
        store.add(entry("A"));
        store.add(entry("B"));
        let before = store.all().to_vec();

        assert_eq!(store.remove(TransactionId(-1)), None);
        assert_eq!(store.remove(TransactionId(-1)), None);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn all_keeps_insertion_order() {
        let mut store = TransactionStore::new();
        for name in ["first", "second", "third"] {
            store.add(entry(name));
        }
        let names: Vec<_> = store.all().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
