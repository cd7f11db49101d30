//! Application state: the transaction store plus the theme, and how both
//! are loaded from and written back to a [`KeyValueStore`].

use crate::core::{
    render, validate, FilterSortCriteria, Projection, Theme, Transaction, TransactionDraft,
    TransactionId, TransactionStore, ValidationError, MAX_AMOUNT, MAX_RESTORED_ID,
};
use crate::storage::{KeyValueStore, StorageError, THEME_KEY, TRANSACTIONS_KEY};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored transactions are not valid JSON: {0}")]
    CorruptTransactions(#[from] serde_json::Error),
    #[error("duplicate transaction id: {0}")]
    DuplicateTransactionId(TransactionId),
    #[error("transaction {id} has non-positive amount {amount}")]
    NonPositiveAmount { id: TransactionId, amount: Decimal },
    #[error("transaction {id} has amount {amount}, above the limit of {}", MAX_AMOUNT)]
    AmountTooLarge { id: TransactionId, amount: Decimal },
    #[error("transaction id {0} is out of range")]
    IdOutOfRange(TransactionId),
}

/// The whole mutable state of the application and its persistence.
///
/// Each public method is one user-visible transition. Storage writes after a
/// transition are best-effort: a failed write is logged and the in-memory
/// state keeps the change.
pub struct Ledger<S> {
    store: TransactionStore,
    theme: Theme,
    storage: S,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load state from `storage`, falling back to no transactions and the light theme.
    ///
    /// The effective theme is written back straight away.
    pub fn open(mut storage: S) -> Result<Self, LedgerError> {
        let transactions = match storage.get(TRANSACTIONS_KEY)? {
            Some(json) => parse_transactions(&json)?,
            None => Vec::new(),
        };

        let theme = match storage.get(THEME_KEY)? {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown theme {:?}, using {}", value, Theme::default());
                Theme::default()
            }),
            None => Theme::default(),
        };
        log::debug!(
            "Loaded {} transactions, theme {}",
            transactions.len(),
            theme
        );

        log::debug!("Writing theme {} back on load", theme);
        if let Err(e) = storage.set(THEME_KEY, theme.as_str()) {
            log::warn!("Could not save theme: {}", e);
        }

        Ok(Ledger {
            store: TransactionStore::from_transactions(transactions),
            theme,
            storage,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.store.get(id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Validate a draft and, if it passes, store it and persist the list.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<Transaction, ValidationError> {
        let entry = validate(draft)?;
        let added = self.store.add(entry).clone();
        log::info!(
            "Added {} {} {} on {}",
            added.kind,
            added.id,
            added.amount,
            added.date
        );
        self.persist_transactions();
        Ok(added)
    }

    /// Remove a transaction if it exists. Unknown ids change nothing.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let removed = self.store.remove(id);
        match &removed {
            Some(tx) => {
                log::info!("Removed transaction {} ({})", tx.id, tx.description);
                self.persist_transactions();
            }
            None => log::debug!("No transaction with id {}, nothing removed", id),
        }
        removed
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        log::info!("Theme changed to {}", self.theme);
        if let Err(e) = self.storage.set(THEME_KEY, self.theme.as_str()) {
            log::warn!("Could not save theme: {}", e);
        }
        self.theme
    }

    pub fn render(&self, criteria: &FilterSortCriteria) -> Projection {
        render(self.store.all(), criteria)
    }

    fn persist_transactions(&mut self) {
        let json = match serde_json::to_string(self.store.all()) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize transactions: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(TRANSACTIONS_KEY, &json) {
            log::warn!("Could not save transactions: {}", e);
        }
    }
}

fn parse_transactions(json: &str) -> Result<Vec<Transaction>, LedgerError> {
    let transactions: Vec<Transaction> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for tx in &transactions {
        if tx.id.0 > MAX_RESTORED_ID {
            return Err(LedgerError::IdOutOfRange(tx.id));
        }
        if !seen.insert(tx.id) {
            return Err(LedgerError::DuplicateTransactionId(tx.id));
        }
        if tx.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount {
                id: tx.id,
                amount: tx.amount,
            });
        }
        if tx.amount > MAX_AMOUNT {
            return Err(LedgerError::AmountTooLarge {
                id: tx.id,
                amount: tx.amount,
            });
        }
    }
    Ok(transactions)
}
