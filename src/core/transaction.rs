use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored transaction, derived from its creation time in milliseconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse the persisted/form representation (`income` or `expense`)
    pub fn parse(s: &str) -> Option<TransactionKind> {
        match s {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense record held by the store.
///
/// Transactions are never edited in place: they are created from a validated
/// [`NewTransaction`] and later removed as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    /// Unique within the store
    pub id: TransactionId,
    /// Free text shown in the list and matched by the search filter
    pub description: String,
    /// Always greater than zero; the sign comes from `type`
    #[schemars(with = "f64")]
    pub amount: Decimal,
    /// Calendar date (YYYY-MM-DD), no time or offset
    pub date: NaiveDate,
    /// Either "income" or "expense"
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Amount with the sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A checked entry that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub(crate) fn with_id(self, id: TransactionId) -> Transaction {
        let NewTransaction {
            description,
            amount,
            date,
            kind,
        } = self;
        Transaction {
            id,
            description,
            amount,
            date,
            kind,
        }
    }
}

/// Raw form input, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub date: String,
    pub kind: String,
}
