pub mod balance;
pub mod format;
pub mod projection;
pub mod store;
pub mod theme;
pub mod transaction;
pub mod validate;

// Flat public surface for domain types and functions.
pub use balance::balance;
pub use format::{format_currency, format_date};
#[allow(unused_imports)]
pub use projection::{project, render, FilterSortCriteria, Projection, SortKey, TransactionRow};
pub use store::{TransactionStore, MAX_RESTORED_ID};
pub use theme::Theme;
#[allow(unused_imports)]
pub use transaction::{NewTransaction, Transaction, TransactionDraft, TransactionId, TransactionKind};
#[allow(unused_imports)]
pub use validate::{validate, Field, ValidationError, MAX_AMOUNT};
