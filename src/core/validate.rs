//! Form validation for new transactions

use super::transaction::{NewTransaction, TransactionDraft, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Description,
    Amount,
    Date,
    Type,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Date => "date",
            Field::Type => "type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const DESCRIPTION_REQUIRED: &str = "Description is required.";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than zero.";
pub const AMOUNT_TOO_LARGE: &str = "Amount must not exceed R$ 1.000.000.000.000,00.";
pub const DATE_REQUIRED: &str = "Date is required.";
pub const DATE_INVALID: &str = "Date must be in YYYY-MM-DD format.";
pub const TYPE_REQUIRED: &str = "Select a type.";

/// Largest amount a single entry may hold. Keeps any realistic number of
/// entries far below the `Decimal` range when summed.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Every field that failed validation, with the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transaction: {}", summary(.field_errors))]
pub struct ValidationError {
    pub field_errors: BTreeMap<Field, &'static str>,
}

impl ValidationError {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(&field).copied()
    }
}

fn summary(errors: &BTreeMap<Field, &'static str>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a draft against the required-field rules.
///
/// All fields are checked independently and every failure is reported, so a
/// completely empty form yields one message per field.
pub fn validate(draft: &TransactionDraft) -> Result<NewTransaction, ValidationError> {
    let mut field_errors = BTreeMap::new();

    let description = if draft.description.trim().is_empty() {
        field_errors.insert(Field::Description, DESCRIPTION_REQUIRED);
        None
    } else {
        Some(draft.description.clone())
    };

    let amount = match parse_amount(&draft.amount) {
        Ok(amount) => Some(amount),
        Err(message) => {
            field_errors.insert(Field::Amount, message);
            None
        }
    };

    let date = match parse_date(&draft.date) {
        Ok(date) => Some(date),
        Err(message) => {
            field_errors.insert(Field::Date, message);
            None
        }
    };

    let kind = match TransactionKind::parse(draft.kind.trim()) {
        Some(kind) => Some(kind),
        None => {
            field_errors.insert(Field::Type, TYPE_REQUIRED);
            None
        }
    };

    match (description, amount, date, kind) {
        (Some(description), Some(amount), Some(date), Some(kind)) => Ok(NewTransaction {
            description,
            amount,
            date,
            kind,
        }),
        _ => Err(ValidationError { field_errors }),
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, &'static str> {
    let amount = Decimal::from_str(raw.trim()).map_err(|_| AMOUNT_NOT_POSITIVE)?;
    if amount <= Decimal::ZERO {
        Err(AMOUNT_NOT_POSITIVE)
    } else if amount > MAX_AMOUNT {
        Err(AMOUNT_TOO_LARGE)
    } else {
        Ok(amount)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DATE_REQUIRED);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DATE_INVALID)
}
