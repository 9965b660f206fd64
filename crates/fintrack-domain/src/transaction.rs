//! Domain models for one-off income and expense records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::*;

/// Direction of a transaction. Amounts never carry a sign; this does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Immutable record of a single financial event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Materializes a transaction from user input plus the identity assigned at creation.
    pub fn from_new(id: impl Into<String>, date: DateTime<Utc>, input: NewTransaction) -> Self {
        Self {
            id: id.into(),
            date,
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            note: input.note,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Stored category label as-is; blank labels count as missing.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "txn:{} [{} {:.2} {}]",
            self.id,
            self.kind,
            self.amount,
            self.category_name().unwrap_or("-")
        )
    }
}

/// User-supplied fields of a transaction; id and date are assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn new(amount: f64, kind: TransactionType) -> Self {
        Self {
            amount,
            kind,
            category: None,
            note: None,
        }
    }

    pub fn expense(amount: f64) -> Self {
        Self::new(amount, TransactionType::Expense)
    }

    pub fn income(amount: f64) -> Self {
        Self::new(amount, TransactionType::Income)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
