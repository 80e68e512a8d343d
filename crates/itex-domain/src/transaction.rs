//! Domain models for recorded and planned expense line items.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub subcategory: String,
    pub vendor: String,
    pub amount: f64,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Attaches `id` to a draft.
    pub fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            date: draft.date,
            category_id: draft.category_id,
            subcategory: draft.subcategory,
            vendor: draft.vendor,
            amount: draft.amount,
            status: draft.status,
        }
    }

    pub fn year(&self) -> Year {
        self.date.year()
    }

    /// Zero-based quarter of the transaction date.
    pub fn quarter(&self) -> usize {
        quarter_of(self.date)
    }

    pub fn is_paid(&self) -> bool {
        self.status == TransactionStatus::Paid
    }

    /// Returns a copy with status set to [`TransactionStatus::Paid`].
    pub fn paid(&self) -> Self {
        Self {
            status: TransactionStatus::Paid,
            ..self.clone()
        }
    }

    /// Strips the identifier, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            date: self.date,
            category_id: self.category_id.clone(),
            subcategory: self.subcategory.clone(),
            vendor: self.vendor.clone(),
            amount: self.amount,
            status: self.status,
        }
    }
}

impl Identifiable for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &TransactionId {
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
        format!("txn:{} {} [{}]", self.id, self.vendor, self.status)
    }
}

/// Transaction payload before an identifier has been assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub subcategory: String,
    pub vendor: String,
    pub amount: f64,
    pub status: TransactionStatus,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        category_id: impl Into<CategoryId>,
        subcategory: impl Into<String>,
        vendor: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            category_id: category_id.into(),
            subcategory: subcategory.into(),
            vendor: vendor.into(),
            amount,
            status: TransactionStatus::Planned,
        }
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
/// Lifecycle state of a transaction. `Planned` is budgeted but not yet
/// incurred; `Paid` has actually been spent.
pub enum TransactionStatus {
    #[default]
    Planned,
    Paid,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 2] = [TransactionStatus::Planned, TransactionStatus::Paid];
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Planned => "Planned",
            TransactionStatus::Paid => "Paid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transaction status `{}`", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TransactionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planned" => Ok(TransactionStatus::Planned),
            "paid" => Ok(TransactionStatus::Paid),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}
