//! Filter state applied to the transaction list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{common::CategoryId, transaction::TransactionStatus};

/// Category selector: every category or a single id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, id: &CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == id,
        }
    }
}

/// Status selector: every status or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TransactionStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TransactionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Full filter state. `Default` is the reset state: every predicate inactive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub category: CategoryFilter,
    /// Case-insensitive vendor substring; empty disables the predicate.
    pub vendor: String,
    pub status: StatusFilter,
    /// Inclusive lower bound.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Returns `true` when no predicate would reject anything.
    pub fn is_identity(&self) -> bool {
        self == &Self::default()
    }

    /// Merges a partial update, keeping fields the patch does not touch.
    pub fn apply(&self, patch: FilterPatch) -> Self {
        Self {
            category: patch.category.unwrap_or_else(|| self.category.clone()),
            vendor: patch.vendor.unwrap_or_else(|| self.vendor.clone()),
            status: patch.status.unwrap_or(self.status),
            start_date: patch.start_date.unwrap_or(self.start_date),
            end_date: patch.end_date.unwrap_or(self.end_date),
        }
    }
}

/// Partial filter update. `None` leaves the field as is; for the date bounds
/// `Some(None)` clears the bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub category: Option<CategoryFilter>,
    pub vendor: Option<String>,
    pub status: Option<StatusFilter>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_identity() {
        assert!(TransactionFilter::default().is_identity());
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let base = TransactionFilter {
            vendor: "dell".into(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..TransactionFilter::default()
        };
        let next = base.apply(FilterPatch {
            status: Some(StatusFilter::Only(TransactionStatus::Paid)),
            start_date: Some(None),
            ..FilterPatch::default()
        });
        assert_eq!(next.vendor, "dell");
        assert_eq!(next.status, StatusFilter::Only(TransactionStatus::Paid));
        assert_eq!(next.start_date, None);
        assert_eq!(next.category, CategoryFilter::All);
    }
}
