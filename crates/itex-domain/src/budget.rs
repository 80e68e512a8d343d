//! Sparse per-category, per-year planned-spend table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Amounts keyed by year for a single category.
pub type BudgetRow = BTreeMap<Year, f64>;

/// Sparse `category -> year -> amount` table.
///
/// A missing `(category, year)` pair reads as `0.0` through [`YearlyBudget::amount_for`];
/// there is no way to observe the difference between "absent" and an explicit
/// zero. Mutating helpers return new tables and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearlyBudget {
    rows: BTreeMap<CategoryId, BudgetRow>,
}

impl YearlyBudget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planned amount for `category` in `year`, defaulting to zero.
    pub fn amount_for(&self, category: &CategoryId, year: Year) -> f64 {
        self.rows
            .get(category)
            .and_then(|row| row.get(&year))
            .copied()
            .unwrap_or(0.0)
    }

    /// Raw row for `category`, if the table carries one.
    pub fn row(&self, category: &CategoryId) -> Option<&BudgetRow> {
        self.rows.get(category)
    }

    pub fn has_row(&self, category: &CategoryId) -> bool {
        self.rows.contains_key(category)
    }

    /// Union of year keys across all rows, ascending, without duplicates.
    pub fn years(&self) -> Vec<Year> {
        self.rows
            .values()
            .flat_map(|row| row.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a copy with `amount` stored for `(category, year)`.
    pub fn with_amount(&self, category: &CategoryId, year: Year, amount: f64) -> Self {
        let mut next = self.clone();
        next.rows
            .entry(category.clone())
            .or_default()
            .insert(year, amount);
        next
    }

    /// Returns a copy where `category` carries exactly `row`.
    pub fn with_row(&self, category: &CategoryId, row: BudgetRow) -> Self {
        let mut next = self.clone();
        next.rows.insert(category.clone(), row);
        next
    }

    /// Returns a copy with `year` removed from every row. Rows that become
    /// empty are kept as empty rows.
    pub fn without_year(&self, year: Year) -> Self {
        let mut next = self.clone();
        for row in next.rows.values_mut() {
            row.remove(&year);
        }
        next
    }
}

impl FromIterator<(CategoryId, BudgetRow)> for YearlyBudget {
    fn from_iter<I: IntoIterator<Item = (CategoryId, BudgetRow)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
