//! Top-level state container shared by query and command services.

use std::sync::Arc;

use itex_domain::{Category, CategoryId, Identifiable, Transaction, TransactionId, YearlyBudget};

/// Immutable snapshot of everything the dashboard renders from.
///
/// Each collection sits behind an [`Arc`]. Commands never mutate a snapshot in
/// place: they build a new one and carry over the `Arc`s they did not touch, so
/// callers can use [`DashboardState::same_transactions`] and friends for
/// change detection.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    transactions: Arc<Vec<Transaction>>,
    categories: Arc<Vec<Category>>,
    budget: Arc<YearlyBudget>,
}

impl DashboardState {
    pub fn new(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        budget: YearlyBudget,
    ) -> Self {
        Self {
            transactions: Arc::new(transactions),
            categories: Arc::new(categories),
            budget: Arc::new(budget),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn budget(&self) -> &YearlyBudget {
        &self.budget
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn with_transactions(&self, transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(transactions),
            ..self.clone()
        }
    }

    pub fn with_categories(&self, categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(categories),
            ..self.clone()
        }
    }

    pub fn with_budget(&self, budget: YearlyBudget) -> Self {
        Self {
            budget: Arc::new(budget),
            ..self.clone()
        }
    }

    pub fn same_transactions(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.transactions, &other.transactions)
    }

    pub fn same_categories(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.categories, &other.categories)
    }

    pub fn same_budget(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.budget, &other.budget)
    }
}

fn find_by_id<'a, T>(items: &'a [T], id: &T::Id) -> Option<&'a T>
where
    T: Identifiable,
    T::Id: PartialEq,
{
    items.iter().find(|item| item.id() == id)
}
