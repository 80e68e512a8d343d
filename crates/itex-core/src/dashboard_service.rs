//! Read-only view models for the dashboard screen.

use std::cmp::Reverse;

use itex_domain::{category_name, Category, CategoryId, Transaction, TransactionFilter, Year, YearlyBudget};
use serde::Serialize;

use crate::{
    time::Clock, BudgetService, FilterService, SpendOptions, SummaryService, TrendSeries,
    TrendService, DashboardState,
};

/// Number of rows the recent-transactions list shows unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Actual versus planned spend for one category in one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
    pub category_id: CategoryId,
    pub name: String,
    pub actual: f64,
    pub planned: f64,
}

impl CategoryCard {
    /// `actual / planned`, `None` when nothing is planned.
    pub fn utilisation(&self) -> Option<f64> {
        (self.planned > 0.0).then(|| self.actual / self.planned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetCard {
    pub year: Year,
    pub total_budget: f64,
    pub total_spent: f64,
}

impl BudgetCard {
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub category_id: CategoryId,
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlanRow {
    pub category_id: CategoryId,
    pub name: String,
    /// One cell per entry of [`BudgetPlan::years`].
    pub amounts: Vec<f64>,
}

/// Category-by-year planning grid with a totals row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlan {
    pub years: Vec<Year>,
    pub rows: Vec<BudgetPlanRow>,
    pub totals: Vec<f64>,
}

/// Everything the dashboard renders for one filter and one selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub year: Year,
    pub category_cards: Vec<CategoryCard>,
    pub budget_card: BudgetCard,
    pub breakdown: Vec<BreakdownSlice>,
    pub trend: TrendSeries,
    pub recent: Vec<Transaction>,
    pub planned: Vec<Transaction>,
}

pub struct DashboardService;

impl DashboardService {
    /// Current year when the budget covers it, else the latest budget year,
    /// else the current year.
    pub fn default_year(budget: &YearlyBudget, clock: &dyn Clock) -> Year {
        let current = clock.current_year();
        let years = budget.years();
        if years.contains(&current) {
            return current;
        }
        years.last().copied().unwrap_or(current)
    }

    pub fn category_cards(
        state: &DashboardState,
        transactions: &[Transaction],
        year: Year,
    ) -> Vec<CategoryCard> {
        let options = SpendOptions::paid().in_year(year);
        state
            .categories()
            .iter()
            .map(|category| CategoryCard {
                category_id: category.id.clone(),
                name: category.name.clone(),
                actual: SummaryService::spend_by_category(transactions, &category.id, options),
                planned: state.budget().amount_for(&category.id, year),
            })
            .collect()
    }

    pub fn budget_card(state: &DashboardState, transactions: &[Transaction], year: Year) -> BudgetCard {
        BudgetCard {
            year,
            total_budget: BudgetService::total_for_year(state.budget(), state.categories(), year),
            total_spent: SummaryService::total_spent(transactions, SpendOptions::paid().in_year(year)),
        }
    }

    /// Total amount per category in first-appearance order. Categories that
    /// sum to zero are left out.
    pub fn expense_breakdown(
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Vec<BreakdownSlice> {
        let mut slices: Vec<BreakdownSlice> = Vec::new();
        for txn in transactions {
            match slices.iter_mut().find(|slice| slice.category_id == txn.category_id) {
                Some(slice) => slice.amount += txn.amount,
                None => slices.push(BreakdownSlice {
                    category_id: txn.category_id.clone(),
                    label: category_name(categories, &txn.category_id).to_string(),
                    amount: txn.amount,
                }),
            }
        }
        slices.retain(|slice| slice.amount != 0.0);
        slices
    }

    /// Newest first; equal dates keep their list order.
    pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by_key(|txn| Reverse(txn.date));
        sorted.truncate(limit);
        sorted
    }

    /// Planned transactions, oldest first.
    pub fn planned_expenses(transactions: &[Transaction]) -> Vec<Transaction> {
        let mut planned: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| !txn.is_paid())
            .cloned()
            .collect();
        planned.sort_by_key(|txn| txn.date);
        planned
    }

    pub fn budget_plan(budget: &YearlyBudget, categories: &[Category]) -> BudgetPlan {
        let years = budget.years();
        let rows = categories
            .iter()
            .map(|category| BudgetPlanRow {
                category_id: category.id.clone(),
                name: category.name.clone(),
                amounts: years
                    .iter()
                    .map(|year| budget.amount_for(&category.id, *year))
                    .collect(),
            })
            .collect();
        let totals = years
            .iter()
            .map(|year| BudgetService::total_for_year(budget, categories, *year))
            .collect();
        BudgetPlan { years, rows, totals }
    }

    /// Applies `filter` once and derives every view model from the result.
    pub fn build(
        state: &DashboardState,
        filter: &TransactionFilter,
        year: Year,
        recent_limit: usize,
        clock: &dyn Clock,
    ) -> DashboardView {
        let filtered = FilterService::apply(state.transactions(), filter);
        DashboardView {
            year,
            category_cards: Self::category_cards(state, &filtered, year),
            budget_card: Self::budget_card(state, &filtered, year),
            breakdown: Self::expense_breakdown(&filtered, state.categories()),
            trend: TrendService::for_state(state, &filtered, clock),
            recent: Self::recent_transactions(&filtered, recent_limit),
            planned: Self::planned_expenses(&filtered),
        }
    }
}
