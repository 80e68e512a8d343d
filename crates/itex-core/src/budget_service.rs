//! Budget table aggregation and budget-editing commands.

use itex_domain::{
    BudgetRow, Category, CategoryId, Transaction, Year, YearlyBudget, QUARTERS_PER_YEAR,
};
use serde::Serialize;
use tracing::debug;

use crate::{time::Clock, CoreError, CoreResult, DashboardState};

/// Planned spend per consecutive quarter across the observed year range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedSeries {
    pub series: Vec<f64>,
    pub labels: Vec<String>,
    pub start_year: Year,
}

impl PlannedSeries {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Longest span of years a planned series covers. Wider ranges keep the
/// latest years.
pub const MAX_SERIES_YEARS: i64 = 200;

/// Reads and edits the sparse [`YearlyBudget`] table.
pub struct BudgetService;

impl BudgetService {
    /// Years present under any category, ascending and unique.
    pub fn years(budget: &YearlyBudget) -> Vec<Year> {
        budget.years()
    }

    /// Planned amount for `(category, year)`; zero when absent.
    pub fn amount_for(budget: &YearlyBudget, category: &CategoryId, year: Year) -> f64 {
        budget.amount_for(category, year)
    }

    /// Sum of the planned amounts of `categories` for `year`.
    pub fn total_for_year(budget: &YearlyBudget, categories: &[Category], year: Year) -> f64 {
        categories
            .iter()
            .map(|category| Self::amount_for(budget, &category.id, year))
            .sum()
    }

    /// Quarterly planned series spanning every budget year and every
    /// transaction year. Each quarter gets a quarter of the annual total.
    pub fn quarterly_planned_series(
        budget: &YearlyBudget,
        categories: &[Category],
        transactions: &[Transaction],
        clock: &dyn Clock,
    ) -> PlannedSeries {
        let Some((first, last)) = Self::year_range(budget, transactions) else {
            return PlannedSeries {
                series: Vec::new(),
                labels: Vec::new(),
                start_year: clock.current_year(),
            };
        };

        let span = i64::from(last) - i64::from(first) + 1;
        let first = if span > MAX_SERIES_YEARS {
            debug!(first, last, "planned series clamped to the latest years");
            // last - first >= MAX_SERIES_YEARS, so this cannot underflow
            last - (MAX_SERIES_YEARS as Year - 1)
        } else {
            first
        };
        let span = span.min(MAX_SERIES_YEARS) as usize;
        let mut series = Vec::with_capacity(span * QUARTERS_PER_YEAR);
        let mut labels = Vec::with_capacity(span * QUARTERS_PER_YEAR);
        for year in first..=last {
            let quarterly = Self::total_for_year(budget, categories, year) / QUARTERS_PER_YEAR as f64;
            for quarter in 0..QUARTERS_PER_YEAR {
                series.push(quarterly);
                labels.push(quarter_label(year, quarter));
            }
        }

        PlannedSeries {
            series,
            labels,
            start_year: first,
        }
    }

    /// Inclusive `[min, max]` over budget years and transaction years.
    pub fn year_range(budget: &YearlyBudget, transactions: &[Transaction]) -> Option<(Year, Year)> {
        budget
            .years()
            .into_iter()
            .chain(transactions.iter().map(Transaction::year))
            .fold(None, |range, year| match range {
                None => Some((year, year)),
                Some((low, high)) => Some((low.min(year), high.max(year))),
            })
    }

    /// Copy-on-write edit of a single cell, for building a draft table before
    /// committing it with [`BudgetService::update_yearly_budget`].
    pub fn set_amount(
        budget: &YearlyBudget,
        category: &CategoryId,
        year: Year,
        amount: f64,
    ) -> CoreResult<YearlyBudget> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "budget amount must be zero or positive, got {amount}"
            )));
        }
        Ok(budget.with_amount(category, year, amount))
    }

    /// Replaces the whole table (last write wins).
    pub fn update_yearly_budget(state: &DashboardState, budget: YearlyBudget) -> DashboardState {
        debug!(years = ?budget.years(), "replacing yearly budget");
        state.with_budget(budget)
    }

    /// Removes `year` from every category row; emptied rows stay as `{}`.
    pub fn delete_budget_year(state: &DashboardState, year: Year) -> DashboardState {
        debug!(year, "deleting budget year");
        state.with_budget(state.budget().without_year(year))
    }

    /// Year the next [`BudgetService::add_budget_year`] call would create;
    /// `None` when the latest year is [`Year::MAX`].
    pub fn next_budget_year(budget: &YearlyBudget, clock: &dyn Clock) -> Option<Year> {
        match Self::years(budget).last() {
            Some(latest) => latest.checked_add(1),
            None => Some(clock.current_year()),
        }
    }

    /// Appends the next year with a zero entry for every category. A no-op
    /// when no next year exists.
    pub fn add_budget_year(state: &DashboardState, clock: &dyn Clock) -> DashboardState {
        let Some(next_year) = Self::next_budget_year(state.budget(), clock) else {
            debug!("no budget year after the latest one");
            return state.clone();
        };
        if Self::years(state.budget()).contains(&next_year) {
            return state.clone();
        }
        debug!(year = next_year, "adding budget year");
        let budget = state
            .categories()
            .iter()
            .fold(state.budget().clone(), |budget, category| {
                budget.with_amount(&category.id, next_year, 0.0)
            });
        state.with_budget(budget)
    }

    /// Row for a freshly created category: an explicit zero for every year the
    /// table already knows about.
    pub fn zero_row(budget: &YearlyBudget) -> BudgetRow {
        Self::years(budget).into_iter().map(|year| (year, 0.0)).collect()
    }
}

/// `"<year> Q1"` for the first quarter of a year, bare `"Q2"`..`"Q4"` after.
pub fn quarter_label(year: Year, quarter: usize) -> String {
    if quarter == 0 {
        format!("{year} Q1")
    } else {
        format!("Q{}", quarter + 1)
    }
}
