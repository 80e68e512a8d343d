//! Quarterly planned-versus-actual trend series.

use itex_domain::{Transaction, Year, QUARTERS_PER_YEAR};
use serde::Serialize;
use tracing::trace;

use crate::{budget_service::PlannedSeries, time::Clock, BudgetService, DashboardState};

/// Aligned chart series: `labels[i]`, `planned[i]` and `actual[i]` describe
/// the same quarter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub planned: Vec<f64>,
    pub actual: Vec<f64>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, planned, actual)` triples.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.labels
            .iter()
            .zip(&self.planned)
            .zip(&self.actual)
            .map(|((label, planned), actual)| (label.as_str(), *planned, *actual))
    }
}

pub struct TrendService;

impl TrendService {
    /// Buckets paid transactions into the quarters of `planned`.
    ///
    /// Planned transactions never contribute. Transactions whose bucket falls
    /// outside the series are dropped.
    pub fn build(
        transactions: &[Transaction],
        planned: &[f64],
        labels: &[String],
        start_year: Year,
    ) -> TrendSeries {
        let mut actual = vec![0.0; planned.len()];
        for txn in transactions.iter().filter(|txn| txn.is_paid()) {
            match Self::bucket_index(txn, start_year, actual.len()) {
                Some(index) => actual[index] += txn.amount,
                None => trace!(id = %txn.id, date = %txn.date, "transaction outside trend range"),
            }
        }
        TrendSeries {
            labels: labels.to_vec(),
            planned: planned.to_vec(),
            actual,
        }
    }

    pub fn from_planned(transactions: &[Transaction], planned: &PlannedSeries) -> TrendSeries {
        Self::build(
            transactions,
            &planned.series,
            &planned.labels,
            planned.start_year,
        )
    }

    /// Planned series from the state's budget, actuals from `transactions`
    /// (typically the filtered list).
    pub fn for_state(
        state: &DashboardState,
        transactions: &[Transaction],
        clock: &dyn Clock,
    ) -> TrendSeries {
        let planned = BudgetService::quarterly_planned_series(
            state.budget(),
            state.categories(),
            transactions,
            clock,
        );
        Self::from_planned(transactions, &planned)
    }

    /// `(year - start_year) * 4 + quarter`, or `None` outside `[0, len)`.
    pub fn bucket_index(txn: &Transaction, start_year: Year, len: usize) -> Option<usize> {
        let index = (i64::from(txn.year()) - i64::from(start_year)) * QUARTERS_PER_YEAR as i64
            + txn.quarter() as i64;
        usize::try_from(index).ok().filter(|index| *index < len)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itex_domain::{TransactionDraft, TransactionId, TransactionStatus};

    use super::*;

    fn txn(id: &str, y: i32, m: u32, amount: f64, status: TransactionStatus) -> Transaction {
        Transaction::from_draft(
            TransactionId::from(id),
            TransactionDraft::new(
                NaiveDate::from_ymd_opt(y, m, 15).unwrap(),
                "computers",
                "Item",
                "Vendor",
                amount,
            )
            .with_status(status),
        )
    }

    fn labels() -> Vec<String> {
        ["2023 Q1", "Q2", "Q3", "Q4"].map(String::from).to_vec()
    }

    #[test]
    fn paid_transactions_land_in_their_quarter() {
        let trend = TrendService::build(
            &[
                txn("1", 2023, 1, 25000.0, TransactionStatus::Paid),
                txn("2", 2023, 3, 8000.0, TransactionStatus::Paid),
                txn("3", 2023, 12, 500.0, TransactionStatus::Paid),
            ],
            &[10.0; 4],
            &labels(),
            2023,
        );
        assert_eq!(trend.actual, vec![33000.0, 0.0, 0.0, 500.0]);
        assert_eq!(trend.planned, vec![10.0; 4]);
        assert_eq!(trend.len(), 4);
    }

    #[test]
    fn planned_transactions_never_count_as_actual() {
        let trend = TrendService::build(
            &[txn("1", 2023, 5, 9000.0, TransactionStatus::Planned)],
            &[0.0; 4],
            &labels(),
            2023,
        );
        assert_eq!(trend.actual, vec![0.0; 4]);
    }

    #[test]
    fn out_of_range_transactions_are_dropped() {
        let trend = TrendService::build(
            &[
                txn("early", 2022, 12, 1.0, TransactionStatus::Paid),
                txn("late", 2024, 1, 1.0, TransactionStatus::Paid),
            ],
            &[0.0; 4],
            &labels(),
            2023,
        );
        assert_eq!(trend.actual, vec![0.0; 4]);
    }

    #[test]
    fn points_zip_the_three_series() {
        let trend = TrendService::build(
            &[txn("1", 2023, 4, 7.0, TransactionStatus::Paid)],
            &[1.0, 2.0, 3.0, 4.0],
            &labels(),
            2023,
        );
        let points: Vec<_> = trend.points().collect();
        assert_eq!(points[1], ("Q2", 2.0, 7.0));
    }
}
