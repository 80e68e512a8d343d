//! Transaction filtering for the dashboard's header controls.

use itex_domain::{Transaction, TransactionFilter};

/// Applies a [`TransactionFilter`] to transaction lists.
///
/// Dates are timezone-naive calendar dates, so the inclusive start-of-day and
/// end-of-day bounds reduce to plain date comparison.
pub struct FilterService;

impl FilterService {
    /// Keeps the transactions that satisfy every active predicate, in their
    /// original order.
    pub fn apply(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
        if filter.is_identity() {
            return transactions.to_vec();
        }
        let needle = filter.vendor.to_lowercase();
        transactions
            .iter()
            .filter(|txn| Self::matches_with_needle(txn, filter, &needle))
            .cloned()
            .collect()
    }

    /// Evaluates the conjunction of all predicates for a single transaction.
    pub fn matches(txn: &Transaction, filter: &TransactionFilter) -> bool {
        Self::matches_with_needle(txn, filter, &filter.vendor.to_lowercase())
    }

    fn matches_with_needle(txn: &Transaction, filter: &TransactionFilter, needle: &str) -> bool {
        let vendor_match = needle.is_empty() || txn.vendor.to_lowercase().contains(needle);
        let after_start = filter.start_date.map_or(true, |start| txn.date >= start);
        let before_end = filter.end_date.map_or(true, |end| txn.date <= end);

        filter.category.matches(&txn.category_id)
            && vendor_match
            && filter.status.matches(txn.status)
            && after_start
            && before_end
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itex_domain::{
        CategoryFilter, StatusFilter, TransactionDraft, TransactionId, TransactionStatus,
    };

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: &str, on: NaiveDate, category: &str, vendor: &str, status: TransactionStatus) -> Transaction {
        Transaction::from_draft(
            TransactionId::from(id),
            TransactionDraft::new(on, category, "Item", vendor, 100.0).with_status(status),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("1", date(2023, 1, 15), "computers", "Dell", TransactionStatus::Paid),
            txn("2", date(2023, 1, 20), "software", "Adobe", TransactionStatus::Paid),
            txn("3", date(2024, 9, 1), "computers", "IBM", TransactionStatus::Planned),
            txn("4", date(2024, 10, 10), "software", "Atlassian", TransactionStatus::Planned),
        ]
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|txn| txn.id.as_str()).collect()
    }

    #[test]
    fn default_filter_returns_input_unchanged() {
        let all = sample();
        assert_eq!(FilterService::apply(&all, &TransactionFilter::default()), all);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filter = TransactionFilter {
            category: CategoryFilter::Only("computers".into()),
            status: StatusFilter::Only(TransactionStatus::Planned),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&FilterService::apply(&sample(), &filter)), vec!["3"]);
    }

    #[test]
    fn vendor_match_is_case_insensitive_substring() {
        let filter = TransactionFilter {
            vendor: "ATLAS".into(),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&FilterService::apply(&sample(), &filter)), vec!["4"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let filter = TransactionFilter {
            start_date: Some(date(2023, 1, 15)),
            end_date: Some(date(2024, 9, 1)),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&FilterService::apply(&sample(), &filter)), vec!["1", "2", "3"]);
    }

    #[test]
    fn open_ended_bounds_only_limit_one_side() {
        let filter = TransactionFilter {
            end_date: Some(date(2023, 1, 19)),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&FilterService::apply(&sample(), &filter)), vec!["1"]);

        let filter = TransactionFilter {
            start_date: Some(date(2024, 10, 10)),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&FilterService::apply(&sample(), &filter)), vec!["4"]);
    }

    #[test]
    fn unknown_category_filter_yields_nothing() {
        let filter = TransactionFilter {
            category: CategoryFilter::Only("printers".into()),
            ..TransactionFilter::default()
        };
        assert!(FilterService::apply(&sample(), &filter).is_empty());
    }
}
