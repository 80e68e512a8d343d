//! Actual-spend reductions over transaction lists.

use itex_domain::{Amounted, CategoryId, Transaction, Year};

/// Restricts which transactions count towards a spend total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpendOptions {
    /// Count only [`itex_domain::TransactionStatus::Paid`] transactions.
    pub only_paid: bool,
    /// Count only transactions dated in this year.
    pub year: Option<Year>,
}

impl SpendOptions {
    pub fn paid() -> Self {
        Self {
            only_paid: true,
            year: None,
        }
    }

    pub fn in_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    fn counts(&self, txn: &Transaction) -> bool {
        self.year.map_or(true, |year| txn.year() == year) && (!self.only_paid || txn.is_paid())
    }
}

/// Pure spend totals; safe to memoise on input identity.
pub struct SummaryService;

impl SummaryService {
    pub fn spend_by_category(
        transactions: &[Transaction],
        category: &CategoryId,
        options: SpendOptions,
    ) -> f64 {
        transactions
            .iter()
            .filter(|txn| &txn.category_id == category && options.counts(txn))
            .map(Amounted::amount)
            .sum()
    }

    pub fn total_spent(transactions: &[Transaction], options: SpendOptions) -> f64 {
        transactions
            .iter()
            .filter(|txn| options.counts(txn))
            .map(Amounted::amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itex_domain::{TransactionDraft, TransactionId, TransactionStatus};

    use super::*;

    fn txn(id: &str, year: i32, category: &str, amount: f64, status: TransactionStatus) -> Transaction {
        Transaction::from_draft(
            TransactionId::from(id),
            TransactionDraft::new(
                NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
                category,
                "Item",
                "Vendor",
                amount,
            )
            .with_status(status),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("1", 2023, "computers", 25000.0, TransactionStatus::Paid),
            txn("2", 2024, "computers", 11501.0, TransactionStatus::Planned),
            txn("3", 2024, "computers", 3000.0, TransactionStatus::Paid),
            txn("4", 2024, "printers", 2500.0, TransactionStatus::Planned),
        ]
    }

    #[test]
    fn category_spend_without_restrictions_counts_everything() {
        let total =
            SummaryService::spend_by_category(&sample(), &"computers".into(), SpendOptions::default());
        assert_eq!(total, 39501.0);
    }

    #[test]
    fn planned_transactions_are_excluded_when_only_paid() {
        let total =
            SummaryService::spend_by_category(&sample(), &"computers".into(), SpendOptions::paid());
        assert_eq!(total, 28000.0);
        assert_eq!(
            SummaryService::spend_by_category(&sample(), &"printers".into(), SpendOptions::paid()),
            0.0
        );
    }

    #[test]
    fn year_restriction_composes_with_paid_flag() {
        let options = SpendOptions::paid().in_year(2024);
        assert_eq!(SummaryService::total_spent(&sample(), options), 3000.0);
        assert_eq!(
            SummaryService::total_spent(&sample(), SpendOptions::default().in_year(2024)),
            17001.0
        );
    }

    #[test]
    fn repeated_calls_are_stable() {
        let data = sample();
        let first = SummaryService::total_spent(&data, SpendOptions::paid());
        let second = SummaryService::total_spent(&data, SpendOptions::paid());
        assert_eq!(first, second);
    }
}
