//! Static data the dashboard starts from.

use chrono::NaiveDate;
use itex_core::DashboardState;
use itex_domain::{
    BudgetRow, Category, CategoryId, Transaction, TransactionDraft, TransactionId,
    TransactionStatus, Year, YearlyBudget,
};

const CATEGORIES: &[(&str, &str)] = &[
    ("computers", "Computers"),
    ("printers", "Printers"),
    ("software", "Software"),
];

const BUDGET: &[(&str, &[(Year, f64)])] = &[
    ("computers", &[(2023, 140_000.0), (2024, 140_000.0), (2025, 140_000.0)]),
    ("printers", &[(2023, 70_000.0), (2024, 65_000.0), (2025, 65_000.0)]),
    ("software", &[(2023, 45_000.0), (2024, 45_000.0), (2025, 40_000.0)]),
];

type SeedRow = (&'static str, &'static str, &'static str, &'static str, &'static str, f64, TransactionStatus);

const TRANSACTIONS: &[SeedRow] = &[
    ("1", "2023-01-15", "computers", "Laptop Upgrade", "Dell", 25_000.0, TransactionStatus::Paid),
    ("2", "2023-01-20", "software", "Adobe Creative Cloud", "Adobe", 6_000.0, TransactionStatus::Paid),
    ("3", "2023-02-10", "printers", "Toner Replacement", "HP", 5_000.0, TransactionStatus::Paid),
    ("4", "2023-03-05", "computers", "RAM Upgrade", "Crucial", 8_000.0, TransactionStatus::Paid),
    ("5", "2023-04-12", "software", "Microsoft 365", "Microsoft", 12_000.0, TransactionStatus::Paid),
    ("6", "2023-05-18", "printers", "Lease Payment", "Xerox", 15_000.0, TransactionStatus::Paid),
    ("7", "2023-06-22", "computers", "New Monitors", "LG", 10_550.0, TransactionStatus::Paid),
    ("8", "2023-07-30", "software", "Zoom Subscription", "Zoom", 4_500.0, TransactionStatus::Paid),
    ("9", "2024-08-15", "printers", "Maintenance Kit", "Brother", 3_000.0, TransactionStatus::Paid),
    ("10", "2024-09-01", "computers", "Server Maintenance", "IBM", 11_501.0, TransactionStatus::Planned),
    ("11", "2024-10-10", "software", "Jira License", "Atlassian", 7_500.0, TransactionStatus::Planned),
    ("12", "2024-11-20", "printers", "Paper Supplies", "Staples", 2_500.0, TransactionStatus::Planned),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name)| Category::new(*id, *name))
        .collect()
}

pub fn budget() -> YearlyBudget {
    BUDGET
        .iter()
        .map(|(id, cells)| (CategoryId::from(*id), cells.iter().copied().collect::<BudgetRow>()))
        .collect()
}

/// Seed transactions; rows whose date fails to parse are skipped.
pub fn transactions() -> Vec<Transaction> {
    TRANSACTIONS
        .iter()
        .filter_map(|(id, date, category, subcategory, vendor, amount, status)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            let draft = TransactionDraft::new(date, *category, *subcategory, *vendor, *amount)
                .with_status(*status);
            Some(Transaction::from_draft(TransactionId::from(*id), draft))
        })
        .collect()
}

/// Initial dashboard state: three categories, budgets for 2023-2025 and
/// twelve transactions.
pub fn initial_state() -> DashboardState {
    DashboardState::new(transactions(), categories(), budget())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_complete_and_consistent() {
        let state = initial_state();
        assert_eq!(state.transactions().len(), 12);
        assert_eq!(state.categories().len(), 3);
        assert_eq!(state.budget().years(), vec![2023, 2024, 2025]);

        for txn in state.transactions() {
            assert!(state.category(&txn.category_id).is_some(), "{}", txn.id);
            assert!(txn.amount > 0.0);
        }
    }

    #[test]
    fn three_year_totals_match_the_planned_budget() {
        let budget = budget();
        let three_years = |id: &str| -> f64 {
            (2023..=2025).map(|year| budget.amount_for(&id.into(), year)).sum()
        };
        assert_eq!(three_years("computers"), 420_000.0);
        assert_eq!(three_years("printers"), 200_000.0);
        assert_eq!(three_years("software"), 130_000.0);
    }
}
