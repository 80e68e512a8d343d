//! Text renderings of the dashboard view models.

use itex_core::{BudgetCard, BudgetPlan, BreakdownSlice, CategoryCard, TrendSeries};
use itex_domain::{category_name, Category, CategoryFilter, StatusFilter, Transaction, TransactionFilter};

use crate::cli::table::{Table, TableColumn};
use crate::currency::{format_date, MoneyFormat};

pub fn category_cards(cards: &[CategoryCard], budget: &BudgetCard, money: &MoneyFormat) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Category").max_width(24),
        TableColumn::right("Spent"),
        TableColumn::right("Planned"),
        TableColumn::right("Used"),
    ]);
    for card in cards {
        table.push_row(vec![
            card.name.clone(),
            money.whole(card.actual),
            money.whole(card.planned),
            card.utilisation()
                .map(|ratio| format!("{:.0}%", ratio * 100.0))
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    table.footer = Some(vec![
        format!("Total {}", budget.year),
        money.whole(budget.total_spent),
        money.whole(budget.total_budget),
        format!("{} left", money.whole(budget.remaining())),
    ]);
    table
}

pub fn breakdown(slices: &[BreakdownSlice], money: &MoneyFormat) -> Table {
    let total: f64 = slices.iter().map(|slice| slice.amount).sum();
    let mut table = Table::new(vec![
        TableColumn::left("Category").max_width(24),
        TableColumn::right("Amount"),
        TableColumn::right("Share"),
    ]);
    for slice in slices {
        let share = if total > 0.0 { slice.amount / total * 100.0 } else { 0.0 };
        table.push_row(vec![
            slice.label.clone(),
            money.amount(slice.amount),
            format!("{share:.1}%"),
        ]);
    }
    table
}

pub fn trend(series: &TrendSeries, money: &MoneyFormat) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Quarter"),
        TableColumn::right("Planned"),
        TableColumn::right("Actual"),
    ]);
    for (label, planned, actual) in series.points() {
        table.push_row(vec![label.to_string(), money.whole(planned), money.whole(actual)]);
    }
    table
}

pub fn transactions(transactions: &[Transaction], categories: &[Category], money: &MoneyFormat) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Category").max_width(20),
        TableColumn::left("Subcategory").max_width(28),
        TableColumn::left("Vendor").max_width(20),
        TableColumn::right("Amount"),
        TableColumn::left("Status"),
    ]);
    for txn in transactions {
        table.push_row(vec![
            txn.id.to_string(),
            format_date(txn.date),
            category_name(categories, &txn.category_id).to_string(),
            txn.subcategory.clone(),
            txn.vendor.clone(),
            money.amount(txn.amount),
            txn.status.to_string(),
        ]);
    }
    table
}

/// Categories as rows, budget years as columns, totals underneath.
pub fn budget_plan(plan: &BudgetPlan, money: &MoneyFormat) -> Table {
    let mut columns = vec![TableColumn::left("Category").max_width(24)];
    columns.extend(plan.years.iter().map(|year| TableColumn::right(year.to_string())));
    let mut table = Table::new(columns);
    for row in &plan.rows {
        let mut cells = vec![row.name.clone()];
        cells.extend(row.amounts.iter().map(|amount| money.whole(*amount)));
        table.push_row(cells);
    }
    let mut totals = vec!["Total".to_string()];
    totals.extend(plan.totals.iter().map(|amount| money.whole(*amount)));
    table.footer = Some(totals);
    table
}

pub fn categories(categories: &[Category]) -> Table {
    let mut table = Table::new(vec![TableColumn::left("ID"), TableColumn::left("Name")]);
    for category in categories {
        table.push_row(vec![category.id.to_string(), category.name.clone()]);
    }
    table
}

/// `(label, value)` pairs describing the active filter.
pub fn filter_summary(filter: &TransactionFilter, categories: &[Category]) -> Vec<(&'static str, String)> {
    let category = match &filter.category {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Only(id) => category_name(categories, id).to_string(),
    };
    let status = match filter.status {
        StatusFilter::All => "All".to_string(),
        StatusFilter::Only(status) => status.to_string(),
    };
    let vendor = if filter.vendor.is_empty() {
        "-".to_string()
    } else {
        filter.vendor.clone()
    };
    let bound = |date: Option<chrono::NaiveDate>| date.map(format_date).unwrap_or_else(|| "-".into());
    vec![
        ("Category", category),
        ("Vendor", vendor),
        ("Status", status),
        ("From", bound(filter.start_date)),
        ("To", bound(filter.end_date)),
    ]
}

pub fn key_values(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(label, value)| format!("  {label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use itex_core::DashboardService;

    use super::*;
    use crate::seed;

    #[test]
    fn budget_plan_table_lists_years_and_totals() {
        let plan = DashboardService::budget_plan(&seed::budget(), &seed::categories());
        let rendered = budget_plan(&plan, &MoneyFormat::default()).render();

        let header = rendered.lines().next().unwrap();
        assert!(header.contains("2023") && header.contains("2025"));
        assert!(rendered.contains("$140,000"));
        assert!(rendered.lines().last().unwrap().contains("$255,000"));
    }

    #[test]
    fn transaction_rows_use_display_formats() {
        let rendered = transactions(&seed::transactions()[..1], &seed::categories(), &MoneyFormat::default())
            .render();
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.contains("Jan 15, 2023"));
        assert!(row.contains("Computers"));
        assert!(row.contains("$25,000.00"));
    }

    #[test]
    fn filter_summary_shows_names_and_open_bounds() {
        let filter = TransactionFilter {
            category: CategoryFilter::Only("printers".into()),
            ..TransactionFilter::default()
        };
        let summary = filter_summary(&filter, &seed::categories());
        assert_eq!(summary[0], ("Category", "Printers".to_string()));
        assert_eq!(summary[3], ("From", "-".to_string()));
    }
}
