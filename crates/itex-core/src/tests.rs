use chrono::NaiveDate;
use itex_domain::{
    category_name, Category, CategoryFilter, FilterPatch, StatusFilter, Transaction,
    TransactionDraft, TransactionFilter, TransactionStatus, YearlyBudget,
};

use crate::{
    BudgetService, CategoryService, CsvExporter, DashboardService, DashboardState, FixedClock,
    SpendOptions, SummaryService, TransactionService, TrendService,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::at_date(date(2024, 9, 1))
}

fn draft(on: NaiveDate, category: &str, vendor: &str, amount: f64) -> TransactionDraft {
    TransactionDraft::new(on, category, "Item", vendor, amount)
}

fn office_state() -> DashboardState {
    let budget = YearlyBudget::new()
        .with_amount(&"computers".into(), 2024, 140_000.0)
        .with_amount(&"computers".into(), 2025, 120_000.0)
        .with_amount(&"printers".into(), 2024, 60_000.0);
    DashboardState::new(
        Vec::new(),
        vec![
            Category::new("computers", "Computers"),
            Category::new("printers", "Printers"),
        ],
        budget,
    )
}

fn add(state: DashboardState, draft: TransactionDraft) -> DashboardState {
    TransactionService::add(&state, draft, &clock())
        .expect("valid draft")
        .0
}

#[test]
fn single_category_budget_splits_evenly_into_quarters() {
    let budget = YearlyBudget::new().with_amount(&"computers".into(), 2024, 140_000.0);
    let categories = vec![Category::new("computers", "Computers")];

    assert_eq!(BudgetService::total_for_year(&budget, &categories, 2024), 140_000.0);
    let planned = BudgetService::quarterly_planned_series(&budget, &categories, &[], &clock());
    assert_eq!(planned.series, vec![35_000.0; 4]);
    assert_eq!(planned.labels, vec!["2024 Q1", "Q2", "Q3", "Q4"]);
    assert_eq!(planned.start_year, 2024);

    let state = DashboardState::new(Vec::new(), categories, budget);
    let deleted = BudgetService::delete_budget_year(&state, 2024);
    assert!(deleted.budget().has_row(&"computers".into()));
    assert!(deleted.budget().row(&"computers".into()).unwrap().is_empty());
    assert!(deleted.budget().years().is_empty());
}

#[test]
fn quarterly_planned_values_add_up_to_each_annual_total() {
    let state = office_state();
    let planned = BudgetService::quarterly_planned_series(
        state.budget(),
        state.categories(),
        state.transactions(),
        &clock(),
    );
    for (offset, year) in (2024..=2025).enumerate() {
        let quarters: f64 = planned.series[offset * 4..offset * 4 + 4].iter().sum();
        let annual = BudgetService::total_for_year(state.budget(), state.categories(), year);
        assert!((quarters - annual).abs() < 1e-6);
    }
}

#[test]
fn new_category_gets_zero_for_every_known_year() {
    let (state, id) = CategoryService::add(&office_state(), "New Cat", &clock()).unwrap();
    let row = state.budget().row(&id).expect("row created");

    assert_eq!(row.iter().collect::<Vec<_>>(), vec![(&2024, &0.0), (&2025, &0.0)]);
    let plan = DashboardService::budget_plan(state.budget(), state.categories());
    assert_eq!(plan.rows.last().unwrap().amounts, vec![0.0, 0.0]);
}

#[test]
fn rename_keeps_transactions_and_budget_linked() {
    let state = add(office_state(), draft(date(2024, 2, 1), "printers", "HP", 900.0));
    let renamed = CategoryService::rename(&state, &"printers".into(), "Print & Scan").unwrap();
    let txn = &renamed.transactions()[0];

    assert_eq!(category_name(renamed.categories(), &txn.category_id), "Print & Scan");
    assert_eq!(renamed.budget().amount_for(&"printers".into(), 2024), 60_000.0);
    assert!(renamed.same_transactions(&state));
    assert!(renamed.same_budget(&state));
}

#[test]
fn planned_transactions_never_count_as_actual_spend() {
    let state = add(office_state(), draft(date(2024, 5, 1), "computers", "Dell", 2_000.0));
    let state = add(
        state,
        draft(date(2024, 5, 2), "computers", "Lenovo", 3_000.0).with_status(TransactionStatus::Paid),
    );

    let paid = SummaryService::spend_by_category(
        state.transactions(),
        &"computers".into(),
        SpendOptions::paid(),
    );
    assert_eq!(paid, 3_000.0);

    let trend = TrendService::for_state(&state, state.transactions(), &clock());
    assert_eq!(trend.actual.iter().sum::<f64>(), 3_000.0);
    assert_eq!(trend.actual[1], 3_000.0);
}

#[test]
fn mark_paid_moves_spend_into_the_trend() {
    let (state, id) = TransactionService::add(
        &office_state(),
        draft(date(2025, 11, 3), "computers", "Apple", 5_000.0),
        &clock(),
    )
    .unwrap();
    let before = TrendService::for_state(&state, state.transactions(), &clock());
    let after_state = TransactionService::mark_paid(&state, &id).unwrap();
    let after = TrendService::for_state(&after_state, after_state.transactions(), &clock());

    assert_eq!(before.actual.iter().sum::<f64>(), 0.0);
    assert_eq!(after.actual[7], 5_000.0);
}

#[test]
fn dashboard_build_applies_the_filter_everywhere() {
    let mut state = office_state();
    for (on, category, vendor, amount, status) in [
        (date(2024, 1, 10), "computers", "Dell", 1_000.0, TransactionStatus::Paid),
        (date(2024, 3, 31), "printers", "HP", 400.0, TransactionStatus::Paid),
        (date(2024, 4, 1), "computers", "Dell", 700.0, TransactionStatus::Planned),
        (date(2025, 2, 1), "computers", "Apple", 900.0, TransactionStatus::Paid),
    ] {
        state = add(state, draft(on, category, vendor, amount).with_status(status));
    }
    let filter = TransactionFilter::default().apply(FilterPatch {
        category: Some(CategoryFilter::Only("computers".into())),
        vendor: Some("dell".into()),
        ..FilterPatch::default()
    });

    let view = DashboardService::build(&state, &filter, 2024, 5, &clock());

    assert_eq!(view.category_cards[0].actual, 1_000.0);
    assert_eq!(view.category_cards[1].actual, 0.0);
    assert_eq!(view.budget_card.total_budget, 200_000.0);
    assert_eq!(view.budget_card.total_spent, 1_000.0);
    assert_eq!(view.breakdown.len(), 1);
    assert_eq!(view.breakdown[0].amount, 1_700.0);
    assert_eq!(view.recent.len(), 2);
    assert_eq!(view.recent[0].date, date(2024, 4, 1));
    assert_eq!(view.planned.len(), 1);
    assert_eq!(view.trend.labels.len(), 8);

    let paid_only = filter.apply(FilterPatch {
        status: Some(StatusFilter::Only(TransactionStatus::Paid)),
        ..FilterPatch::default()
    });
    let view = DashboardService::build(&state, &paid_only, 2024, 5, &clock());
    assert!(view.planned.is_empty());
}

#[test]
fn exported_vendor_survives_a_csv_parse() {
    let state = add(
        office_state(),
        draft(date(2024, 6, 1), "computers", "Acme, \"Inc\"", 10.0),
    );
    let text = CsvExporter::to_csv(state.transactions(), state.categories()).unwrap();
    assert!(text.contains("\"Acme, \"\"Inc\"\"\""));

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[2], "Computers");
    assert_eq!(&record[4], "Acme, \"Inc\"");
}

#[test]
fn commands_leave_the_previous_state_untouched() {
    let original = add(office_state(), draft(date(2024, 6, 1), "computers", "Dell", 10.0));
    let snapshot: Vec<Transaction> = original.transactions().to_vec();
    let id = snapshot[0].id.clone();

    let _ = TransactionService::mark_paid(&original, &id).unwrap();
    let _ = TransactionService::remove(&original, &id).unwrap();
    let _ = BudgetService::add_budget_year(&original, &clock());

    assert_eq!(original.transactions(), snapshot.as_slice());
    assert_eq!(original.budget().years(), vec![2024, 2025]);
}

#[test]
fn add_budget_year_appends_after_the_latest() {
    let next = BudgetService::add_budget_year(&office_state(), &clock());
    assert_eq!(next.budget().years(), vec![2024, 2025, 2026]);
    assert_eq!(next.budget().amount_for(&"printers".into(), 2026), 0.0);
    assert!(next.budget().row(&"printers".into()).unwrap().contains_key(&2026));

    let empty = DashboardState::new(Vec::new(), vec![Category::new("a", "A")], YearlyBudget::new());
    let seeded = BudgetService::add_budget_year(&empty, &clock());
    assert_eq!(seeded.budget().years(), vec![2024]);
}
