use itex_core::{DashboardService, TrendService};

use crate::cli::commands::CommandEntry;
use crate::cli::core::{parse_year, usage, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::render;
use crate::errors::ExpenseError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Show spend cards, breakdown, recent and planned transactions",
            "dashboard [year] [--json]",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "trend",
            "Show quarterly planned versus actual spend",
            "trend",
            cmd_trend,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 2 {
        return Err(usage("dashboard [year] [--json]"));
    }
    let mut as_json = false;
    for arg in args {
        match *arg {
            "--json" => as_json = true,
            value => context.selected_year = Some(parse_year(value)?),
        }
    }

    let view = DashboardService::build(
        &context.state,
        &context.filter,
        context.year(),
        context.config.recent_limit,
        context.clock.as_ref(),
    );

    if as_json {
        let json = serde_json::to_string_pretty(&view).map_err(ExpenseError::from)?;
        output::block(json);
        return Ok(());
    }

    let money = context.money();
    let categories = context.state.categories();

    if !context.filter.is_identity() {
        output::info("Filters are active; `filter show` lists them.");
    }

    output::section(format!("Financial Overview {}", view.year));
    output::block(render::category_cards(&view.category_cards, &view.budget_card, &money).render());

    output::section("Expense Category Breakdown");
    if view.breakdown.is_empty() {
        output::info("No data available.");
    } else {
        output::block(render::breakdown(&view.breakdown, &money).render());
    }

    output::section("Recent Transactions");
    if view.recent.is_empty() {
        output::info("No transactions match the current filters.");
    } else {
        output::block(render::transactions(&view.recent, categories, &money).render());
    }

    output::section("Planned Expenses");
    if view.planned.is_empty() {
        output::info("No planned expenses.");
    } else {
        output::block(render::transactions(&view.planned, categories, &money).render());
    }
    Ok(())
}

fn cmd_trend(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage("trend"));
    }
    let filtered = context.filtered_transactions();
    let series = TrendService::for_state(&context.state, &filtered, context.clock.as_ref());

    output::section("Spending Trend");
    if series.is_empty() {
        output::info("No budget years or transactions to chart.");
        return Ok(());
    }
    output::block(render::trend(&series, &context.money()).render());
    Ok(())
}
