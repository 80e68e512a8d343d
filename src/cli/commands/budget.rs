use itex_core::{BudgetService, DashboardService};

use crate::cli::commands::{ArgKind, CommandEntry, Subcommand};
use crate::cli::core::{
    parse_amount, parse_year, usage, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::render;

const SUBCOMMANDS: &[Subcommand] = &[
    Subcommand::new("show", &[]),
    Subcommand::new("set", &[ArgKind::Category]),
    Subcommand::new("add-year", &[]),
    Subcommand::new("remove-year", &[]),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Show or edit the yearly budget plan",
        "budget <show|set <category> <year> <amount>|add-year|remove-year <year>>",
        cmd_budget,
    )
    .with_subcommands(SUBCOMMANDS)]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return handle_show(context);
    };
    match action.to_lowercase().as_str() {
        "show" => handle_show(context),
        "set" => handle_set(context, rest),
        "add-year" => handle_add_year(context),
        "remove-year" | "delete-year" => handle_remove_year(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown budget subcommand `{}`",
            other
        ))),
    }
}

fn handle_show(context: &ShellContext) -> CommandResult {
    output::section("Budget Plan");
    let plan = DashboardService::budget_plan(context.state.budget(), context.state.categories());
    if plan.years.is_empty() {
        output::info("No budget years yet. Use `budget add-year` to start one.");
        return Ok(());
    }
    output::block(render::budget_plan(&plan, &context.money()).render());
    Ok(())
}

fn handle_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, year, amount] = args else {
        return Err(usage("budget set <category> <year> <amount>"));
    };
    let category = context.resolve_category(category)?;
    let year = parse_year(year)?;
    let amount = parse_amount(amount)?;

    let budget = BudgetService::set_amount(context.state.budget(), &category, year, amount)?;
    let next = BudgetService::update_yearly_budget(&context.state, budget);
    context.replace_state(next);
    output::success(format!(
        "Budget for `{}` in {} set to {}.",
        category,
        year,
        context.money().whole(amount)
    ));
    Ok(())
}

fn handle_add_year(context: &mut ShellContext) -> CommandResult {
    let Some(year) = BudgetService::next_budget_year(context.state.budget(), context.clock.as_ref())
    else {
        output::warning("The budget already ends at the last supported year.");
        return Ok(());
    };
    let next = BudgetService::add_budget_year(&context.state, context.clock.as_ref());
    context.replace_state(next);
    output::success(format!("Budget year {} added.", year));
    Ok(())
}

fn handle_remove_year(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [year] = args else {
        return Err(usage("budget remove-year <year>"));
    };
    let year = parse_year(year)?;
    if !context.state.budget().years().contains(&year) {
        output::warning(format!("Budget has no entries for {}.", year));
        return Ok(());
    }
    let next = BudgetService::delete_budget_year(&context.state, year);
    context.replace_state(next);
    if context.selected_year == Some(year) {
        context.selected_year = None;
    }
    output::success(format!("Budget year {} removed.", year));
    Ok(())
}
