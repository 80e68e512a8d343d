use itex_core::{CoreError, DashboardService, TransactionService};
use itex_domain::{Displayable, TransactionDraft, TransactionId};

use crate::cli::commands::{ArgKind, CommandEntry, Subcommand};
use crate::cli::core::{
    parse_amount, parse_date, parse_status, usage, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::render;

const ADD_USAGE: &str =
    "transaction add <date> <category> <subcategory> <vendor> <amount> [planned|paid]";
const EDIT_USAGE: &str =
    "transaction edit <id> <date|category|subcategory|vendor|amount|status> <value>";

const SUBCOMMANDS: &[Subcommand] = &[
    Subcommand::new("list", &[]),
    Subcommand::new(
        "add",
        &[ArgKind::Text, ArgKind::Category, ArgKind::Text, ArgKind::Text, ArgKind::Text, ArgKind::Status],
    ),
    Subcommand::new("edit", &[]),
    Subcommand::new("remove", &[]),
    Subcommand::new("pay", &[]),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "transaction",
        "List, add, edit, remove or pay transactions",
        "transaction <list|add|edit|remove|pay>",
        cmd_transaction,
    )
    .with_subcommands(SUBCOMMANDS)]
}

fn cmd_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return handle_list(context);
    };
    match action.to_lowercase().as_str() {
        "list" => handle_list(context),
        "add" => handle_add(context, rest),
        "edit" => handle_edit(context, rest),
        "remove" | "delete" => handle_remove(context, rest),
        "pay" => handle_pay(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown transaction subcommand `{}`",
            other
        ))),
    }
}

fn handle_list(context: &ShellContext) -> CommandResult {
    let filtered = context.filtered_transactions();
    output::section("Transactions");
    if filtered.is_empty() {
        output::info("No transactions match the current filters.");
        return Ok(());
    }
    let sorted = DashboardService::recent_transactions(&filtered, filtered.len());
    let table = render::transactions(&sorted, context.state.categories(), &context.money());
    output::block(table.render());
    output::info(format!("{} transaction(s).", sorted.len()));
    Ok(())
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !(5..=6).contains(&args.len()) {
        return Err(usage(ADD_USAGE));
    }
    let date = parse_date(args[0])?;
    let category = context.resolve_category(args[1])?;
    let amount = parse_amount(args[4])?;
    let mut draft = TransactionDraft::new(date, category, args[2], args[3], amount);
    if let Some(status) = args.get(5) {
        draft = draft.with_status(parse_status(status)?);
    }

    let (next, id) = TransactionService::add(&context.state, draft, context.clock.as_ref())?;
    context.replace_state(next);
    output::success(format!("Transaction `{}` added.", id));
    Ok(())
}

fn handle_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 {
        return Err(usage(EDIT_USAGE));
    }
    let id = TransactionId::from(args[0]);
    let mut updated = context
        .state
        .transaction(&id)
        .cloned()
        .ok_or_else(|| CoreError::TransactionNotFound(id.clone()))?;
    let value = args[2..].join(" ");

    match args[1].to_lowercase().as_str() {
        "date" => updated.date = parse_date(&value)?,
        "category" => updated.category_id = context.resolve_category(&value)?,
        "subcategory" => updated.subcategory = value,
        "vendor" => updated.vendor = value,
        "amount" => updated.amount = parse_amount(&value)?,
        "status" => updated.status = parse_status(&value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown transaction field `{}`",
                other
            )))
        }
    }

    let next = TransactionService::update(&context.state, updated)?;
    context.replace_state(next);
    output::success(format!("Transaction `{}` updated.", id));
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(usage("transaction remove <id>"));
    };
    let id = TransactionId::from(*id);
    let next = TransactionService::remove(&context.state, &id)?;
    context.replace_state(next);
    output::success(format!("Transaction `{}` removed.", id));
    Ok(())
}

fn handle_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(usage("transaction pay <id>"));
    };
    let id = TransactionId::from(*id);
    let next = TransactionService::mark_paid(&context.state, &id)?;
    let label = next
        .transaction(&id)
        .map(Displayable::display_label)
        .unwrap_or_else(|| id.to_string());
    context.replace_state(next);
    output::success(format!("Marked as paid: {}", label));
    Ok(())
}
