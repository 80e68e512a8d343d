use itex_core::CategoryService;

use crate::cli::commands::{ArgKind, CommandEntry, Subcommand};
use crate::cli::core::{usage, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::render;

const SUBCOMMANDS: &[Subcommand] = &[
    Subcommand::new("list", &[]),
    Subcommand::new("add", &[]),
    Subcommand::new("rename", &[ArgKind::Category]),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List, add or rename spending categories",
        "category <list|add <name>|rename <category> <new name>>",
        cmd_category,
    )
    .with_subcommands(SUBCOMMANDS)]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return handle_list(context);
    };
    match action.to_lowercase().as_str() {
        "list" => handle_list(context),
        "add" => handle_add(context, rest),
        "rename" => handle_rename(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`",
            other
        ))),
    }
}

fn handle_list(context: &ShellContext) -> CommandResult {
    output::section("Categories");
    output::block(render::categories(CategoryService::list(&context.state)).render());
    Ok(())
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage("category add <name>"));
    }
    let name = args.join(" ");
    let (next, id) = CategoryService::add(&context.state, &name, context.clock.as_ref())?;
    context.replace_state(next);
    output::success(format!("Category `{}` added with id `{}`.", name.trim(), id));
    Ok(())
}

fn handle_rename(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(usage("category rename <category> <new name>"));
    }
    let id = context.resolve_category(args[0])?;
    let name = args[1..].join(" ");
    let next = CategoryService::rename(&context.state, &id, &name)?;
    context.replace_state(next);
    output::success(format!("Category `{}` renamed to `{}`.", id, name.trim()));
    Ok(())
}
