use itex_config::ConfigKey;

use crate::cli::commands::{ArgKind, CommandEntry, Subcommand};
use crate::cli::core::{usage, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::render;

const SUBCOMMANDS: &[Subcommand] = &[
    Subcommand::new("show", &[]),
    Subcommand::new("set", &[ArgKind::ConfigKey]),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change shell preferences",
        "config [show|set <locale|currency|recent_limit|ui_color_enabled|export_dir> <value>]",
        cmd_config,
    )
    .with_subcommands(SUBCOMMANDS)]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show(context);
    };
    match action.to_lowercase().as_str() {
        "show" => show(context),
        "set" => set(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    let pairs: Vec<(&str, String)> = ConfigKey::ALL
        .iter()
        .map(|key| (key.as_str(), context.config.get(*key)))
        .collect();
    output::block(render::key_values(&pairs));
    if let Some(manager) = &context.config_manager {
        output::info(format!("Stored in {}", manager.config_path().display()));
    }
    Ok(())
}

fn set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(usage("config set <key> <value>"));
    }
    let key: ConfigKey = args[0].parse()?;
    let value = args[1..].join(" ");

    let mut updated = context.config.clone();
    updated.set(key, &value)?;
    context.config = updated;
    context.apply_config();
    context.persist_config()?;
    output::success(format!("{} set to {}.", key, context.config.get(key)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::shell_context::test_support::{run_lines, seeded_context};

    #[test]
    fn set_updates_recent_limit_and_currency() {
        let mut context = seeded_context();
        run_lines(&mut context, &["config set recent_limit 3", "config set currency eur"]);
        assert_eq!(context.config.recent_limit, 3);
        assert_eq!(context.money().whole(1200.0), "€1,200");
    }

    #[test]
    fn unknown_keys_are_errors() {
        let mut context = seeded_context();
        assert!(context.process_line("config set theme dark").is_err());
        assert!(context.process_line("config set recent_limit zero").is_err());
        assert_eq!(context.config.recent_limit, 5);
    }
}
