use crate::cli::commands::{CommandEntry, CommandTable};
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};

pub fn print_overview(commands: &CommandTable) {
    output::section("Available commands");
    let mut table = Table::new(vec![TableColumn::left("Command"), TableColumn::left("Description")]);
    for entry in commands.entries() {
        table.push_row(vec![entry.name.to_string(), entry.description.to_string()]);
    }
    output::block(table.render());
    output::hint("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    let mut text = format!("  {}\n  usage: {}", entry.description, entry.usage);
    if !entry.subcommands.is_empty() {
        let names: Vec<&str> = entry.subcommands.iter().map(|sub| sub.name).collect();
        text.push_str(&format!("\n  subcommands: {}", names.join(", ")));
    }
    output::block(text);
}
