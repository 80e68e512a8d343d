pub mod budget;
pub mod category;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod system;
pub mod transaction;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "dashboard",
    "trend",
    "transaction",
    "filter",
    "category",
    "budget",
    "export",
    "config",
    "help",
    "version",
    "exit",
];

/// What a positional argument refers to, so the shell can offer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Text,
    Category,
    Status,
    ConfigKey,
}

/// Second word of a grouped command such as `budget set`.
#[derive(Debug, Clone, Copy)]
pub struct Subcommand {
    pub name: &'static str,
    pub args: &'static [ArgKind],
}

impl Subcommand {
    pub const fn new(name: &'static str, args: &'static [ArgKind]) -> Self {
        Self { name, args }
    }

    pub fn arg(&self, index: usize) -> ArgKind {
        self.args.get(index).copied().unwrap_or(ArgKind::Text)
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
    pub subcommands: &'static [Subcommand],
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
            subcommands: &[],
        }
    }

    pub fn with_subcommands(mut self, subcommands: &'static [Subcommand]) -> Self {
        self.subcommands = subcommands;
        self
    }

    pub fn subcommand(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands
            .iter()
            .find(|sub| sub.name.eq_ignore_ascii_case(name))
    }
}

/// Every shell command in help order.
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn load() -> Self {
        let mut entries = Vec::new();
        entries.extend(dashboard::definitions());
        entries.extend(transaction::definitions());
        entries.extend(filter::definitions());
        entries.extend(category::definitions());
        entries.extend(budget::definitions());
        entries.extend(export::definitions());
        entries.extend(config::definitions());
        entries.extend(system::definitions());
        entries.sort_by_key(|entry| {
            ROOT_COMMAND_ORDER
                .iter()
                .position(|name| entry.name == *name)
                .unwrap_or(ROOT_COMMAND_ORDER.len())
        });
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}
