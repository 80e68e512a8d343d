//! Command dispatch, error reporting and argument parsing shared by the
//! command modules.

use std::io;

use chrono::NaiveDate;
use strsim::levenshtein;
use tracing::warn;

use itex_config::ConfigError;
use itex_core::CoreError;
use itex_domain::{CategoryId, TransactionStatus, Year};

use crate::cli::output;
use crate::cli::commands::CommandEntry;
pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::ExpenseError;
pub use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    App(#[from] ExpenseError),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.commands.get(command).map(|entry| entry.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Parses and runs one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .commands
            .names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::hint(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        let command = self.last_command.as_deref().unwrap_or_default();
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                warn!(command, %message, "command rejected");
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => {
                warn!(command, error = %other, "command failed");
                output::error(other);
            }
        }
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Resolves a category by id or by case-insensitive display name.
    pub(crate) fn resolve_category(&self, input: &str) -> Result<CategoryId, CommandError> {
        let categories = self.state.categories();
        categories
            .iter()
            .find(|category| category.id.as_str() == input)
            .or_else(|| itex_core::CategoryService::find_by_name(categories, input))
            .map(|category| category.id.clone())
            .ok_or_else(|| CommandError::InvalidArguments(format!("unknown category `{}`", input)))
    }
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", text))
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

/// `-` clears an optional date bound.
pub(crate) fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, CommandError> {
    if input == "-" {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

pub(crate) fn parse_year(input: &str) -> Result<Year, CommandError> {
    input
        .parse::<Year>()
        .ok()
        .filter(|year| (1900..=9999).contains(year))
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid year `{}`", input)))
}

/// Accepts `1200`, `1,200.50` and `$1200`.
pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

pub(crate) fn parse_status(input: &str) -> Result<TransactionStatus, CommandError> {
    input
        .parse::<TransactionStatus>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))
}
