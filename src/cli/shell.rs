use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use tracing::info;

use itex_config::ConfigKey;
use itex_domain::TransactionStatus;

use crate::cli::commands::{ArgKind, Subcommand};
use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;

/// Set to run commands from stdin without line editing or colours.
pub const SCRIPT_ENV_VAR: &str = "EXPENSE_CORE_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_ENV_VAR) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };
    let mut context = ShellContext::new(mode)?;
    info!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

/// Runs one line; `false` once the session should end.
fn run_line(context: &mut ShellContext, line: &str) -> bool {
    match context.process_line(line) {
        Ok(LoopControl::Continue) => context.running,
        Ok(LoopControl::Exit) => false,
        Err(err) => {
            context.report_error(err);
            context.running
        }
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::from_context(context)));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();
                if !run_line(context, line) {
                    break;
                }
                // Categories may have been added or renamed.
                if let Some(helper) = editor.helper_mut() {
                    helper.refresh_categories(context);
                }
            }
            Err(ReadlineError::Interrupted) => {
                output::info("Interrupted. Type `exit` to leave.");
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Reads commands from stdin; blank lines and `#` comments are skipped.
fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !run_line(context, line) {
            break;
        }
    }
    Ok(())
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}

/// Tab completion over command names, their subcommands and the values the
/// next argument expects.
struct CommandHelper {
    commands: Vec<(&'static str, &'static [Subcommand])>,
    categories: Vec<String>,
}

impl CommandHelper {
    fn from_context(context: &ShellContext) -> Self {
        let mut helper = Self {
            commands: context
                .commands
                .entries()
                .iter()
                .map(|entry| (entry.name, entry.subcommands))
                .collect(),
            categories: Vec::new(),
        };
        helper.refresh_categories(context);
        helper
    }

    fn refresh_categories(&mut self, context: &ShellContext) {
        self.categories = context
            .state
            .categories()
            .iter()
            .map(|category| category.id.to_string())
            .collect();
    }

    /// Values allowed for the word following `words`.
    fn candidates(&self, words: &[&str]) -> Vec<String> {
        match words {
            [] => self.commands.iter().map(|(name, _)| name.to_string()).collect(),
            [command] => self
                .subcommands(command)
                .iter()
                .map(|sub| sub.name.to_string())
                .collect(),
            [command, sub, args @ ..] => {
                let Some(sub) = self
                    .subcommands(command)
                    .iter()
                    .find(|candidate| candidate.name.eq_ignore_ascii_case(sub))
                else {
                    return Vec::new();
                };
                self.values_for(sub.arg(args.len()))
            }
        }
    }

    fn subcommands(&self, command: &str) -> &'static [Subcommand] {
        self.commands
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(command))
            .map(|(_, subcommands)| *subcommands)
            .unwrap_or(&[])
    }

    fn values_for(&self, kind: ArgKind) -> Vec<String> {
        match kind {
            ArgKind::Text => Vec::new(),
            ArgKind::Category => self.categories.clone(),
            ArgKind::Status => std::iter::once("all".to_string())
                .chain(
                    TransactionStatus::ALL
                        .iter()
                        .map(|status| status.to_string().to_lowercase()),
                )
                .collect(),
            ArgKind::ConfigKey => ConfigKey::ALL.iter().map(|key| key.as_str().to_string()).collect(),
        }
    }

    /// Start offset of the word under the cursor and its matches.
    fn complete_at(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let start = before
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let words: Vec<&str> = before[..start].split_whitespace().collect();
        let partial = before[start..].to_lowercase();
        let matches = self
            .candidates(&words)
            .into_iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&partial))
            .collect();
        (start, matches)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.complete_at(line, pos);
        let pairs = matches
            .into_iter()
            .map(|value| Pair {
                display: value.clone(),
                replacement: value,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
