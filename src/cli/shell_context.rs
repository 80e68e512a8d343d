use itex_config::{Config, ConfigManager};
use itex_core::{Clock, DashboardService, DashboardState, FilterService};
use itex_domain::{Transaction, TransactionFilter, Year};
use tracing::debug;

use crate::cli::commands::CommandTable;
use crate::cli::core::{CliError, CommandResult};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::system_clock::SystemClock;
use crate::currency::MoneyFormat;
use crate::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can read or replace.
pub struct ShellContext {
    pub mode: CliMode,
    pub commands: CommandTable,
    pub state: DashboardState,
    pub filter: TransactionFilter,
    /// Year the dashboard cards describe; `None` follows the default year.
    pub selected_year: Option<Year>,
    pub config: Config,
    pub config_manager: Option<ConfigManager>,
    pub clock: Box<dyn Clock>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Seeded state, persisted preferences and the system clock.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let config = config_manager.load()?;
        debug!(path = %config_manager.config_path().display(), "configuration loaded");
        Ok(Self::with_parts(
            mode,
            seed::initial_state(),
            config,
            Some(config_manager),
            Box::new(SystemClock),
        ))
    }

    pub fn with_parts(
        mode: CliMode,
        state: DashboardState,
        config: Config,
        config_manager: Option<ConfigManager>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let context = Self {
            mode,
            commands: CommandTable::load(),
            state,
            filter: TransactionFilter::default(),
            selected_year: None,
            config,
            config_manager,
            clock,
            last_command: None,
            running: true,
        };
        context.apply_config();
        context
    }

    pub fn prompt(&self) -> String {
        if self.filter.is_identity() {
            "expense> ".to_string()
        } else {
            "expense[filtered]> ".to_string()
        }
    }

    pub fn money(&self) -> MoneyFormat {
        MoneyFormat::from_config(&self.config)
    }

    pub fn year(&self) -> Year {
        self.selected_year
            .unwrap_or_else(|| DashboardService::default_year(self.state.budget(), self.clock.as_ref()))
    }

    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        FilterService::apply(self.state.transactions(), &self.filter)
    }

    /// Swaps in the state returned by a command.
    pub fn replace_state(&mut self, next: DashboardState) {
        self.state = next;
    }

    pub(crate) fn apply_config(&self) {
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
        });
    }

    /// Saves the configuration when a backing file is attached.
    pub(crate) fn persist_config(&self) -> CommandResult {
        if let Some(manager) = &self.config_manager {
            manager.save(&self.config)?;
        }
        Ok(())
    }
}
