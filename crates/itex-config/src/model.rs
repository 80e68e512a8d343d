use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

use crate::ConfigError;

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Rows shown in the recent-transactions list.
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory CSV exports are written to. Defaults to the working directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            recent_limit: Self::default_recent_limit(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_recent_limit() -> usize {
        5
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Locale => self.locale.clone(),
            ConfigKey::Currency => self.currency.clone(),
            ConfigKey::RecentLimit => self.recent_limit.to_string(),
            ConfigKey::UiColorEnabled => self.ui_color_enabled.to_string(),
            ConfigKey::ExportDir => self
                .export_dir
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "-".into()),
        }
    }

    /// Parses `value` for `key` and stores it. `-` clears the export directory.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };
        match key {
            ConfigKey::Locale | ConfigKey::Currency if value.is_empty() => {
                return Err(invalid("must not be empty"))
            }
            ConfigKey::Locale => self.locale = value.to_string(),
            ConfigKey::Currency => self.currency = value.to_ascii_uppercase(),
            ConfigKey::RecentLimit => {
                let limit: usize = value.parse().map_err(|_| invalid("expected a whole number"))?;
                if limit == 0 {
                    return Err(invalid("must be at least 1"));
                }
                self.recent_limit = limit;
            }
            ConfigKey::UiColorEnabled => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid("expected on/off")),
                }
            }
            ConfigKey::ExportDir => {
                self.export_dir = match value {
                    "" | "-" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
        }
        Ok(())
    }
}

/// Keys accepted by `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Locale,
    Currency,
    RecentLimit,
    UiColorEnabled,
    ExportDir,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::Locale,
        ConfigKey::Currency,
        ConfigKey::RecentLimit,
        ConfigKey::UiColorEnabled,
        ConfigKey::ExportDir,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Locale => "locale",
            ConfigKey::Currency => "currency",
            ConfigKey::RecentLimit => "recent_limit",
            ConfigKey::UiColorEnabled => "ui_color_enabled",
            ConfigKey::ExportDir => "export_dir",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownKey(value.to_string()))
    }
}
