use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

use crate::ConfigError;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the transaction slot. Defaults to `<home>/data`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            storage_key: Self::default_storage_key(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_storage_key() -> String {
        "@fineasy:transacoes".into()
    }

    pub fn resolve_data_dir(&self, home: &std::path::Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => home.join("data"),
        }
    }

    /// Applies a `config set` style update.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            ConfigKey::Locale => {
                if trimmed.is_empty() {
                    return Err(invalid());
                }
                self.locale = trimmed.to_string();
            }
            ConfigKey::Currency => {
                if trimmed.len() != 3 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                self.currency = trimmed.to_ascii_uppercase();
            }
            ConfigKey::Color => {
                self.ui_color_enabled = match trimmed.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" | "1" => true,
                    "off" | "false" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            ConfigKey::StorageKey => {
                if trimmed.is_empty() {
                    return Err(invalid());
                }
                self.storage_key = trimmed.to_string();
            }
            ConfigKey::DataDir => {
                self.data_dir = if trimmed.is_empty() || trimmed == "default" {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
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
    Color,
    StorageKey,
    DataDir,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::Locale,
        ConfigKey::Currency,
        ConfigKey::Color,
        ConfigKey::StorageKey,
        ConfigKey::DataDir,
    ];
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigKey::Locale => "locale",
            ConfigKey::Currency => "currency",
            ConfigKey::Color => "color",
            ConfigKey::StorageKey => "storage-key",
            ConfigKey::DataDir => "data-dir",
        };
        f.write_str(label)
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.to_string() == normalized)
            .ok_or_else(|| ConfigError::UnknownKey(value.to_string()))
    }
}
