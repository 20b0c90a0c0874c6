//! Shell state shared by every command handler.

use std::{io, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use fineasy_config::{Config, ConfigError, ConfigManager};
use fineasy_core::{CoreError, TransactionRepository};
use fineasy_domain::TransactionDraft;
use fineasy_storage_json::JsonSlotStore;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::{commands, format::Formatter, output};
use crate::errors::CliError;
use crate::utils::paths;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    repository: TransactionRepository<JsonSlotStore>,
    config_manager: ConfigManager,
    config: Config,
    home: PathBuf,
    theme: ColorfulTheme,
    /// Entry-form state; reset after every successful submission.
    pub form: TransactionDraft,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, paths::app_home())
    }

    pub fn with_home(mode: CliMode, home: PathBuf) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(&home)?;
        let config = config_manager.load()?;
        output::apply_config(&config);

        let repository = open_repository(&config, &home)?;
        tracing::debug!(home = %home.display(), count = repository.len(), "shell context ready");

        Ok(Self {
            mode,
            registry,
            repository,
            config_manager,
            config,
            home,
            theme: ColorfulTheme::default(),
            form: TransactionDraft::default(),
            last_command: None,
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub fn home(&self) -> &PathBuf {
        &self.home
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn repository(&self) -> &TransactionRepository<JsonSlotStore> {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut TransactionRepository<JsonSlotStore> {
        &mut self.repository
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::from_config(&self.config)
    }

    /// Replaces the configuration and reopens the slot when its location
    /// changed. Nothing is saved unless the new slot opens.
    pub fn update_config(&mut self, config: Config) -> CommandResult {
        let slot_moved = config.storage_key != self.config.storage_key
            || config.resolve_data_dir(&self.home) != self.config.resolve_data_dir(&self.home);
        let reopened = if slot_moved {
            Some(open_repository(&config, &self.home)?)
        } else {
            None
        };
        self.config_manager.save(&config)?;
        if let Some(repository) = reopened {
            self.repository = repository;
        }
        output::apply_config(&config);
        self.config = config;
        Ok(())
    }

    pub fn prompt(&self) -> String {
        format!("fineasy ({}) > ", self.repository.len())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
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

    /// Closest registered command name within a small edit distance.
    pub(crate) fn closest_command(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= 3)
            .map(|(_, name)| name)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = self.closest_command(input) {
            output::hint(format!("Suggestion: `{best}`?"));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        crate::cli::io::confirm_action(&self.theme, "Exit shell?", true)
            .map_err(|err| CliError::Input(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other.to_string()),
        }
    }
}

fn open_repository(
    config: &Config,
    home: &std::path::Path,
) -> Result<TransactionRepository<JsonSlotStore>, CoreError> {
    let store = JsonSlotStore::new(config.resolve_data_dir(home), config.storage_key.clone())?;
    Ok(TransactionRepository::open(store))
}
