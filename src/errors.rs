use thiserror::Error;

use fineasy_config::ConfigError;
use fineasy_core::CoreError;

use crate::cli::CommandError;

/// Failures that stop the shell from starting or running.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error(transparent)]
    Command(#[from] CommandError),
}
