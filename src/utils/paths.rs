use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".fineasy";

/// Returns the application home directory, defaulting to `~/.fineasy`.
pub fn app_home() -> PathBuf {
    if let Some(custom) = env::var_os("FINEASY_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
