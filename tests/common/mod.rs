#![allow(dead_code)]

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use fineasy::{
    cli::{run_script_lines, CliMode, ShellContext},
    config::{Config, ConfigManager},
};
use tempfile::TempDir;

/// Temporary `FINEASY_HOME` with color turned off so output is plain text.
pub fn plain_home() -> TempDir {
    let home = TempDir::new().expect("create temp home");
    let manager = ConfigManager::with_base_dir(home.path()).expect("config manager");
    let config = Config {
        ui_color_enabled: false,
        ..Config::default()
    };
    manager.save(&config).expect("write config");
    home
}

pub fn slot_path(home: &Path) -> PathBuf {
    home.join("data").join("fineasy-transacoes.json")
}

pub fn script_context(home: &Path) -> ShellContext {
    ShellContext::with_home(CliMode::Script, home.to_path_buf()).expect("shell context")
}

/// Runs `script` against a fresh context rooted at `home`.
pub fn run_script(home: &Path, script: &str) -> ShellContext {
    let mut context = script_context(home);
    run_script_lines(&mut context, Cursor::new(script.to_string())).expect("script runs");
    context
}
