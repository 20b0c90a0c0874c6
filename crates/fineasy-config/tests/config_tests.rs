use std::fs;

use fineasy_config::{Config, ConfigError, ConfigKey, ConfigManager};
use tempfile::tempdir;

#[test]
fn missing_config_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn saved_config_round_trips() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let mut config = Config::default();
    config.set(ConfigKey::Locale, "en-US").unwrap();
    config.set(ConfigKey::Currency, "USD").unwrap();
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.locale, "en-US");
    assert_eq!(loaded.currency, "USD");
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn partial_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
    fs::write(
        manager.config_path(),
        r#"{"locale":"pt-BR","currency":"EUR"}"#,
    )
    .expect("write");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.currency, "EUR");
    assert!(loaded.ui_color_enabled);
    assert_eq!(loaded.storage_key, "@fineasy:transacoes");
}

#[test]
fn corrupt_config_is_reported() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
    fs::write(manager.config_path(), "{").expect("write");
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
