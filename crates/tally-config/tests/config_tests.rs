use std::path::{Path, PathBuf};

use tally_config::{Config, ConfigManager, Theme};
use tally_domain::BudgetPeriod;
use tempfile::tempdir;

#[test]
fn default_config_has_sensible_fields() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.default_period, BudgetPeriod::Monthly);
    assert_eq!(cfg.theme, Theme::Light);
    assert!(cfg.ui_color_enabled);
    assert_eq!(
        cfg.resolve_data_dir(Path::new("/home/demo/.tally")),
        PathBuf::from("/home/demo/.tally/storage")
    );
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    assert_eq!(manager.load().expect("defaults"), Config::default());

    let mut cfg = Config::default();
    cfg.theme = Theme::Dark;
    cfg.default_period = BudgetPeriod::Yearly;
    cfg.data_dir = Some(dir.path().join("elsewhere"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(manager.config_path(), dir.path().join("config").join("config.json"));
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"theme":"DARK","currency_symbol":"€"}"#).unwrap();

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.theme, Theme::Dark);
    assert_eq!(loaded.currency_symbol, "€");
    assert_eq!(loaded.default_period, BudgetPeriod::Monthly);
    assert!(loaded.ui_color_enabled);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{").unwrap();
    assert!(ConfigManager::new(path).load().is_err());
}
