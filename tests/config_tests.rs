//! Configuration loading, layering and validation.

use std::fs;
use tempfile::TempDir;
use userdeck::config::{
    find_config_in_dir, generate_full_example_config, load_config_file, AppConfig,
    ConfigFileError, ConfigOverrides, Validatable,
};

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ".userdeck.yaml", "api:\n  page_size: 25\n");

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.api.page_size, 25);
    assert_eq!(config.api.base_url, AppConfig::default().api.base_url);
    assert_eq!(config.tui.theme, "dark");
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ".userdeck.yaml", "api: [not, a, map\n");

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigFileError::Parse(_))
    ));
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ".userdeck.yaml", "tui: 12\n");

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(Some(&path), &ConfigOverrides::default());
    assert_eq!(config, AppConfig::default());
    assert!(loaded_from.is_none());
}

#[test]
fn test_cli_overrides_win() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "userdeck.yml",
        "api:\n  page_size: 30\ntui:\n  theme: light\n  locale: pt-br\n",
    );
    let overrides = ConfigOverrides {
        page_size: Some(10),
        mouse_enabled: Some(false),
        ..Default::default()
    };

    let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);
    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(config.api.page_size, 10);
    assert_eq!(config.tui.theme, "light");
    assert_eq!(config.tui.locale, "pt-br");
    assert!(!config.tui.mouse_enabled);
}

#[test]
fn test_dotfile_preferred_in_directory() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "userdeck.yaml", "api:\n  page_size: 2\n");
    let dotfile = write_config(&dir, ".userdeck.yaml", "api:\n  page_size: 3\n");

    assert_eq!(find_config_in_dir(dir.path()), Some(dotfile));
}

#[test]
fn test_example_config_is_loadable_and_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ".userdeck.yaml", &generate_full_example_config());

    let config = load_config_file(&path).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(config.is_valid());
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = AppConfig::default();
    config.api.page_size = 101;
    config.tui.theme = "solarized".to_string();

    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["api.page_size", "tui.theme"]);
}
