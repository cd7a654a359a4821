//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".userdeck.yaml",
    ".userdeck.yml",
    "userdeck.yaml",
    "userdeck.yml",
];

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. User config directory (~/.config/userdeck/)
/// 3. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|p| p.join("userdeck")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Discover a config file, preferring an explicit path when it exists.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
#[must_use]
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

impl AppConfig {
    /// Load from file and layer CLI overrides on top.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# userdeck configuration file
# ============================
#
# Place it at:
#   - .userdeck.yaml in the current directory
#   - ~/.config/userdeck/userdeck.yaml for global config
#
# CLI arguments always override file settings.

# Users API
api:
  # Base URL; /users?size=N is appended
  base_url: https://random-data-api.com/api/v2
  # Records per fetch (1-100)
  page_size: 10
  # Request timeout in seconds
  timeout_secs: 15

# Terminal UI
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
  # Language: en, pt-br
  locale: en
  # Event loop tick in milliseconds
  tick_rate_ms: 100
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".userdeck.yaml");
        std::fs::write(&config_path, "api:\n  page_size: 5\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file_partial() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "api:\n  page_size: 25\ntui:\n  locale: pt-br\n").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.api.page_size, 25);
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.tui.locale, "pt-br");
        assert_eq!(config.tui.theme, "dark");
    }

    #[test]
    fn test_load_empty_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/userdeck.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "api:\n  page_size: lots\n").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_full_example_config_parses() {
        let config: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path.clone()));

        let overrides = ConfigOverrides {
            theme: Some("high-contrast".to_string()),
            ..Default::default()
        };
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);
        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.tui.theme, "high-contrast");
    }
}
