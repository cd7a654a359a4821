//! Configuration types for userdeck.

use crate::client::{RandomDataClientConfig, DEFAULT_API_BASE, DEFAULT_PAGE_SIZE};
use crate::error::{Result, UserdeckError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a YAML file and layered with CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Users API settings
    pub api: ApiConfig,
    /// Terminal UI settings
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply CLI overrides; any `Some` value wins over the file value.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref base_url) = overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(page_size) = overrides.page_size {
            self.api.page_size = page_size;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(ref theme) = overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(ref locale) = overrides.locale {
            self.tui.locale.clone_from(locale);
        }
        if let Some(mouse_enabled) = overrides.mouse_enabled {
            self.tui.mouse_enabled = mouse_enabled;
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,
    pub locale: Option<String>,
    pub mouse_enabled: Option<bool>,
}

// ============================================================================
// API Configuration
// ============================================================================

/// Users API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/users?size=N` is appended
    pub base_url: String,
    /// Number of records requested per fetch
    #[schemars(range(min = 1, max = 100))]
    pub page_size: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 15,
        }
    }
}

impl ApiConfig {
    /// Build the HTTP client configuration.
    #[must_use]
    pub fn client_config(&self) -> RandomDataClientConfig {
        RandomDataClientConfig {
            api_base: self.base_url.clone(),
            page_size: self.page_size,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support (click to open, wheel to scroll/refresh)
    pub mouse_enabled: bool,
    /// UI language: "en" or "pt-br"
    pub locale: String,
    /// Event loop tick in milliseconds (drives the spinner)
    #[schemars(range(min = 16, max = 1000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
            locale: "en".to_string(),
            tick_rate_ms: 100,
        }
    }
}

// ============================================================================
// Persisted UI preferences
// ============================================================================

/// Preferences remembered between runs (currently only the theme).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("userdeck").join("preferences.json"))
    }

    /// Load preferences from disk, or `None` if there are none.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| UserdeckError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| UserdeckError::config(format!("preferences: {e}")))?;
        std::fs::write(&path, json).map_err(|e| UserdeckError::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://random-data-api.com/api/v2");
        assert_eq!(config.api.page_size, 10);
        assert_eq!(config.tui.theme, "dark");
        assert_eq!(config.tui.locale, "en");
    }

    #[test]
    fn test_merge_overrides_only_set_values() {
        let mut config = AppConfig::default();
        config.tui.theme = "light".to_string();

        config.merge(&ConfigOverrides {
            page_size: Some(5),
            mouse_enabled: Some(false),
            ..Default::default()
        });

        assert_eq!(config.api.page_size, 5);
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_client_config() {
        let api = ApiConfig {
            timeout_secs: 3,
            ..Default::default()
        };
        let client = api.client_config();
        assert_eq!(client.timeout, Duration::from_secs(3));
        assert_eq!(client.page_size, 10);
    }
}
