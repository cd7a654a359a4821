//! Configuration validation for userdeck.

use super::types::{ApiConfig, AppConfig, TuiConfig};
use crate::tui::i18n::Locale;
use crate::tui::theme::THEME_NAMES;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match url::Url::parse(&self.base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => errors.push(ConfigError::new(
                "api.base_url",
                format!("Unsupported scheme '{}', expected http or https", parsed.scheme()),
            )),
            Err(e) => errors.push(ConfigError::new(
                "api.base_url",
                format!("Invalid URL '{}': {e}", self.base_url),
            )),
        }

        if !(1..=100).contains(&self.page_size) {
            errors.push(ConfigError::new(
                "api.page_size",
                format!("Page size must be between 1 and 100, got {}", self.page_size),
            ));
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "api.timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !THEME_NAMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }

        if Locale::from_name(&self.locale).is_none() {
            errors.push(ConfigError::new(
                "tui.locale",
                format!(
                    "Invalid locale '{}'. Valid options: {}",
                    self.locale,
                    Locale::NAMES.join(", ")
                ),
            ));
        }

        if !(16..=1000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!("Tick rate must be between 16 and 1000 ms, got {}", self.tick_rate_ms),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_api_page_size_validation() {
        for page_size in [0, 101] {
            let config = ApiConfig {
                page_size,
                ..Default::default()
            };
            let errors = config.validate();
            assert_eq!(errors.len(), 1, "page_size {page_size}");
            assert_eq!(errors[0].field, "api.page_size");
        }

        let config = ApiConfig {
            page_size: 100,
            ..Default::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_api_base_url_validation() {
        let invalid = ApiConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(!invalid.is_valid());

        let wrong_scheme = ApiConfig {
            base_url: "ftp://example.com/api".to_string(),
            ..Default::default()
        };
        assert_eq!(wrong_scheme.validate()[0].field, "api.base_url");

        let zero_timeout = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(!zero_timeout.is_valid());
    }

    #[test]
    fn test_tui_config_validation() {
        let valid = TuiConfig {
            theme: "High-Contrast".to_string(),
            locale: "pt-BR".to_string(),
            ..Default::default()
        };
        assert!(valid.is_valid());

        let invalid = TuiConfig {
            theme: "neon".to_string(),
            locale: "klingon".to_string(),
            tick_rate_ms: 5,
            ..Default::default()
        };
        let fields: Vec<String> = invalid.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["tui.theme", "tui.locale", "tui.tick_rate_ms"]);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("api.page_size", "too big");
        assert_eq!(err.to_string(), "api.page_size: too big");
    }
}
