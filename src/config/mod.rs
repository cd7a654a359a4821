//! Configuration module for userdeck.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.userdeck.yaml` file in the working directory or `~/.config/userdeck/`:
//!
//! ```yaml
//! api:
//!   page_size: 20
//! tui:
//!   theme: light
//!   locale: pt-br
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{ApiConfig, AppConfig, ConfigOverrides, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, find_config_in_dir, generate_full_example_config,
    load_config_file, load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of `.userdeck.yaml`.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_mentions_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("page_size"));
        assert!(schema.contains("locale"));
    }
}
