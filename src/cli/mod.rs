//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit code.

mod browse;
mod fetch;

pub use browse::{resolve_theme, run_browse};
pub use fetch::{fetch_to, render_table, run_fetch, OutputFormat};

use crate::config::{AppConfig, Validatable};
use crate::error::UserdeckError;
use anyhow::Result;

/// Exit codes for CLI commands.
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The users fetch failed
    pub const FETCH_FAILED: i32 = 3;
}

/// Reject a configuration that failed validation, listing every problem.
pub fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(UserdeckError::config(format!("\n  {}", details.join("\n  "))).into())
}
