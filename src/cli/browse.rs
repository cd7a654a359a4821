//! Browse command handler.
//!
//! Implements the `browse` subcommand (the default): the interactive users
//! browser.

use super::{ensure_valid, exit_codes};
use crate::client::{RandomDataClient, UserSource};
use crate::config::{AppConfig, TuiPreferences};
use crate::tui::theme::THEME_NAMES;
use crate::tui::{run_tui, set_theme, App, Theme};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

/// Pick the starting theme name.
///
/// A theme given on the command line wins, then the theme saved the last time
/// it was cycled, then the config file.
#[must_use]
pub fn resolve_theme(config: &AppConfig, cli_theme: bool, saved: Option<TuiPreferences>) -> String {
    if cli_theme {
        return config.tui.theme.clone();
    }
    saved
        .map(|prefs| prefs.theme)
        .filter(|name| THEME_NAMES.contains(&name.as_str()))
        .unwrap_or_else(|| config.tui.theme.clone())
}

/// Run the browse command.
pub fn run_browse(config: &AppConfig, cli_theme: bool) -> Result<i32> {
    ensure_valid(config)?;

    let theme = resolve_theme(config, cli_theme, TuiPreferences::load());
    set_theme(Theme::from_name(&theme));

    let client = RandomDataClient::new(config.api.client_config())
        .context("failed to create users client")?;
    let source: Arc<dyn UserSource> = Arc::new(client);

    let mut app = App::from_config(&config.tui);
    tracing::info!(
        "browsing {} (page size {}, theme {theme})",
        config.api.base_url,
        config.api.page_size
    );

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    run_tui(&mut app, source, tick_rate)
        .context("terminal UI failed")?;

    Ok(exit_codes::SUCCESS)
}
