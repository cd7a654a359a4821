//! Fetch command handler.
//!
//! Implements the `fetch` subcommand: one users request without the TUI,
//! printed as a table or as JSON.

use super::{ensure_valid, exit_codes};
use crate::client::{RandomDataClient, UserSource};
use crate::config::AppConfig;
use crate::model::UserRecord;
use crate::tui::widgets::truncate_to_width;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Output format for `fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

const COLUMNS: [(&str, usize); 5] = [
    ("ID", 6),
    ("NAME", 24),
    ("EMAIL", 32),
    ("USERNAME", 18),
    ("PHONE", 22),
];

/// Run the fetch command, writing to stdout.
///
/// Returns [`exit_codes::FETCH_FAILED`] when the request fails; the error is
/// reported on stderr.
pub fn run_fetch(config: &AppConfig, format: OutputFormat) -> Result<i32> {
    ensure_valid(config)?;

    let client = RandomDataClient::new(config.api.client_config())
        .context("failed to create users client")?;
    let stdout = std::io::stdout();
    fetch_to(&client, format, &mut stdout.lock())
}

/// Fetch from `source` and write the result to `out`.
pub fn fetch_to(source: &dyn UserSource, format: OutputFormat, out: &mut dyn Write) -> Result<i32> {
    let users = match source.fetch_users() {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!("{e}");
            let detail = e
                .fetch_kind()
                .map_or_else(|| e.to_string(), ToString::to_string);
            eprintln!("Error: {e} ({detail})");
            return Ok(exit_codes::FETCH_FAILED);
        }
    };
    tracing::info!("fetched {} users from {}", users.len(), source.name());

    match format {
        OutputFormat::Table => out.write_all(render_table(&users).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &users)
                .context("failed to serialize users")?;
            writeln!(out)?;
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Render users as a fixed-width text table, one row per record, in order.
#[must_use]
pub fn render_table(users: &[UserRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, COLUMNS.map(|(title, _)| title.to_string()));
    push_row(&mut out, COLUMNS.map(|(_, width)| "-".repeat(width)));
    for user in users {
        push_row(
            &mut out,
            [
                user.id.to_string(),
                user.full_name(),
                user.email.clone(),
                user.username.clone(),
                user.phone_number.clone(),
            ],
        );
    }
    out
}

fn push_row(out: &mut String, cells: [String; 5]) {
    let mut line = String::new();
    for ((_, width), cell) in COLUMNS.iter().zip(cells) {
        let cell = truncate_to_width(&cell, *width);
        let pad = width.saturating_sub(cell.width());
        line.push_str(&cell);
        line.push_str(&" ".repeat(pad + 2));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
