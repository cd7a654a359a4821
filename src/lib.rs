//! **A terminal browser for randomly generated user profiles.**
//!
//! `userdeck` fetches a page of users from the random-data API and shows them
//! in a two-screen terminal UI: a scrollable list with loading, error and
//! refresh states, and a detail card for a single record.
//!
//! ## Modules
//!
//! - **[`model`]**: [`UserRecord`], the fetched profile.
//! - **[`client`]**: the [`UserSource`] seam and the blocking HTTP client
//!   behind it.
//! - **[`tui`]**: the list and detail screens, the root controller and the
//!   event loop.
//! - **[`config`]**: YAML configuration with discovery, CLI layering and
//!   validation.
//! - **[`cli`]**: handlers for the `browse` and `fetch` commands.
//!
//! ## Fetching without the UI
//!
//! ```no_run
//! use userdeck::client::{RandomDataClient, RandomDataClientConfig, UserSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RandomDataClient::new(RandomDataClientConfig::default())?;
//!     for user in client.fetch_users()? {
//!         println!("{} <{}>", user.full_name(), user.email);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Driving the UI from memory
//!
//! The list only needs a [`UserSource`], so tests and demos can swap the
//! network out:
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use userdeck::client::StaticSource;
//! use userdeck::tui::{run_tui, App, Locale};
//!
//! let mut app = App::new(Locale::En);
//! let source = Arc::new(StaticSource::new(Vec::new()));
//! run_tui(&mut app, source, Duration::from_millis(100)).ok();
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math casts between usize and u16 are bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod tui;

// Re-export main types for convenience
pub use client::{RandomDataClient, RandomDataClientConfig, StaticSource, UserSource};
pub use config::{AppConfig, ConfigError, TuiConfig, Validatable};
pub use error::{FetchErrorKind, Result, UserdeckError};
pub use model::UserRecord;
pub use tui::{App, ListNavigation, LoadState, Screen, UserListState};
