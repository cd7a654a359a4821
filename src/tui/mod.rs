//! Interactive terminal UI using ratatui.
//!
//! Two screens share one [`App`]:
//! - the users list, which owns the fetch lifecycle (loading, error, refresh)
//! - the detail card for a single record
//!
//! Fetches run on worker threads and report back through the same channel
//! as terminal input, tagged with a generation so superseded results are
//! ignored.

mod app;
pub(crate) mod constants;
mod detail;
mod events;
mod fetch;
pub mod i18n;
mod list;
pub mod state;
pub mod theme;
mod ui;
pub(crate) mod widgets;

pub use app::{App, Screen};
pub use constants::{MIN_HEIGHT, MIN_WIDTH};
pub use detail::{render_user_detail, DetailAction};
pub use events::{Event, EventHandler};
pub use fetch::{spawn_fetch, FetchTicket};
pub use i18n::{Locale, Strings};
pub use list::{render_user_list, ListAction, LoadState, SettleOutcome, UserListState};
pub use state::ListNavigation;
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Styles, Theme};
pub use ui::{render, run_tui};
