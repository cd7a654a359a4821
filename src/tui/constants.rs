//! Named constants for TUI layout and navigation.

/// Number of rows to move per page-up/page-down action.
pub(crate) const SCROLL_PAGE_ROWS: usize = 5;

/// Terminal lines occupied by one user row (name line + email line).
pub(crate) const USER_ROW_HEIGHT: u16 = 2;

/// Minimum terminal size the layout is designed for.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Busy indicator animation frames, advanced once per tick.
pub(crate) const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
