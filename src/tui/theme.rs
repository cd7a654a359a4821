//! Centralized theme and color scheme for the TUI.
//!
//! All views read colors through [`colors()`] so the theme can be switched
//! at runtime with `t`.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Theme names accepted by [`Theme::from_name`].
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub card: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub warning: Color,
    pub error: Color,
    /// Text drawn on top of `primary`/`accent` backgrounds
    pub badge_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(0, 170, 255),
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::Rgb(51, 51, 51),
            border_focused: Color::Rgb(0, 170, 255),
            card: Color::Rgb(43, 43, 43),
            background_alt: Color::Rgb(26, 26, 26),
            text: Color::White,
            text_muted: Color::Rgb(187, 187, 187),
            selection: Color::Rgb(60, 60, 80),
            warning: Color::Yellow,
            error: Color::Red,
            badge_fg: Color::Black,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            card: Color::Rgb(250, 250, 250),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
            badge_fg: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            card: Color::Black,
            background_alt: Color::Black,
            text: Color::White,
            text_muted: Color::White,
            selection: Color::Blue,
            warning: Color::LightYellow,
            error: Color::LightRed,
            badge_fg: Color::Black,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Resolve a theme by name; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Selected row
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error).bold()
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }
}

/// Render footer hints as `[key]desc` spans.
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
