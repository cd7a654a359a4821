//! Small rendering helpers shared by the list and detail screens.

use super::constants::{MIN_HEIGHT, MIN_WIDTH, SPINNER_FRAMES};
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Badge standing in for the avatar image: initials on the primary color.
pub fn avatar_badge(initials: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {initials:^3} "),
        Style::default().fg(scheme.badge_fg).bg(scheme.primary).bold(),
    )
}

/// Spinner glyph for the given animation tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    let len = SPINNER_FRAMES.len() as u64;
    SPINNER_FRAMES[(tick % len) as usize]
}

/// Truncate `text` to at most `max_width` display columns, adding `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Whether the terminal cell `(column, row)` lies inside `rect`.
pub const fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
) {
    let border_color = colors().border_focused;
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{MIN_WIDTH}x{MIN_HEIGHT}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
