//! The user detail screen.
//!
//! Stateless: it renders whatever record it is given and reports a
//! go-back request. Values are shown exactly as the API returned them.

use super::i18n::Strings;
use super::theme::{colors, Styles};
use super::widgets::{avatar_badge, rect_contains};
use crate::model::UserRecord;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Requests the detail screen makes of its controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    GoBack,
}

/// Map a key press to an action.
pub const fn handle_key(key: KeyEvent) -> Option<DetailAction> {
    match key.code {
        KeyCode::Esc
        | KeyCode::Backspace
        | KeyCode::Enter
        | KeyCode::Left
        | KeyCode::Char('b' | 'h') => Some(DetailAction::GoBack),
        _ => None,
    }
}

/// Map a mouse event to an action, given where the back control was drawn.
pub fn handle_mouse(mouse: MouseEvent, back_button: Option<Rect>) -> Option<DetailAction> {
    match (mouse.kind, back_button) {
        (MouseEventKind::Down(MouseButton::Left), Some(rect))
            if rect_contains(rect, mouse.column, mouse.row) =>
        {
            Some(DetailAction::GoBack)
        }
        _ => None,
    }
}

/// Rows outside the card text: card borders, spacer and boxed button.
const FULL_LAYOUT_CHROME: u16 = 6;

/// Render the detail card for `user`; returns the back control's area.
pub fn render_user_detail(
    frame: &mut Frame,
    area: Rect,
    user: &UserRecord,
    strings: &Strings,
    today: NaiveDate,
) -> Rect {
    let lines = detail_lines(user, strings, today);
    let card_rows = wrapped_height(&lines, area.width.saturating_sub(2));
    if area.height < card_rows.saturating_add(FULL_LAYOUT_CHROME) {
        return render_compact(frame, area, user, strings, today);
    }

    let [card_area, _, button_row] = Layout::vertical([
        Constraint::Min(9),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .style(Style::default().bg(colors().card)),
        );
    frame.render_widget(card, card_area);

    let button_area = centered_in_row(button_row, strings.back.chars().count() as u16 + 6);
    let button = Paragraph::new(Line::styled(strings.back, Styles::text().bold()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        );
    frame.render_widget(button, button_area);

    button_area
}

/// One line per attribute and a one-row back control, without borders or
/// spacing. Long values are clipped rather than wrapped.
fn render_compact(
    frame: &mut Frame,
    area: Rect,
    user: &UserRecord,
    strings: &Strings,
    today: NaiveDate,
) -> Rect {
    let [card_area, button_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let lines = vec![
        Line::from(vec![
            avatar_badge(&user.initials()),
            Span::raw(" "),
            Span::styled(user.full_name(), Styles::header_title()),
        ]),
        Line::styled(user.email.clone(), Styles::text_muted()),
        field(strings.avatar, &user.avatar),
        field(strings.username, &user.username),
        field(strings.gender, &user.gender),
        field(strings.date_of_birth, &date_of_birth(user, strings, today)),
        field(strings.phone_number, &user.phone_number),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(colors().card)),
        card_area,
    );

    let label = format!("[ {} ]", strings.back);
    let button_area = centered_in_row(button_row, label.chars().count() as u16);
    frame.render_widget(
        Paragraph::new(Line::styled(label, Styles::border_focused().bold()))
            .alignment(Alignment::Center),
        button_area,
    );

    button_area
}

/// Rows `lines` take when wrapped to `width` columns.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|line| line.width().max(1).div_ceil(width)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn centered_in_row(row: Rect, width: u16) -> Rect {
    let [_, middle, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(row.width)),
        Constraint::Fill(1),
    ])
    .areas(row);
    middle
}

fn date_of_birth(user: &UserRecord, strings: &Strings, today: NaiveDate) -> String {
    match user.age_on(today) {
        Some(age) => format!("{} ({} {age})", user.date_of_birth, strings.age),
        None => user.date_of_birth.clone(),
    }
}

fn detail_lines(user: &UserRecord, strings: &Strings, today: NaiveDate) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(avatar_badge(&user.initials())),
        field(strings.avatar, &user.avatar),
        Line::from(""),
        Line::styled(user.full_name(), Styles::header_title()),
        Line::styled(user.email.clone(), Styles::text_muted()),
        Line::from(""),
        field(strings.username, &user.username),
        field(strings.gender, &user.gender),
        field(strings.date_of_birth, &date_of_birth(user, strings, today)),
        field(strings.phone_number, &user.phone_number),
    ]
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(value.to_string(), Styles::text()),
    ])
}
