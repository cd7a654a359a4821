//! The user list screen.
//!
//! Owns the fetched collection and its load state. Exactly one of three
//! things is drawn: a busy indicator while the first fetch is pending, the
//! fixed error text after a failure, or the title plus the rows.

use super::constants::USER_ROW_HEIGHT;
use super::fetch::FetchTicket;
use super::i18n::Strings;
use super::state::ListNavigation;
use super::theme::{colors, Styles};
use super::widgets::{avatar_badge, rect_contains, spinner_frame, truncate_to_width};
use crate::error::Result;
use crate::model::UserRecord;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Where the collection is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The first fetch has not settled yet
    Loading,
    /// The latest fetch succeeded
    Loaded(Vec<UserRecord>),
    /// The latest fetch failed; `previous` keeps whatever was loaded before
    Failed {
        message: String,
        previous: Vec<UserRecord>,
    },
}

/// What a settled fetch did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Loaded(usize),
    Failed,
    /// Result of a superseded fetch, ignored
    Stale,
}

/// Requests the list makes of its controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Select(UserRecord),
    Refresh,
}

/// State of the list screen.
#[derive(Debug)]
pub struct UserListState {
    load: LoadState,
    refreshing: bool,
    selected: usize,
    /// Generation of the most recently issued fetch
    generation: u64,
    error_message: String,
    view: ListState,
    /// Inner area of the last rendered list, for mouse hit testing
    rows_area: Rect,
}

impl UserListState {
    /// Create a list in the `Loading` state; `error_message` is shown for
    /// every fetch failure.
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            load: LoadState::Loading,
            refreshing: false,
            selected: 0,
            generation: 0,
            error_message: error_message.into(),
            view: ListState::default(),
            rows_area: Rect::default(),
        }
    }

    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// The fixed error text, when the latest fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The collection currently held, including data kept across a failure.
    pub fn items(&self) -> &[UserRecord] {
        match &self.load {
            LoadState::Loading => &[],
            LoadState::Loaded(items) | LoadState::Failed { previous: items, .. } => items,
        }
    }

    /// Rows currently rendered (only in the loaded state).
    pub fn visible_items(&self) -> &[UserRecord] {
        match &self.load {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a new fetch. The returned ticket must be run by the caller.
    pub fn load_users(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Pull-to-refresh: show the refresh indicator, then fetch again.
    pub fn refresh(&mut self) -> FetchTicket {
        self.refreshing = true;
        self.load_users()
    }

    /// Apply the outcome of the fetch identified by `generation`.
    ///
    /// Results from anything but the latest issued fetch are discarded and
    /// leave every flag untouched. Otherwise the state leaves `Loading`, the
    /// refresh indicator is cleared, and a failure keeps earlier data.
    pub fn settle(&mut self, generation: u64, result: Result<Vec<UserRecord>>) -> SettleOutcome {
        if generation != self.generation {
            tracing::debug!(
                "discarding result of fetch #{generation}, latest is #{}",
                self.generation
            );
            return SettleOutcome::Stale;
        }

        self.refreshing = false;
        match result {
            Ok(users) => {
                tracing::info!("loaded {} users (fetch #{generation})", users.len());
                let count = users.len();
                self.load = LoadState::Loaded(users);
                self.clamp_selection();
                SettleOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::warn!("fetch #{generation} failed: {e}");
                let previous = match std::mem::replace(&mut self.load, LoadState::Loading) {
                    LoadState::Loading => Vec::new(),
                    LoadState::Loaded(items) | LoadState::Failed { previous: items, .. } => items,
                };
                self.load = LoadState::Failed {
                    message: self.error_message.clone(),
                    previous,
                };
                SettleOutcome::Failed
            }
        }
    }

    /// The record under the cursor, if rows are shown.
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.visible_items().get(self.selected)
    }

    /// Choose the record under the cursor.
    pub fn select(&self) -> Option<ListAction> {
        self.selected_user().cloned().map(ListAction::Select)
    }

    /// Handle a key press while the list is shown.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ListAction> {
        match key.code {
            KeyCode::Char('r') | KeyCode::F(5) => Some(ListAction::Refresh),
            KeyCode::Enter | KeyCode::Char(' ' | 'l') | KeyCode::Right => self.select(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::PageDown => {
                self.page_down();
                None
            }
            KeyCode::PageUp => {
                self.page_up();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.go_first();
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.go_last();
                None
            }
            _ => None,
        }
    }

    /// Handle a mouse event while the list is shown.
    ///
    /// A click on a row selects it; scrolling up past the first row is the
    /// pull-to-refresh gesture.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ListAction> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let row = self.row_at(mouse.column, mouse.row)?;
                self.selected = row;
                self.select()
            }
            MouseEventKind::ScrollDown => {
                self.select_next();
                None
            }
            MouseEventKind::ScrollUp => {
                if self.at_top() {
                    Some(ListAction::Refresh)
                } else {
                    self.select_prev();
                    None
                }
            }
            _ => None,
        }
    }

    /// Map a terminal cell to a row index using the last rendered layout.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !rect_contains(self.rows_area, column, row) {
            return None;
        }
        let line = usize::from((row - self.rows_area.y) / USER_ROW_HEIGHT);
        let idx = self.view.offset() + line;
        (idx < self.total()).then_some(idx)
    }
}

impl ListNavigation for UserListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.visible_items().len()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the list screen into `area`.
pub fn render_user_list(
    frame: &mut Frame,
    area: Rect,
    state: &mut UserListState,
    strings: &Strings,
    tick: u64,
) {
    if state.is_loading() {
        render_loading(frame, area, strings, tick);
    } else if let Some(message) = state.error_message() {
        render_error(frame, area, message, state.refreshing, strings, tick);
    } else {
        render_rows(frame, area, state, strings, tick);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, strings: &Strings, tick: u64) {
    let line = Line::from(vec![
        Span::styled(
            spinner_frame(tick),
            Style::default().fg(colors().primary).bold(),
        ),
        Span::raw(" "),
        Span::styled(strings.loading, Styles::text_muted()),
    ]);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
}

fn render_error(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    refreshing: bool,
    strings: &Strings,
    tick: u64,
) {
    let hint = if refreshing {
        Line::from(vec![
            Span::styled(spinner_frame(tick), Style::default().fg(colors().primary)),
            Span::raw(" "),
            Span::styled(strings.refreshing, Styles::text_muted()),
        ])
    } else {
        Line::styled(strings.retry_hint, Styles::label())
    };
    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Styles::error()),
        Line::from(""),
        hint,
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    state: &mut UserListState,
    strings: &Strings,
    tick: u64,
) {
    let [title_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(area);

    let mut title = vec![Span::styled(strings.list_title, Styles::header_title())];
    if state.refreshing {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            format!("{} {}", spinner_frame(tick), strings.refreshing),
            Styles::warning(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .title(format!(" {} ", state.total()));
    state.rows_area = block.inner(list_area);

    if state.visible_items().is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(strings.empty_list, Styles::text_muted()))
                .alignment(Alignment::Center)
                .block(block),
            list_area,
        );
        return;
    }

    // Badge (7 columns) + gap
    let text_width = usize::from(state.rows_area.width.saturating_sub(9));
    let items: Vec<ListItem> = state
        .visible_items()
        .iter()
        .map(|user| user_row(user, text_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    state.view.select(Some(state.selected));
    frame.render_stateful_widget(list, list_area, &mut state.view);
}

fn user_row(user: &UserRecord, text_width: usize) -> ListItem<'static> {
    let name = Line::from(vec![
        avatar_badge(&user.initials()),
        Span::raw("  "),
        Span::styled(
            truncate_to_width(&user.full_name(), text_width),
            Styles::text().bold(),
        ),
    ]);
    let email = Line::from(vec![
        Span::raw("         "),
        Span::styled(truncate_to_width(&user.email, text_width), Styles::text_muted()),
    ]);
    ListItem::new(vec![name, email])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchErrorKind, UserdeckError};
    use crate::model::fixtures::user;

    fn failure() -> Result<Vec<UserRecord>> {
        Err(UserdeckError::fetch(
            "test",
            FetchErrorKind::Network("connection refused".to_string()),
        ))
    }

    fn users(n: u64) -> Vec<UserRecord> {
        (1..=n).map(|i| user(i, "First", &format!("Last{i}"))).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = UserListState::new("boom");
        assert!(state.is_loading());
        assert!(!state.is_refreshing());
        assert!(state.error_message().is_none());
        assert!(state.items().is_empty());
        assert!(state.select().is_none());
    }

    #[test]
    fn test_settle_success_then_failure_keeps_items() {
        let mut state = UserListState::new("boom");
        let first = state.load_users();
        assert_eq!(state.settle(first.generation, Ok(users(3))), SettleOutcome::Loaded(3));
        assert_eq!(state.visible_items().len(), 3);

        let second = state.refresh();
        assert_eq!(state.settle(second.generation, failure()), SettleOutcome::Failed);
        assert_eq!(state.error_message(), Some("boom"));
        assert!(state.visible_items().is_empty());
        assert_eq!(state.items().len(), 3);
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_refresh_flag_lifecycle() {
        let mut state = UserListState::new("boom");
        let first = state.load_users();
        state.settle(first.generation, Ok(users(2)));

        let ticket = state.refresh();
        assert!(state.is_refreshing());
        assert!(!state.is_loading());

        state.settle(ticket.generation, Ok(users(2)));
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut state = UserListState::new("boom");
        let old = state.load_users();
        let new = state.refresh();

        assert_eq!(state.settle(old.generation, failure()), SettleOutcome::Stale);
        assert!(state.is_loading());
        assert!(state.is_refreshing());

        assert_eq!(state.settle(new.generation, Ok(users(1))), SettleOutcome::Loaded(1));
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_failure_then_refresh_recovers() {
        let mut state = UserListState::new("boom");
        let first = state.load_users();
        state.settle(first.generation, failure());
        assert_eq!(state.error_message(), Some("boom"));
        assert!(state.items().is_empty());

        let retry = state.refresh();
        state.settle(retry.generation, Ok(users(2)));
        assert!(state.error_message().is_none());
        assert_eq!(state.visible_items().len(), 2);
    }

    #[test]
    fn test_selection_clamped_when_collection_shrinks() {
        let mut state = UserListState::new("boom");
        let t = state.load_users();
        state.settle(t.generation, Ok(users(5)));
        state.go_last();
        assert_eq!(state.selected(), 4);

        let t = state.refresh();
        state.settle(t.generation, Ok(users(2)));
        assert_eq!(state.selected(), 1);
        assert_eq!(state.selected_user().map(|u| u.id), Some(2));
    }

    #[test]
    fn test_keys() {
        let mut state = UserListState::new("boom");
        let t = state.load_users();
        state.settle(t.generation, Ok(users(3)));

        assert!(state.handle_key(KeyEvent::from(KeyCode::Down)).is_none());
        match state.handle_key(KeyEvent::from(KeyCode::Enter)) {
            Some(ListAction::Select(user)) => assert_eq!(user.id, 2),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            state.handle_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(ListAction::Refresh)
        );
    }

    #[test]
    fn test_scroll_up_at_top_requests_refresh() {
        let mut state = UserListState::new("boom");
        let t = state.load_users();
        state.settle(t.generation, Ok(users(3)));

        let scroll = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };

        assert!(state.handle_mouse(scroll(MouseEventKind::ScrollDown)).is_none());
        assert!(state.handle_mouse(scroll(MouseEventKind::ScrollUp)).is_none());
        assert_eq!(
            state.handle_mouse(scroll(MouseEventKind::ScrollUp)),
            Some(ListAction::Refresh)
        );
    }
}
