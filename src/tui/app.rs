//! Root controller: navigation between the list and detail screens.

use super::detail::{self, DetailAction};
use super::events::Event;
use super::fetch::FetchTicket;
use super::i18n::{Locale, Strings};
use super::list::{ListAction, SettleOutcome, UserListState};
use super::theme::toggle_theme;
use crate::config::TuiConfig;
use crate::model::UserRecord;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;

/// Which screen is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(UserRecord),
}

/// Application state for the users browser.
///
/// The list state lives here for the whole session, so returning from the
/// detail screen shows the same collection without fetching again.
#[derive(Debug)]
pub struct App {
    pub(crate) screen: Screen,
    pub(crate) list: UserListState,
    pub(crate) locale: Locale,
    pub(crate) mouse_enabled: bool,
    pub(crate) show_help: bool,
    pub(crate) should_quit: bool,
    /// Set when the theme was cycled and should be persisted
    pub(crate) theme_changed: bool,
    /// Animation tick counter
    pub(crate) tick: u64,
    /// Where the detail screen drew its back control
    pub(crate) back_button: Option<Rect>,
}

impl App {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            screen: Screen::List,
            list: UserListState::new(locale.strings().fetch_error),
            locale,
            mouse_enabled: true,
            show_help: false,
            should_quit: false,
            theme_changed: false,
            tick: 0,
            back_button: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &TuiConfig) -> Self {
        let locale = Locale::from_name(&config.locale).unwrap_or_default();
        let mut app = Self::new(locale);
        app.mouse_enabled = config.mouse_enabled;
        app
    }

    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    pub const fn list(&self) -> &UserListState {
        &self.list
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    /// First display of the list: issue the initial fetch.
    pub fn mount(&mut self) -> FetchTicket {
        self.list.load_users()
    }

    /// Show the detail screen for `user`.
    pub fn select_user(&mut self, user: UserRecord) {
        tracing::debug!("showing user {}", user.id);
        self.screen = Screen::Detail(user);
    }

    /// Return to the list.
    pub fn go_back(&mut self) {
        self.screen = Screen::List;
        self.back_button = None;
    }

    /// Handle one event; returns a fetch to run, if one was issued.
    pub fn handle_event(&mut self, event: Event) -> Option<FetchTicket> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => None,
            Event::Tick => {
                self.tick = self.tick.wrapping_add(1);
                None
            }
            Event::Fetched { generation, result } => {
                if self.list.settle(generation, result) == SettleOutcome::Stale {
                    tracing::debug!("stale fetch #{generation} ignored");
                }
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FetchTicket> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.show_help {
            // Any key closes help
            self.show_help = false;
            return None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            KeyCode::Char('t') => {
                let name = toggle_theme();
                tracing::debug!("theme switched to {name}");
                self.theme_changed = true;
                return None;
            }
            _ => {}
        }

        match self.screen {
            Screen::List => {
                let action = self.list.handle_key(key)?;
                self.apply_list_action(action)
            }
            Screen::Detail(_) => {
                if detail::handle_key(key) == Some(DetailAction::GoBack) {
                    self.go_back();
                }
                None
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<FetchTicket> {
        if !self.mouse_enabled || self.show_help {
            return None;
        }

        match self.screen {
            Screen::List => {
                let action = self.list.handle_mouse(mouse)?;
                self.apply_list_action(action)
            }
            Screen::Detail(_) => {
                if detail::handle_mouse(mouse, self.back_button) == Some(DetailAction::GoBack) {
                    self.go_back();
                }
                None
            }
        }
    }

    fn apply_list_action(&mut self, action: ListAction) -> Option<FetchTicket> {
        match action {
            ListAction::Select(user) => {
                self.select_user(user);
                None
            }
            ListAction::Refresh => Some(self.list.refresh()),
        }
    }
}
