//! Terminal setup, the event loop, and top-level rendering.

use super::app::{App, Screen};
use super::detail::render_user_detail;
use super::events::EventHandler;
use super::fetch::spawn_fetch;
use super::list::render_user_list;
use super::theme::{current_theme_name, render_footer_hints, Styles};
use super::widgets::{check_terminal_size, render_popup, render_size_warning};
use crate::client::UserSource;
use crate::config::TuiPreferences;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use std::io::{self, stdout, Write};
use std::sync::Arc;
use std::time::Duration;

/// Run the users browser until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_tui(app: &mut App, source: Arc<dyn UserSource>, tick_rate: Duration) -> io::Result<()> {
    let mut terminal = init_terminal(stdout(), app.mouse_enabled)?;

    let result = event_loop(&mut terminal, app, &source, tick_rate);

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result
}

/// Enter raw mode and the alternate screen on `out`.
///
/// On failure everything already switched on is switched off again before
/// the error is returned.
fn init_terminal<W: Write>(
    out: W,
    mouse_enabled: bool,
) -> io::Result<Terminal<CrosstermBackend<W>>> {
    enable_raw_mode()?;

    let mut terminal = match Terminal::new(CrosstermBackend::new(out)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let entered = if mouse_enabled {
        execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(terminal.backend_mut(), EnterAlternateScreen)
    };
    if let Err(e) = entered {
        let _ = restore_terminal(terminal.backend_mut());
        return Err(e);
    }

    Ok(terminal)
}

/// Leave raw mode and the alternate screen. Raw mode is disabled even when
/// writing to `out` fails.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    raw
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: &Arc<dyn UserSource>,
    tick_rate: Duration,
) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);

    let ticket = app.mount();
    spawn_fetch(Arc::clone(source), ticket, events.sender());

    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Some(ticket) = app.handle_event(events.next()?) {
            spawn_fetch(Arc::clone(source), ticket, events.sender());
        }

        if app.theme_changed {
            app.theme_changed = false;
            let prefs = TuiPreferences {
                theme: current_theme_name().to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("could not save theme preference: {e}");
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area);
        return;
    }

    let [header, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);
    let content = content.inner(Margin::new(2, 1));

    render_header(frame, header);

    let strings = app.strings();
    match &app.screen {
        Screen::List => {
            app.back_button = None;
            render_user_list(frame, content, &mut app.list, strings, app.tick);
        }
        Screen::Detail(user) => {
            let today = chrono::Local::now().date_naive();
            app.back_button = Some(render_user_detail(frame, content, user, strings, today));
        }
    }

    render_footer(frame, footer, app);

    if app.show_help {
        render_help_overlay(frame, area, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" userdeck ", Styles::header_title()),
        Span::styled(concat!("v", env!("CARGO_PKG_VERSION")), Styles::label()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let s = app.strings();
    let hints: Vec<(&str, &str)> = match app.screen {
        Screen::List => vec![
            ("↑↓", s.hint_move),
            ("Enter", s.hint_open),
            ("r", s.hint_refresh),
            ("t", s.hint_theme),
            ("?", s.hint_help),
            ("q", s.hint_quit),
        ],
        Screen::Detail(_) => vec![
            ("Esc", s.hint_back),
            ("t", s.hint_theme),
            ("?", s.hint_help),
            ("q", s.hint_quit),
        ],
    };

    frame.render_widget(
        Paragraph::new(Line::from(render_footer_hints(&hints))).style(Styles::status_bar()),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let s = app.strings();
    let row = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), Styles::shortcut_key()),
            Span::styled(desc.to_string(), Styles::text()),
        ])
    };

    let mut lines = vec![
        row("↑↓ j k", s.hint_move),
        row("PgUp PgDn", s.hint_page),
        row("Home End", s.hint_first_last),
        row("Enter / click", s.hint_open),
        row("r / F5", s.hint_refresh),
    ];
    if app.mouse_enabled {
        lines.push(row(s.hint_wheel_top, s.hint_refresh));
    }
    lines.extend([
        row("Esc / b", s.hint_back),
        row("t", s.hint_theme),
        row("q / Ctrl+C", s.hint_quit),
    ]);

    render_popup(frame, area, s.hint_help, lines, 60, 60);
}
