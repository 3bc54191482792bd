//! Ratatui post browser
//!
//! Owns the terminal while browsing. Each loop iteration ticks the
//! [`ViewController`] (applying finished fetches and firing the debounce
//! timer), draws the screen and waits for input no longer than the next
//! timer deadline.

use super::events::{EventResult, poll_and_handle};
use super::state::{BrowserState, Mode};
use super::theme::Theme;
use super::widgets::{
    HelpBar, HelpOverlay, PaginationBar, PostTable, SearchBar, StatusBar, TagPicker,
};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crate::view::{Location, ViewController, ViewState};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};

/// Upper bound on how long the loop waits for input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs `restore` when dropped, so the terminal is put back on early
/// returns and while unwinding from a panic
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    const fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            log::warn!("event=terminal_cleanup_failed module=ui error={e}");
        }
    }
}

/// Interactive post browser
pub struct Browser {
    theme: Theme,
}

impl Browser {
    /// Create a browser with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<(TerminalGuard, Terminal<CrosstermBackend<Stdout>>)> {
        if !io::stdout().is_terminal() {
            return Err(UiError::Terminal(
                "stdout is not a terminal; use `postdeck list` for non-interactive output"
                    .to_string(),
            ));
        }
        enable_raw_mode()?;
        let guard = TerminalGuard::new(Self::cleanup_terminal);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((guard, terminal))
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)
    }

    /// Browse until the user quits
    ///
    /// Mounts `controller` on entry and unmounts it on exit, so no debounced
    /// fetch fires once the browser is gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn to or read
    /// from.
    pub fn run(&self, controller: &mut ViewController) -> Result<()> {
        let (_guard, mut terminal) = Self::setup_terminal()?;

        controller.mount(Instant::now());
        let result = self.run_loop(&mut terminal, controller);
        controller.unmount();
        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        controller: &mut ViewController,
    ) -> Result<()> {
        let mut state = BrowserState::new(&controller.state().filter.search_query);
        let mut last_error = None;

        loop {
            let now = Instant::now();
            controller.tick(now);

            let view = controller.state();
            if view.last_error != last_error {
                if let Some(err) = &view.last_error {
                    state.notify(MessageLevel::Error, err.to_string(), now);
                }
                last_error.clone_from(&view.last_error);
            }
            state.clamp_cursor(view.visible_posts().len());
            state.prune_notices(now);

            terminal.draw(|frame| {
                render(frame, &mut state, view, controller.router().current(), &self.theme);
            })?;

            let timeout = controller
                .time_until_due(now)
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

            match poll_and_handle(&mut state, controller.state(), timeout)? {
                EventResult::Quit => break,
                EventResult::Dispatch(action) => controller.dispatch(action, Instant::now()),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        Ok(())
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one frame of the browser
pub fn render(
    frame: &mut Frame,
    state: &mut BrowserState,
    view: &ViewState,
    location: Option<&Location>,
    theme: &Theme,
) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Post table
            Constraint::Length(1), // Pagination bar
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let search_bar = SearchBar::new(state.input.text(), state.input.cursor(), theme)
        .applied(Some(view.filter.search_query.as_str()))
        .focused(state.mode == Mode::Normal);
    frame.render_widget(search_bar, main_layout[0]);

    let visible = view.visible_posts();
    let table = PostTable::new(&visible, &view.filter.selected_tags, theme)
        .loaded(view.posts.len())
        .loading(view.is_loading());
    frame.render_stateful_widget(table, main_layout[1], &mut state.table);

    frame.render_widget(PaginationBar::new(&view.pagination, theme), main_layout[2]);

    let status_bar = StatusBar::new(&state.notices, theme)
        .with_error(view.last_error.as_ref())
        .with_location(location);
    frame.render_widget(status_bar, main_layout[3]);

    frame.render_widget(HelpBar::new(&state.hints, theme), main_layout[4]);

    match state.mode {
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::TagPicker => {
            if let Some(picker) = state.tag_picker.as_mut() {
                frame.render_stateful_widget(TagPicker::new(theme), area, picker);
            }
        }
        Mode::Normal => {}
    }
}
