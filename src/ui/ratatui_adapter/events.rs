//! Event handling for the ratatui browser
//!
//! Maps keyboard and mouse events to screen changes or view [`Action`]s.
//! Handlers only read the [`ViewState`]; actions are dispatched by the
//! caller.

use super::state::{BrowserState, Mode};
use crate::view::{Action, ViewState};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Screen state changed, redraw
    Continue,
    /// Forward an action to the view controller
    Dispatch(Action),
    /// Leave the browser
    Quit,
    /// No action taken
    Ignored,
}

fn page_change(view: &ViewState, page: u32) -> EventResult {
    let pagination = &view.pagination;
    if page == pagination.current {
        return EventResult::Ignored;
    }
    EventResult::Dispatch(Action::PageChanged {
        page,
        page_size: pagination.page_size,
    })
}

/// Handle a key while browsing the table
fn handle_normal_mode(state: &mut BrowserState, view: &ViewState, key: KeyEvent) -> EventResult {
    let pagination = &view.pagination;

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Enter, _) => {
            state.reset_cursor();
            EventResult::Dispatch(Action::SearchSubmitted(state.input.text().to_string()))
        }

        // Overlays
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) if state.input.is_empty() => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::F(2), _) | (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            state.open_tag_picker(&view.tag_universe, &view.filter.selected_tags);
            EventResult::Continue
        }

        // Table cursor
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down(view.visible_posts().len());
            EventResult::Continue
        }

        // Pages
        (KeyCode::PageDown, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            if pagination.has_next() {
                page_change(view, pagination.current + 1)
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::PageUp, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
            if pagination.has_previous() {
                page_change(view, pagination.current - 1)
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Home, _) => page_change(view, 1),
        (KeyCode::End, _) => page_change(view, pagination.page_count()),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            let page_size = pagination.next_page_size();
            EventResult::Dispatch(Action::PageChanged {
                page: pagination.page_for_size(page_size),
                page_size,
            })
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.input.clear() {
                EventResult::Dispatch(Action::SearchEdited(String::new()))
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.input.insert(c);
            EventResult::Dispatch(Action::SearchEdited(state.input.text().to_string()))
        }
        (KeyCode::Backspace, _) => {
            if state.input.backspace() {
                EventResult::Dispatch(Action::SearchEdited(state.input.text().to_string()))
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if state.input.delete() {
                EventResult::Dispatch(Action::SearchEdited(state.input.text().to_string()))
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Left, _) => {
            state.input.left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.input.right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Any key closes help
fn handle_help_mode(state: &mut BrowserState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

fn handle_tag_picker_mode(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc, _) => {
            state.close_tag_picker();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => match state.close_tag_picker() {
            Some(picker) => {
                state.reset_cursor();
                EventResult::Dispatch(Action::TagSelectionChanged(picker.selection()))
            }
            None => EventResult::Ignored,
        },
        _ => {
            let Some(picker) = state.tag_picker.as_mut() else {
                return EventResult::Ignored;
            };
            match (key.code, key.modifiers) {
                (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => picker.cursor_up(),
                (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                    picker.cursor_down();
                }
                (KeyCode::Char(' '), _) => picker.toggle(),
                (KeyCode::Char('x'), KeyModifiers::CONTROL) => picker.clear(),
                _ => return EventResult::Ignored,
            }
            EventResult::Continue
        }
    }
}

/// Handle a key press in the current mode
pub fn handle_key(state: &mut BrowserState, view: &ViewState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, view, key),
        Mode::Help => handle_help_mode(state),
        Mode::TagPicker => handle_tag_picker_mode(state, key),
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut BrowserState, view: &ViewState, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal {
        return EventResult::Ignored;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down(view.visible_posts().len());
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut BrowserState,
    view: &ViewState,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Ignored);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, view, key),
        Event::Mouse(mouse) => handle_mouse(state, view, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
