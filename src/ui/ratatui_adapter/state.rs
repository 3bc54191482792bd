//! Screen state for the ratatui browser
//!
//! Holds what only the terminal needs: the search input being edited, the
//! table cursor, overlays and notices. Everything about posts and pagination
//! lives in [`ViewState`](crate::view::ViewState).

use super::widgets::{HelpBar, KeyHint, TagPickerState};
use crate::ui::output::MessageLevel;
use ratatui::widgets::TableState;
use std::time::{Duration, Instant};

/// How long a notice stays in the status bar
const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
    TagPicker,
}

/// Search text as typed, with a byte cursor that always sits on a char
/// boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Input holding `text` with the cursor after its last character
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the char before the cursor; false at the start of the input
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary();
        self.text.remove(self.cursor);
        true
    }

    /// Remove the char under the cursor; false at the end of the input
    pub fn delete(&mut self) -> bool {
        if self.cursor == self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        self.cursor += self.text[self.cursor..].chars().next().map_or(0, char::len_utf8);
    }

    /// Empty the input; false if it was already empty
    pub fn clear(&mut self) -> bool {
        self.cursor = 0;
        !std::mem::take(&mut self.text).is_empty()
    }
}

/// Transient status bar line
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: MessageLevel,
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Terminal-side state of the browser
#[derive(Debug)]
pub struct BrowserState {
    pub input: SearchInput,
    pub mode: Mode,
    /// Table selection and scroll
    pub table: TableState,
    /// Present while the tag picker is open
    pub tag_picker: Option<TagPickerState>,
    pub notices: Vec<Notice>,
    pub notice_ttl: Duration,
    /// Hints for the help bar, swapped with the mode
    pub hints: Vec<KeyHint>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new("")
    }
}

impl BrowserState {
    /// Create state with the search input pre-filled
    #[must_use]
    pub fn new(search: &str) -> Self {
        Self {
            input: SearchInput::new(search),
            mode: Mode::Normal,
            table: TableState::default().with_selected(Some(0)),
            tag_picker: None,
            notices: Vec::new(),
            notice_ttl: NOTICE_TTL,
            hints: HelpBar::browse_hints(),
        }
    }

    pub fn cursor_up(&mut self) {
        let row = self.table.selected().unwrap_or(0);
        self.table.select(Some(row.saturating_sub(1)));
    }

    /// Move the table cursor down, stopping at the last of `rows`
    pub fn cursor_down(&mut self, rows: usize) {
        let row = self.table.selected().unwrap_or(0);
        if row + 1 < rows {
            self.table.select(Some(row + 1));
        }
    }

    /// Keep the table cursor inside `rows` after the visible posts change
    pub fn clamp_cursor(&mut self, rows: usize) {
        let row = self.table.selected().unwrap_or(0);
        self.table.select(Some(row.min(rows.saturating_sub(1))));
    }

    /// Back to the first row, scrolled to the top
    pub fn reset_cursor(&mut self) {
        self.table.select(Some(0));
        *self.table.offset_mut() = 0;
    }

    pub fn open_tag_picker(&mut self, universe: &[String], selected: &[String]) {
        self.tag_picker = Some(TagPickerState::new(universe, selected));
        self.mode = Mode::TagPicker;
        self.hints = HelpBar::tag_picker_hints();
    }

    /// Close the tag picker, returning its final state
    pub fn close_tag_picker(&mut self) -> Option<TagPickerState> {
        self.mode = Mode::Normal;
        self.hints = HelpBar::browse_hints();
        self.tag_picker.take()
    }

    /// Show `text` in the status bar until the notice TTL runs out
    pub fn notify(&mut self, level: MessageLevel, text: String, now: Instant) {
        self.notices.push(Notice {
            level,
            text,
            expires_at: now + self.notice_ttl,
        });
    }

    /// Drop expired notices; what is left is what the status bar shows
    pub fn prune_notices(&mut self, now: Instant) {
        self.notices.retain(|n| n.is_live(now));
    }
}
