//! Tag picker overlay
//!
//! Lists the tag universe of the loaded page. Toggled tags only take effect
//! when the picker is applied.

use super::centered_rect;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::dedup_preserving_order;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, StatefulWidget, Widget},
};

/// State for the tag picker overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPickerState {
    /// Tags offered, tag universe first
    pub tags: Vec<String>,
    /// Checked tags in the order they were checked
    pub checked: Vec<String>,
    /// Highlighted row
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
}

impl TagPickerState {
    /// Open the picker over `universe` with `selected` pre-checked
    ///
    /// Selected tags missing from the universe are still listed so they can
    /// be unchecked.
    #[must_use]
    pub fn new(universe: &[String], selected: &[String]) -> Self {
        let tags = dedup_preserving_order(universe.iter().chain(selected).cloned());
        Self {
            tags,
            checked: selected.to_vec(),
            cursor: 0,
            scroll_offset: 0,
        }
    }

    /// Move the highlight up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.tags.len() {
            self.cursor += 1;
        }
    }

    /// Check or uncheck the highlighted tag
    pub fn toggle(&mut self) {
        let Some(tag) = self.tags.get(self.cursor) else {
            return;
        };
        if let Some(pos) = self.checked.iter().position(|t| t == tag) {
            self.checked.remove(pos);
        } else {
            self.checked.push(tag.clone());
        }
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Whether `tag` is checked
    #[must_use]
    pub fn is_checked(&self, tag: &str) -> bool {
        self.checked.iter().any(|t| t == tag)
    }

    /// Checked tags, in check order
    #[must_use]
    pub fn selection(&self) -> Vec<String> {
        self.checked.clone()
    }
}

/// Tag picker popup
pub struct TagPicker<'a> {
    theme: &'a Theme,
}

impl<'a> TagPicker<'a> {
    /// Create a new tag picker widget
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for TagPicker<'_> {
    type State = TagPickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let popup_area = centered_rect(50, 70, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame(true))
            .title(format!(" Tags ({} checked) ", state.checked.len()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        if inner.height == 0 {
            return;
        }
        if state.tags.is_empty() {
            Line::styled("No tags on this page", self.theme.muted()).render(inner, buf);
            return;
        }

        let visible_height = usize::from(inner.height);
        if state.cursor < state.scroll_offset {
            state.scroll_offset = state.cursor;
        } else if state.cursor >= state.scroll_offset + visible_height {
            state.scroll_offset = state.cursor + 1 - visible_height;
        }

        let end = (state.scroll_offset + visible_height).min(state.tags.len());
        for (row, index) in (state.scroll_offset..end).enumerate() {
            let tag = &state.tags[index];
            let checked = state.is_checked(tag);
            let mark = if checked {
                Span::styled("[✓] ", self.theme.tag(true))
            } else {
                Span::styled("[ ] ", self.theme.muted())
            };
            let name_style = if index == state.cursor {
                self.theme.row_highlight()
            } else if checked {
                self.theme.tag(true)
            } else {
                self.theme.tag(false)
            };
            let line = Line::from(vec![mark, Span::styled(tag.as_str(), name_style)]);

            let y = inner.y + u16::try_from(row).unwrap_or(u16::MAX);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_new_keeps_selected_tags_outside_universe() {
        let state = TagPickerState::new(&tags(&["a", "b"]), &tags(&["c", "a"]));
        assert_eq!(state.tags, tags(&["a", "b", "c"]));
        assert_eq!(state.checked, tags(&["c", "a"]));
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut state = TagPickerState::new(&tags(&["a", "b", "c"]), &[]);
        state.cursor_down();
        state.toggle();
        state.cursor_down();
        state.toggle();
        assert_eq!(state.selection(), tags(&["b", "c"]));

        state.toggle();
        assert_eq!(state.selection(), tags(&["b"]));

        state.clear();
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = TagPickerState::new(&tags(&["a", "b"]), &[]);
        state.cursor_up();
        assert_eq!(state.cursor, 0);
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_toggle_on_empty_picker_is_noop() {
        let mut state = TagPickerState::new(&[], &[]);
        state.toggle();
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let theme = Theme::default();
        let universe: Vec<String> = (0..30).map(|i| format!("tag{i}")).collect();
        let mut state = TagPickerState::new(&universe, &[]);
        state.cursor = 25;

        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        TagPicker::new(&theme).render(area, &mut buf, &mut state);

        assert!(state.scroll_offset > 0);
        assert!(state.scroll_offset <= 25);
    }
}
