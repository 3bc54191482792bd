//! Search bar widget for the remote query

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One-line editor for the server-side search text
pub struct SearchBar<'a> {
    query: &'a str,
    cursor: usize,
    theme: &'a Theme,
    /// Query the current results were fetched for
    applied: Option<&'a str>,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            applied: None,
            focused: true,
        }
    }

    /// Show which query the table reflects when it differs from the input
    #[must_use]
    pub const fn applied(mut self, applied: Option<&'a str>) -> Self {
        self.applied = applied;
        self
    }

    /// Unfocused while an overlay owns the keyboard
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame(self.focused))
            .title(" Search posts ");
        if let Some(applied) = self.applied.filter(|a| *a != self.query) {
            block = block.title_bottom(Line::styled(
                format!(" showing \"{applied}\" "),
                self.theme.muted(),
            ));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let cursor_at = self.cursor.min(self.query.len());
        let (before, after) = self.query.split_at(cursor_at);

        let mut spans = vec![Span::styled("q:", self.theme.muted()), Span::raw(" ")];
        if self.query.is_empty() {
            spans.push(cursor);
            spans.push(Span::styled(
                " type to search, Enter to submit",
                self.theme.muted(),
            ));
        } else {
            spans.push(Span::raw(before));
            spans.push(cursor);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
