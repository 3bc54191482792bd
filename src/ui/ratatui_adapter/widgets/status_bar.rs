//! Status bar: fetch failures, notices and the current location

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::Notice;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{FetchError, Location};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar: latest fetch error or notice on the left, current location
/// on the right
pub struct StatusBar<'a> {
    notices: &'a [Notice],
    theme: &'a Theme,
    error: Option<&'a FetchError>,
    location: Option<&'a Location>,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(notices: &'a [Notice], theme: &'a Theme) -> Self {
        Self {
            notices,
            theme,
            error: None,
            location: None,
        }
    }

    /// Show the last fetch failure; it takes priority over notices
    #[must_use]
    pub const fn with_error(mut self, error: Option<&'a FetchError>) -> Self {
        self.error = error;
        self
    }

    /// Show the current navigation location
    #[must_use]
    pub const fn with_location(mut self, location: Option<&'a Location>) -> Self {
        self.location = location;
        self
    }

    fn message_line(&self) -> Option<Line<'a>> {
        let (level, text) = match (self.error, self.notices.last()) {
            (Some(err), _) => (MessageLevel::Error, format!("Fetch failed: {err}")),
            (None, Some(notice)) => (notice.level, notice.text.clone()),
            (None, None) => return None,
        };
        let style = self.theme.message(level);
        let mut spans = vec![Span::styled(format!("{}{text}", marker(level)), style)];
        if self.error.is_some() {
            spans.push(Span::styled(" (showing previous results)", self.theme.muted()));
        }
        Some(Line::from(spans))
    }
}

const fn marker(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Success => "✓ ",
        MessageLevel::Error => "✗ ",
        MessageLevel::Warning => "⚠ ",
        MessageLevel::Info => "ℹ ",
        MessageLevel::Normal => "",
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        if let Some(line) = self.message_line() {
            Paragraph::new(line).render(chunks[0], buf);
        }

        if let Some(location) = self.location {
            Paragraph::new(Line::styled(location.to_string(), self.theme.muted()))
                .alignment(Alignment::Right)
                .render(chunks[1], buf);
        }
    }
}
