//! Bottom line of key hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One `key:action` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "PgDn", "^T")
    pub key: String,
    /// Action description (e.g., "next page")
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.chars().count() + 1 + self.action.chars().count()
    }
}

/// Key hints for the current mode; hints that do not fit the width are
/// dropped from the end
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints shown while browsing
    #[must_use]
    pub fn browse_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "search"),
            KeyHint::new("PgUp/PgDn", "page"),
            KeyHint::new("^S", "page size"),
            KeyHint::new("^T", "tags"),
            KeyHint::new("F1", "help"),
            KeyHint::new("Esc", "quit"),
        ]
    }

    /// Hints shown while the tag picker is open
    #[must_use]
    pub fn tag_picker_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Space", "toggle"),
            KeyHint::new("Enter", "apply"),
            KeyHint::new("^X", "clear"),
            KeyHint::new("Esc", "cancel"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let available = usize::from(area.width);
        let mut used = 0;
        let mut spans: Vec<Span> = Vec::with_capacity(self.hints.len() * 4);

        for hint in self.hints {
            let gap = if spans.is_empty() { 0 } else { 2 };
            if used + gap + hint.width() > available {
                break;
            }
            if gap > 0 {
                spans.push(Span::styled("  ", self.theme.muted()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.key()));
            spans.push(Span::styled(":", self.theme.muted()));
            spans.push(Span::raw(hint.action.as_str()));
            used += gap + hint.width();
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(hints: &[KeyHint], width: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(hints, &theme).render(area, &mut buf);
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn test_renders_hints() {
        let hints = vec![KeyHint::new("F1", "help"), KeyHint::new("Esc", "quit")];
        assert_eq!(rendered(&hints, 20).trim_end(), "F1:help  Esc:quit");
    }

    #[test]
    fn test_drops_hints_that_do_not_fit() {
        let hints = vec![KeyHint::new("F1", "help"), KeyHint::new("Esc", "quit")];
        assert_eq!(rendered(&hints, 12).trim_end(), "F1:help");
    }
}
