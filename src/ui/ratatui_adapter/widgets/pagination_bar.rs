//! Pagination bar widget

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::PaginationState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line pagination control: arrows, page counter, range and page size
pub struct PaginationBar<'a> {
    pagination: &'a PaginationState,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Create a bar for `pagination`
    #[must_use]
    pub const fn new(pagination: &'a PaginationState, theme: &'a Theme) -> Self {
        Self { pagination, theme }
    }

    fn arrow(&self, symbol: &'static str, enabled: bool) -> Span<'static> {
        if enabled {
            Span::styled(symbol, self.theme.key())
        } else {
            Span::styled(symbol, self.theme.muted())
        }
    }

    /// Spans making up the bar
    #[must_use]
    pub fn spans(&self) -> Vec<Span<'static>> {
        let p = self.pagination;
        vec![
            self.arrow("◀ ", p.has_previous()),
            Span::raw(format!("Page {} of {}", p.current, p.page_count())),
            self.arrow(" ▶", p.has_next()),
            Span::styled("  │  ", self.theme.muted()),
            Span::raw(p.range_label()),
            Span::styled("  │  ", self.theme.muted()),
            Span::raw(format!("{} / page", p.page_size)),
        ]
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_describe_position() {
        let pagination = PaginationState {
            current: 2,
            page_size: 10,
            total: 150,
        };
        let theme = Theme::default();
        let text: String = PaginationBar::new(&pagination, &theme)
            .spans()
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert!(text.contains("Page 2 of 15"));
        assert!(text.contains("11-20 of 150"));
        assert!(text.contains("10 / page"));
    }

    #[test]
    fn test_first_page_dims_previous_arrow() {
        let pagination = PaginationState {
            current: 1,
            page_size: 10,
            total: 5,
        };
        let theme = Theme::default();
        let spans = PaginationBar::new(&pagination, &theme).spans();

        assert_eq!(spans[0].style, theme.muted());
        assert_eq!(spans[2].style, theme.muted());
    }
}
