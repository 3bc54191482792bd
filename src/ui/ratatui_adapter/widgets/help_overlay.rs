//! Help overlay widget for displaying the full keybind reference

use super::centered_rect;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::PAGE_SIZE_OPTIONS;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let sizes = PAGE_SIZE_OPTIONS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");

        let mut lines = vec![Line::default()];
        lines.push(self.section("Search"));
        lines.extend([
            self.help_line("Type", "Edit the query (fetched after a pause)".to_string()),
            self.help_line("Enter", "Submit the query now".to_string()),
            self.help_line("Ctrl+U", "Clear the query".to_string()),
            self.help_line("←/→", "Move cursor in query".to_string()),
            Line::default(),
        ]);
        lines.push(self.section("Pages"));
        lines.extend([
            self.help_line("↑/↓", "Move through posts".to_string()),
            self.help_line("PgDn/Ctrl+N", "Next page".to_string()),
            self.help_line("PgUp/Ctrl+P", "Previous page".to_string()),
            self.help_line("Home/End", "First/last page".to_string()),
            self.help_line("Ctrl+S", format!("Cycle page size ({sizes})")),
            Line::default(),
        ]);
        lines.push(self.section("Tags"));
        lines.extend([
            self.help_line("Ctrl+T/F2", "Pick tags (posts must carry all)".to_string()),
            self.help_line("Space", "Toggle tag in picker".to_string()),
            self.help_line("Ctrl+X", "Clear picked tags".to_string()),
            Line::default(),
            self.help_line("Esc/Ctrl+C", "Quit".to_string()),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.muted()),
        ]);
        lines
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            format!("  {title}"),
            self.theme.key().add_modifier(Modifier::UNDERLINED),
        )
    }

    fn help_line(&self, key: &str, desc: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), self.theme.key()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame(true))
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}
