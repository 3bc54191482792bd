//! Palette for the post browser

use crate::ui::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the browser widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    /// Key names, focused frames and open overlays
    pub accent: Color,
    pub column_header: Color,
    pub frame: Color,
    /// Post bodies, separators and hints
    pub muted: Color,
    pub tag: Color,
    /// Tags that are part of the active filter
    pub filter_tag: Color,
    pub loading: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            accent: Color::Cyan,
            column_header: Color::Yellow,
            frame: Color::DarkGray,
            muted: Color::DarkGray,
            tag: Color::Magenta,
            filter_tag: Color::Green,
            loading: Color::Yellow,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Cursor row in the post table and the tag picker
    #[must_use]
    pub fn row_highlight(&self) -> Style {
        Style::new()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Block border, accented while the block has focus
    #[must_use]
    pub fn frame(&self, focused: bool) -> Style {
        if focused {
            self.key()
        } else {
            Style::new().fg(self.frame)
        }
    }

    #[must_use]
    pub fn column_header(&self) -> Style {
        Style::new()
            .fg(self.column_header)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Tag chip; tags in the active filter are drawn bold in their own color
    #[must_use]
    pub fn tag(&self, in_filter: bool) -> Style {
        if in_filter {
            Style::new().fg(self.filter_tag).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(self.tag)
        }
    }

    #[must_use]
    pub fn loading(&self) -> Style {
        Style::new().fg(self.loading).add_modifier(Modifier::ITALIC)
    }

    /// Status line message
    #[must_use]
    pub fn message(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Normal => return Style::new(),
            MessageLevel::Success => self.success,
            MessageLevel::Error => self.error,
            MessageLevel::Warning => self.warning,
            MessageLevel::Info => self.info,
        };
        Style::new().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_follows_focus() {
        let theme = Theme::default();
        assert_eq!(theme.frame(true), theme.key());
        assert_eq!(theme.frame(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_filter_tags_stand_out() {
        let theme = Theme::default();
        assert_ne!(theme.tag(true), theme.tag(false));
        assert!(theme.tag(true).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_normal_message_is_unstyled() {
        let theme = Theme::default();
        assert_eq!(theme.message(MessageLevel::Normal), Style::new());
        assert_eq!(theme.message(MessageLevel::Error).fg, Some(Color::Red));
    }
}
