//! Post table widget
//!
//! Three columns: title, body and the comma-joined tags. Tags that are part
//! of the active filter are highlighted.

use crate::post::Post;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

/// Table of the posts that passed the tag filter
pub struct PostTable<'a> {
    posts: &'a [&'a Post],
    selected_tags: &'a [String],
    theme: &'a Theme,
    loading: bool,
    loaded: usize,
}

impl<'a> PostTable<'a> {
    /// Create a table over the visible posts
    #[must_use]
    pub const fn new(posts: &'a [&'a Post], selected_tags: &'a [String], theme: &'a Theme) -> Self {
        Self {
            posts,
            selected_tags,
            theme,
            loading: false,
            loaded: posts.len(),
        }
    }

    /// Show the loading marker in the title
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Number of posts on the page before tag filtering
    #[must_use]
    pub const fn loaded(mut self, loaded: usize) -> Self {
        self.loaded = loaded;
        self
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(format!(" Posts ({}/{}) ", self.posts.len(), self.loaded))];
        if self.loading {
            spans.push(Span::styled("loading… ", self.theme.loading()));
        }
        Line::from(spans)
    }

    fn tags_cell(&self, post: &Post) -> Cell<'static> {
        let mut spans = Vec::with_capacity(post.tags.len() * 2);
        for (i, tag) in post.tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(", "));
            }
            let style = if self.selected_tags.contains(tag) {
                self.theme.tag(true)
            } else {
                self.theme.tag(false)
            };
            spans.push(Span::styled(tag.clone(), style));
        }
        Cell::from(Line::from(spans))
    }
}

impl StatefulWidget for PostTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame(false))
            .title(self.title());

        let header = Row::new(["Title", "Body", "Tags"]).style(self.theme.column_header());

        let rows: Vec<Row> = self
            .posts
            .iter()
            .map(|post| {
                Row::new(vec![
                    Cell::from(post.title.clone()),
                    Cell::from(post.body.clone()).style(self.theme.muted()),
                    self.tags_cell(post),
                ])
            })
            .collect();

        let empty = rows.is_empty();
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(45),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(self.theme.row_highlight())
        .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);

        if empty && !self.loading && area.height > 3 && area.width > 4 {
            let message = if self.loaded > 0 {
                "No posts on this page carry all selected tags"
            } else {
                "No posts found"
            };
            let line_area = Rect::new(area.x + 2, area.y + 2, area.width - 4, 1);
            Line::styled(message, self.theme.muted()).render(line_area, buf);
        }
    }
}
