//! Output formatting for CLI display
//!
//! Plain-terminal formatting used by `postdeck list`: one line per post,
//! a summary line for the page, and text truncation that respects
//! character boundaries.

use crate::post::Post;
use crate::view::PaginationState;
use colored::Colorize;

/// Longest title printed before truncation
pub const TITLE_WIDTH: usize = 48;

/// Truncate `text` to at most `max_chars` characters, marking the cut with `…`
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Format a post with its tags for display
///
/// In quiet mode only `id<TAB>title` is printed so the output can be piped.
/// Otherwise tags in `selected` are highlighted.
#[must_use]
pub fn post_with_tags(post: &Post, selected: &[String], quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", post.id, post.title);
    }

    let id = format!("#{:<4}", post.id).dimmed();
    let title = truncate(&post.title, TITLE_WIDTH);

    if post.tags.is_empty() {
        format!("  {id} {title:<TITLE_WIDTH$} (no tags)")
    } else {
        let tags = post
            .tags
            .iter()
            .map(|tag| {
                if selected.contains(tag) {
                    tag.green().bold().to_string()
                } else {
                    tag.cyan().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("  {id} {title:<TITLE_WIDTH$} [{tags}]")
    }
}

/// Summarize the page: position, range and how many posts the tag filter kept
#[must_use]
pub fn page_summary(pagination: &PaginationState, shown: usize, loaded: usize) -> String {
    let mut summary = format!(
        "Page {} of {} ({})",
        pagination.current,
        pagination.page_count(),
        pagination.range_label()
    );
    if shown != loaded {
        summary.push_str(&format!(", {shown} of {loaded} match the selected tags"));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::post;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("truncated text", 6), "trunc…");
        assert_eq!(truncate("éééé", 3), "éé…");
    }

    #[test]
    fn test_post_with_tags_quiet() {
        let p = post(7, "Quiet title", &["a"]);
        assert_eq!(post_with_tags(&p, &[], true), "7\tQuiet title");
    }

    #[test]
    fn test_post_with_tags_lists_tags() {
        colored::control::set_override(false);
        let p = post(3, "Dave watched", &["history", "fiction"]);
        let line = post_with_tags(&p, &["fiction".into()], false);

        assert!(line.contains("#3"));
        assert!(line.contains("Dave watched"));
        assert!(line.ends_with("[history, fiction]"));

        let untagged = post_with_tags(&post(4, "Bare", &[]), &[], false);
        assert!(untagged.ends_with("(no tags)"));
    }

    #[test]
    fn test_page_summary() {
        let mut pagination = PaginationState::new(2, 10);
        pagination.total = 42;

        assert_eq!(page_summary(&pagination, 10, 10), "Page 2 of 5 (11-20 of 42)");
        assert_eq!(
            page_summary(&pagination, 3, 10),
            "Page 2 of 5 (11-20 of 42), 3 of 10 match the selected tags"
        );
    }
}
