//! List command - print one page of posts without the browser

use super::initial_state;
use crate::{
    PostdeckError,
    api::PostSource,
    cli::QueryArgs,
    config::PostdeckConfig,
    output,
    ui::OutputWriter,
    view::{FetchError, ViewController},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

type Result<T> = std::result::Result<T, PostdeckError>;

/// Slack on top of the HTTP timeout before giving up on a worker
const SETTLE_GRACE: Duration = Duration::from_secs(1);

/// Execute the list command
///
/// Fetches the requested page, applies the tag filter and prints the posts
/// that remain, as text lines or as a JSON array.
///
/// # Errors
/// Returns an error if the fetch fails or does not finish in time, or if the
/// posts cannot be serialized.
pub fn execute(
    source: Arc<dyn PostSource>,
    config: &PostdeckConfig,
    query: &QueryArgs,
    json: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let state = initial_state(config, query);
    let mut controller = ViewController::with_state(source, state, config.debounce());

    controller.mount(Instant::now());
    controller.cancel_pending();

    if !controller.settle(config.timeout() + SETTLE_GRACE) {
        return Err(PostdeckError::Fetch(FetchError::new(format!(
            "no response within {}s",
            config.timeout_secs
        ))));
    }

    let view = controller.state();
    if let Some(err) = &view.last_error {
        return Err(PostdeckError::Fetch(err.clone()));
    }

    let visible = view.visible_posts();
    log::info!(
        "event=list_done module=commands loaded={} shown={} total={}",
        view.posts.len(),
        visible.len(),
        view.pagination.total
    );

    if json {
        out.write(&serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        if view.posts.is_empty() {
            out.info("No posts found.");
        } else {
            out.info("No posts on this page carry all selected tags.");
        }
    }

    for post in &visible {
        out.write(&output::post_with_tags(post, &view.filter.selected_tags, config.quiet));
    }

    out.info(&output::page_summary(
        &view.pagination,
        visible.len(),
        view.posts.len(),
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::post::PostPage;
    use crate::testing::{MockSource, post, sample_posts};
    use crate::ui::{MemoryWriter, MessageLevel};

    fn quiet_config() -> PostdeckConfig {
        PostdeckConfig {
            quiet: true,
            timeout_secs: 2,
            ..PostdeckConfig::default()
        }
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_lists_posts_with_all_selected_tags() {
        let source = Arc::new(MockSource::with_default(PostPage::new(sample_posts(), 4)));
        let out = MemoryWriter::new();
        let query = QueryArgs {
            tags: tags(&["fiction", "english"]),
            ..QueryArgs::default()
        };

        execute(source, &quiet_config(), &query, false, &out).unwrap();

        let rows = out.lines_at(MessageLevel::Normal);
        assert_eq!(
            rows,
            vec![
                "2\tHe was an expert but not in a discipline",
                "3\tDave watched as the forest burned up",
            ]
        );
        let info = out.lines_at(MessageLevel::Info);
        assert_eq!(info.len(), 1);
        assert!(info[0].contains("2 of 4 match the selected tags"));
    }

    #[test]
    fn test_sends_search_and_offset() {
        let source = Arc::new(MockSource::with_default(PostPage::new(vec![], 0)));
        let out = MemoryWriter::new();
        let query = QueryArgs {
            search: Some("love".into()),
            page: Some(2),
            ..QueryArgs::default()
        };

        execute(source.clone(), &quiet_config(), &query, false, &out).unwrap();

        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query, "love");
        assert_eq!(queries[0].skip, 10);
        assert_eq!(queries[0].limit, 10);
        assert!(out.lines_at(MessageLevel::Info)[0].contains("No posts found"));
    }

    #[test]
    fn test_json_output_contains_filtered_posts() {
        let source = Arc::new(MockSource::with_default(PostPage::new(
            vec![post(1, "A", &["x", "y"])],
            1,
        )));
        let out = MemoryWriter::new();
        let query = QueryArgs {
            tags: tags(&["x"]),
            ..QueryArgs::default()
        };

        execute(source, &quiet_config(), &query, true, &out).unwrap();

        let rows = out.lines_at(MessageLevel::Normal);
        assert_eq!(rows.len(), 1);
        let posts: Vec<crate::post::Post> = serde_json::from_str(&rows[0]).unwrap();
        assert_eq!(posts, vec![post(1, "A", &["x", "y"])]);
    }

    #[test]
    fn test_json_output_empty_when_tag_missing() {
        let source = Arc::new(MockSource::with_default(PostPage::new(
            vec![post(1, "A", &["x", "y"])],
            1,
        )));
        let out = MemoryWriter::new();
        let query = QueryArgs {
            tags: tags(&["z"]),
            ..QueryArgs::default()
        };

        execute(source, &quiet_config(), &query, true, &out).unwrap();
        assert_eq!(out.lines_at(MessageLevel::Normal), vec!["[]"]);
    }

    #[test]
    fn test_fetch_failure_is_an_error() {
        let source = Arc::new(MockSource::new());
        source.push(Err(ApiError::Status {
            status: 500,
            body: String::new(),
        }));
        let out = MemoryWriter::new();

        let err = execute(source, &quiet_config(), &QueryArgs::default(), false, &out).unwrap_err();

        assert!(matches!(err, PostdeckError::Fetch(ref e) if e.status == Some(500)));
        assert!(out.lines().is_empty());
    }
}
