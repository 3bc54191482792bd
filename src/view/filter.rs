//! Client-side projections over the loaded page
//!
//! Tag filtering happens after the fetch and never touches the network. Both
//! helpers are pure and recomputed on every render.

use crate::post::Post;
use std::collections::HashSet;

/// Posts that carry every tag in `selected`
///
/// With no selected tags the page is returned unchanged. Order is preserved.
#[must_use]
pub fn filter_by_tags<'a>(posts: &'a [Post], selected: &[String]) -> Vec<&'a Post> {
    if selected.is_empty() {
        return posts.iter().collect();
    }
    posts
        .iter()
        .filter(|post| post.has_all_tags(selected))
        .collect()
}

/// Distinct tags of the page in first-seen order
#[must_use]
pub fn tag_universe(posts: &[Post]) -> Vec<String> {
    dedup_preserving_order(posts.iter().flat_map(|post| post.tags.iter().cloned()))
}

/// Remove duplicates while keeping the first occurrence of each value
pub fn dedup_preserving_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
