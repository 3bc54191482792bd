//! Testing utilities for postdeck
//!
//! Fixtures and an in-memory [`PostSource`] double.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, PageQuery, PostSource, Result};
use crate::post::{Post, PostPage};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Build a post whose body is derived from the title
#[must_use]
pub fn post(id: u64, title: &str, tags: &[&str]) -> Post {
    Post::new(
        id,
        title,
        format!("Body of {title}"),
        tags.iter().map(|t| (*t).to_string()).collect(),
    )
}

/// Four posts with overlapping tags
///
/// | id | tags                        |
/// |----|-----------------------------|
/// | 1  | history, american, crime    |
/// | 2  | french, fiction, english    |
/// | 3  | history, fiction, english   |
/// | 4  | magical, crime              |
#[must_use]
pub fn sample_posts() -> Vec<Post> {
    vec![
        post(1, "His mother had always taught him", &["history", "american", "crime"]),
        post(2, "He was an expert but not in a discipline", &["french", "fiction", "english"]),
        post(3, "Dave watched as the forest burned up", &["history", "fiction", "english"]),
        post(4, "All he wanted was a candy bar", &["magical", "crime"]),
    ]
}

/// Scripted [`PostSource`]
///
/// Answers queued results in order, then falls back to a default page (or an
/// error when none is set). Every query is recorded.
#[derive(Default)]
pub struct MockSource {
    responses: Mutex<VecDeque<Result<PostPage>>>,
    fallback: Option<PostPage>,
    queries: Mutex<Vec<PageQuery>>,
}

impl MockSource {
    /// Source with no queued responses and no fallback
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source answering every query with `page`
    #[must_use]
    pub fn with_default(page: PostPage) -> Self {
        Self {
            fallback: Some(page),
            ..Self::default()
        }
    }

    /// Queue a response
    ///
    /// # Panics
    /// Panics if the mutex is poisoned.
    pub fn push(&self, response: Result<PostPage>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queries received so far, in call order
    ///
    /// # Panics
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl PostSource for MockSource {
    fn search(&self, query: &PageQuery) -> Result<PostPage> {
        self.queries.lock().unwrap().push(query.clone());
        if let Some(response) = self.responses.lock().unwrap().pop_front() {
            return response;
        }
        self.fallback
            .clone()
            .ok_or_else(|| ApiError::Transport("no scripted response".into()))
    }
}
