//! Post data model
//!
//! Mirrors the JSON shape returned by the remote search endpoint. Fields the
//! browser never displays (`reactions`, `views`, `userId`, ...) are ignored
//! when decoding.

use serde::{Deserialize, Serialize};

/// A single post as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Remote identifier
    pub id: u64,
    /// Post title
    #[serde(default)]
    pub title: String,
    /// Post body text
    #[serde(default)]
    pub body: String,
    /// Tags attached to the post, in server order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Create a new post
    #[must_use]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            tags,
        }
    }

    /// Check whether the post carries `tag` (exact, case-sensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether every tag in `tags` appears on the post
    ///
    /// An empty `tags` slice is trivially satisfied.
    #[must_use]
    pub fn has_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.has_tag(tag))
    }

    /// Tags joined for display in the table
    #[must_use]
    pub fn tags_label(&self) -> String {
        self.tags.join(", ")
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    /// Posts on this page
    pub posts: Vec<Post>,
    /// Total number of posts matching the query across all pages
    pub total: u64,
    /// Offset the server applied
    #[serde(default)]
    pub skip: u64,
    /// Page size the server applied
    #[serde(default)]
    pub limit: u64,
}

impl PostPage {
    /// Create a page from posts and a total count
    #[must_use]
    pub fn new(posts: Vec<Post>, total: u64) -> Self {
        let limit = posts.len() as u64;
        Self {
            posts,
            total,
            skip: 0,
            limit,
        }
    }
}
