//! Remote data source
//!
//! The browser never talks HTTP directly. It goes through the [`PostSource`]
//! trait so the view-state controller can be driven by the real endpoint
//! ([`HttpPostSource`]) or by an in-memory double in tests.
//!
//! ```no_run
//! use postdeck::api::{HttpPostSource, PageQuery, PostSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpPostSource::new("https://dummyjson.com/posts/search")?;
//! let page = source.search(&PageQuery::new("love", 0, 10))?;
//! println!("{} of {} posts", page.posts.len(), page.total);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpPostSource, normalize_endpoint};
pub use error::{ApiError, Result};

use crate::post::PostPage;

/// Parameters of one remote search request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageQuery {
    /// Search text (`q`)
    pub query: String,
    /// Number of posts to skip (`skip`)
    pub skip: u64,
    /// Page size (`limit`)
    pub limit: u64,
}

impl PageQuery {
    /// Create a new page query
    #[must_use]
    pub fn new(query: impl Into<String>, skip: u64, limit: u64) -> Self {
        Self {
            query: query.into(),
            skip,
            limit,
        }
    }
}

/// A source of paginated post search results
///
/// Implementations block until the page is available; the controller runs
/// them on worker threads.
pub trait PostSource: Send + Sync {
    /// Fetch one page of posts matching `query`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response cannot be
    /// decoded.
    fn search(&self, query: &PageQuery) -> Result<PostPage>;
}
