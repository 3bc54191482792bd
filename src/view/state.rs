//! View state for the post browser
//!
//! Everything the browser shows is derived from [`ViewState`]. It is mutated
//! only by [`reduce`](super::reduce), never by widgets.

use super::error::FetchError;
use super::filter;
use crate::api::PageQuery;
use crate::post::Post;

/// Page size used before the user picks one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered by the page size switcher
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Pagination cursor and the server-reported total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based page number
    pub current: u32,
    /// Posts per page
    pub page_size: u32,
    /// Total matching posts reported by the last response
    pub total: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl PaginationState {
    /// Create a cursor; zero page numbers or sizes are clamped to 1
    #[must_use]
    pub fn new(current: u32, page_size: u32) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Number of posts before the current page
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.current.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Number of pages for the current total (at least 1)
    #[must_use]
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether a next page exists
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// 1-based inclusive range of posts shown on this page, if any
    #[must_use]
    pub fn range(&self) -> Option<(u64, u64)> {
        let start = self.offset() + 1;
        if start > self.total {
            return None;
        }
        let end = (self.offset() + u64::from(self.page_size)).min(self.total);
        Some((start, end))
    }

    /// Range label like `11-20 of 150`
    #[must_use]
    pub fn range_label(&self) -> String {
        match self.range() {
            Some((start, end)) => format!("{start}-{end} of {}", self.total),
            None => format!("0 of {}", self.total),
        }
    }

    /// Page that keeps the first post of the current page visible after
    /// switching to `page_size`
    #[must_use]
    pub fn page_for_size(&self, page_size: u32) -> u32 {
        let size = u64::from(page_size.max(1));
        u32::try_from(self.offset() / size + 1).unwrap_or(u32::MAX)
    }

    /// Next entry of [`PAGE_SIZE_OPTIONS`] after the current size, wrapping
    #[must_use]
    pub fn next_page_size(&self) -> u32 {
        PAGE_SIZE_OPTIONS
            .iter()
            .copied()
            .find(|size| *size > self.page_size)
            .unwrap_or(PAGE_SIZE_OPTIONS[0])
    }
}

/// Search text and tag selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Text sent to the server as `q`
    pub search_query: String,
    /// Tags every visible post must carry, in selection order, no duplicates
    pub selected_tags: Vec<String>,
}

impl FilterState {
    /// Replace the tag selection, dropping duplicates
    pub fn set_selected_tags(&mut self, tags: Vec<String>) {
        self.selected_tags = filter::dedup_preserving_order(tags);
    }
}

/// Where the fetch state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Last fetch succeeded (or nothing is pending)
    Idle,
    /// A fetch is in flight
    #[default]
    Loading,
    /// Last fetch failed; previous data is still shown
    Failed,
}

/// Monotonic identifier of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// A fetch about to be issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Identifier used to match the response
    pub id: RequestId,
    /// Remote query parameters
    pub query: PageQuery,
}

/// Complete state of the post browser
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Search and tag filter
    pub filter: FilterState,
    /// Page cursor and total
    pub pagination: PaginationState,
    /// Posts of the most recently applied page
    pub posts: Vec<Post>,
    /// Distinct tags of `posts`, first-seen order
    pub tag_universe: Vec<String>,
    /// Fetch state machine
    pub phase: FetchPhase,
    /// Most recent fetch failure, cleared by the next success
    pub last_error: Option<FetchError>,
    /// Drop responses older than one already received
    pub discard_stale_responses: bool,
    /// Newest request issued
    pub latest_request: Option<RequestId>,
    /// Newest request whose response was received
    pub received_request: Option<RequestId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Fresh state on page 1 with the given page size
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            filter: FilterState::default(),
            pagination: PaginationState::new(1, page_size),
            posts: Vec::new(),
            tag_universe: Vec::new(),
            phase: FetchPhase::Loading,
            last_error: None,
            discard_stale_responses: true,
            latest_request: None,
            received_request: None,
        }
    }

    /// Start from a search text
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.filter.search_query = query.into();
        self
    }

    /// Start with a tag selection
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.filter.set_selected_tags(tags);
        self
    }

    /// Start on a given page
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.current = page.max(1);
        self
    }

    /// Choose how out-of-order responses are handled
    #[must_use]
    pub const fn with_discard_stale(mut self, discard: bool) -> Self {
        self.discard_stale_responses = discard;
        self
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Posts passing the tag filter, recomputed on each call
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter::filter_by_tags(&self.posts, &self.filter.selected_tags)
    }

    /// Remote query for the current search text and page
    #[must_use]
    pub fn page_query(&self) -> PageQuery {
        PageQuery::new(
            self.filter.search_query.clone(),
            self.pagination.offset(),
            u64::from(self.pagination.page_size),
        )
    }

    /// Values whose change restarts the debounce timer
    pub(crate) fn debounce_key(&self) -> (String, u32, u32) {
        (
            self.filter.search_query.clone(),
            self.pagination.current,
            self.pagination.page_size,
        )
    }
}
