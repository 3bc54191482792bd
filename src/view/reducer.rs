//! Pure state transitions
//!
//! [`reduce`] applies one [`Action`] to the [`ViewState`] and returns the
//! side effects the caller has to carry out. It never blocks, spawns or
//! reads the clock, so every transition can be tested without a terminal or
//! a network.

use super::error::FetchError;
use super::filter;
use super::router::Location;
use super::state::{FetchPhase, FetchRequest, RequestId, ViewState};
use crate::post::PostPage;

/// Something that happened to the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user submitted the search box
    SearchSubmitted(String),
    /// The user edited the search box without submitting
    SearchEdited(String),
    /// The user applied a new tag selection
    TagSelectionChanged(Vec<String>),
    /// The user moved to another page or page size
    PageChanged {
        /// 1-based target page
        page: u32,
        /// Posts per page
        page_size: u32,
    },
    /// A navigation happened
    RouteChanged,
    /// A fetch was issued
    FetchStarted(FetchRequest),
    /// A fetch finished
    FetchCompleted {
        /// Request this response belongs to
        request: RequestId,
        /// What came back
        outcome: FetchOutcome,
    },
}

/// Result of a remote fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was decoded
    Loaded(PostPage),
    /// The request or decoding failed
    Failed(FetchError),
}

impl<E: Into<FetchError>> From<Result<PostPage, E>> for FetchOutcome {
    fn from(result: Result<PostPage, E>) -> Self {
        match result {
            Ok(page) => Self::Loaded(page),
            Err(err) => Self::Failed(err.into()),
        }
    }
}

/// Work requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Restart the debounce timer; a fetch follows once it expires
    ScheduleFetch,
    /// Fetch the current page right away
    FetchNow,
    /// Record a navigation; the route change triggers a fetch
    Navigate(Location),
}

/// Apply `action` to `state`
pub fn reduce(state: &mut ViewState, action: Action) -> Vec<Effect> {
    let before = state.debounce_key();
    let mut effects = Vec::new();

    match action {
        Action::SearchSubmitted(text) => {
            state.filter.search_query.clone_from(&text);
            state.pagination.current = 1;
            effects.push(Effect::Navigate(Location::search(text)));
        }
        Action::SearchEdited(text) => {
            if state.filter.search_query != text {
                state.filter.search_query = text;
                state.pagination.current = 1;
            }
        }
        Action::TagSelectionChanged(tags) => {
            state.filter.set_selected_tags(tags);
            state.pagination.current = 1;
            effects.push(Effect::Navigate(Location::tags(
                &state.filter.selected_tags,
            )));
        }
        Action::PageChanged { page, page_size } => {
            state.pagination.current = page.max(1);
            state.pagination.page_size = page_size.max(1);
            effects.push(Effect::Navigate(Location::page(state.pagination.current)));
        }
        Action::RouteChanged => effects.push(Effect::FetchNow),
        Action::FetchStarted(request) => {
            state.latest_request = Some(request.id);
            state.phase = FetchPhase::Loading;
        }
        Action::FetchCompleted { request, outcome } => {
            complete_fetch(state, request, outcome);
        }
    }

    if state.debounce_key() != before {
        effects.insert(0, Effect::ScheduleFetch);
    }
    effects
}

fn complete_fetch(state: &mut ViewState, request: RequestId, outcome: FetchOutcome) {
    if state.discard_stale_responses && state.received_request.is_some_and(|r| r >= request) {
        log::debug!(
            "event=stale_response_dropped module=view request={} received={}",
            request.0,
            state.received_request.map_or(0, |r| r.0)
        );
        return;
    }
    state.received_request = state.received_request.max(Some(request));

    let failed = match outcome {
        FetchOutcome::Loaded(page) => {
            state.pagination.total = page.total;
            state.tag_universe = filter::tag_universe(&page.posts);
            state.posts = page.posts;
            state.last_error = None;
            false
        }
        FetchOutcome::Failed(err) => {
            state.last_error = Some(err);
            true
        }
    };

    // A newer request is still pending; keep showing the loading marker
    if state.latest_request > state.received_request {
        return;
    }
    state.phase = if failed {
        FetchPhase::Failed
    } else {
        FetchPhase::Idle
    };
}
