//! Fetch orchestration
//!
//! [`ViewController`] owns the [`ViewState`] and carries out the effects the
//! reducer asks for: it restarts the debounce timer, records navigations and
//! runs fetches on worker threads. Responses come back over a channel and are
//! applied on the thread that owns the controller, so the state is only ever
//! mutated from one place.

use super::debounce::{DEFAULT_DEBOUNCE, DebounceHandle, Debouncer};
use super::error::FetchError;
use super::reducer::{Action, Effect, FetchOutcome, reduce};
use super::router::Router;
use super::state::{DEFAULT_PAGE_SIZE, FetchRequest, RequestId, ViewState};
use crate::api::PostSource;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Tunables for a [`ViewController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Quiet period before a debounced fetch
    pub debounce: Duration,
    /// Drop responses older than one already received
    pub discard_stale_responses: bool,
    /// Initial page size
    pub page_size: u32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            discard_stale_responses: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A finished fetch as delivered by a worker thread
#[derive(Debug)]
pub struct FetchResponse {
    /// Request the response belongs to
    pub request: RequestId,
    /// What came back
    pub outcome: FetchOutcome,
}

/// Drives a [`ViewState`] against a [`PostSource`]
pub struct ViewController {
    state: ViewState,
    router: Router,
    debouncer: Debouncer,
    /// Handle of the schedule this controller armed last
    pending: Option<DebounceHandle>,
    source: Arc<dyn PostSource>,
    responses_tx: Sender<FetchResponse>,
    responses_rx: Receiver<FetchResponse>,
    next_request: u64,
    in_flight: usize,
    mounted: bool,
}

impl ViewController {
    /// Create an unmounted controller with a fresh state
    #[must_use]
    pub fn new(source: Arc<dyn PostSource>, options: ControllerOptions) -> Self {
        let state = ViewState::new(options.page_size)
            .with_discard_stale(options.discard_stale_responses);
        Self::with_state(source, state, options.debounce)
    }

    /// Create an unmounted controller starting from `state`
    #[must_use]
    pub fn with_state(source: Arc<dyn PostSource>, state: ViewState, debounce: Duration) -> Self {
        let (responses_tx, responses_rx) = mpsc::channel();
        Self {
            state,
            router: Router::new(),
            debouncer: Debouncer::new(debounce),
            pending: None,
            source,
            responses_tx,
            responses_rx,
            next_request: 0,
            in_flight: 0,
            mounted: false,
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Navigation history
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Whether the controller is mounted
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of fetches whose response has not arrived yet
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether a debounced fetch is pending
    #[must_use]
    pub const fn has_pending_fetch(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Start the controller: fetch right away and arm the debounce timer
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        log::info!(
            "event=mount module=view page={} page_size={} search={:?}",
            self.state.pagination.current,
            self.state.pagination.page_size,
            self.state.filter.search_query
        );
        self.apply(Action::RouteChanged, now);
        self.schedule_fetch(now);
    }

    /// Stop the controller; the pending debounce is cancelled and late
    /// responses are ignored
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        let cancelled = self.cancel_pending();
        log::info!(
            "event=unmount module=view cancelled_debounce={cancelled} in_flight={}",
            self.in_flight
        );
    }

    /// Apply a user action
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        if !self.mounted {
            log::debug!("event=action_ignored module=view reason=unmounted action={action:?}");
            return;
        }
        self.apply(action, now);
    }

    /// Cancel the pending debounced fetch, if any
    pub fn cancel_pending(&mut self) -> bool {
        self.pending
            .take()
            .is_some_and(|handle| self.debouncer.cancel_handle(handle))
    }

    fn schedule_fetch(&mut self, now: Instant) {
        self.pending = Some(self.debouncer.schedule(now));
    }

    /// Apply received responses and fire the debounce timer if it is due
    ///
    /// Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Ok(response) = self.responses_rx.try_recv() {
            self.receive(response);
            changed = true;
        }
        if self.mounted && self.debouncer.fire_if_due(now) {
            self.pending = None;
            self.start_fetch();
            changed = true;
        }
        changed
    }

    /// How long the owner may sleep before the next [`tick`](Self::tick)
    /// has timer work to do
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Block until one response arrives (or `timeout` passes) and apply it
    pub fn wait_for_response(&mut self, timeout: Duration) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.responses_rx.recv_timeout(timeout) {
            Ok(response) => {
                self.receive(response);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Wait until every in-flight fetch has answered
    ///
    /// Returns `false` if `timeout` elapsed first.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_for_response(remaining) {
                return false;
            }
        }
        true
    }

    fn apply(&mut self, action: Action, now: Instant) {
        let mut queue = VecDeque::from(reduce(&mut self.state, action));
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::ScheduleFetch => self.schedule_fetch(now),
                Effect::FetchNow => self.start_fetch(),
                Effect::Navigate(location) => {
                    self.router.navigate(location);
                    queue.extend(reduce(&mut self.state, Action::RouteChanged));
                }
            }
        }
    }

    fn start_fetch(&mut self) {
        if !self.mounted {
            return;
        }
        self.next_request += 1;
        let request = FetchRequest {
            id: RequestId(self.next_request),
            query: self.state.page_query(),
        };
        log::debug!(
            "event=fetch_started module=view request={} q={:?} skip={} limit={}",
            request.id.0,
            request.query.query,
            request.query.skip,
            request.query.limit
        );
        reduce(&mut self.state, Action::FetchStarted(request.clone()));

        let source = Arc::clone(&self.source);
        let tx = self.responses_tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("postdeck-fetch-{}", request.id.0))
            .spawn(move || {
                let outcome = FetchOutcome::from(source.search(&request.query));
                // The controller may be gone by now
                let _ = tx.send(FetchResponse {
                    request: request.id,
                    outcome,
                });
            });

        match spawned {
            Ok(_) => self.in_flight += 1,
            Err(err) => {
                let id = RequestId(self.next_request);
                self.fail(id, FetchError::new(format!("could not start fetch: {err}")));
            }
        }
    }

    fn receive(&mut self, response: FetchResponse) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !self.mounted {
            log::debug!(
                "event=response_ignored module=view reason=unmounted request={}",
                response.request.0
            );
            return;
        }
        match response.outcome {
            FetchOutcome::Failed(err) => self.fail(response.request, err),
            outcome @ FetchOutcome::Loaded(_) => {
                reduce(
                    &mut self.state,
                    Action::FetchCompleted {
                        request: response.request,
                        outcome,
                    },
                );
            }
        }
    }

    fn fail(&mut self, request: RequestId, err: FetchError) {
        log::error!(
            "event=fetch_failed module=view request={} status={} error={}",
            request.0,
            err.status.map_or_else(|| "-".to_string(), |s| s.to_string()),
            err
        );
        reduce(
            &mut self.state,
            Action::FetchCompleted {
                request,
                outcome: FetchOutcome::Failed(err),
            },
        );
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, PageQuery};
    use crate::post::PostPage;
    use crate::testing::{MockSource, post, sample_posts};
    use crate::view::Location;

    const DEBOUNCE: Duration = Duration::from_millis(500);
    const WAIT: Duration = Duration::from_secs(5);

    fn controller(source: &Arc<MockSource>) -> ViewController {
        let options = ControllerOptions {
            debounce: DEBOUNCE,
            ..ControllerOptions::default()
        };
        ViewController::new(Arc::clone(source) as Arc<dyn PostSource>, options)
    }

    #[test]
    fn test_mount_fetches_now_and_arms_debounce() {
        let source = Arc::new(MockSource::with_default(PostPage::new(sample_posts(), 4)));
        let mut controller = controller(&source);
        let start = Instant::now();

        controller.mount(start);
        assert!(controller.state().is_loading());
        assert!(controller.has_pending_fetch());
        assert!(controller.settle(WAIT));

        assert_eq!(source.queries(), vec![PageQuery::new("", 0, 10)]);
        assert_eq!(controller.state().posts.len(), 4);
        assert!(!controller.state().is_loading());

        assert!(controller.tick(start + DEBOUNCE));
        assert!(controller.settle(WAIT));
        assert_eq!(source.queries().len(), 2);
    }

    #[test]
    fn test_rapid_edits_collapse_into_one_fetch() {
        let source = Arc::new(MockSource::with_default(PostPage::new(vec![], 0)));
        let mut controller = controller(&source);
        let start = Instant::now();
        controller.mount(start);
        controller.cancel_pending();
        assert!(controller.settle(WAIT));

        for (step, text) in ["l", "lo", "lov", "love"].iter().enumerate() {
            let now = start + Duration::from_millis(100 * step as u64);
            controller.dispatch(Action::SearchEdited((*text).to_string()), now);
            controller.tick(now);
        }
        controller.tick(start + Duration::from_millis(799));
        assert_eq!(controller.in_flight(), 0);

        controller.tick(start + Duration::from_millis(800));
        assert!(controller.settle(WAIT));

        let queries = source.queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1], PageQuery::new("love", 0, 10));
    }

    #[test]
    fn test_search_change_resets_page_before_fetch() {
        let source = Arc::new(MockSource::with_default(PostPage::new(vec![], 100)));
        let mut controller = controller(&source);
        let start = Instant::now();
        controller.mount(start);
        controller.dispatch(
            Action::PageChanged {
                page: 5,
                page_size: 10,
            },
            start,
        );
        controller.dispatch(Action::SearchSubmitted("love".into()), start);
        assert!(controller.settle(WAIT));

        // Workers race, so only the set of queries is deterministic
        let searches: Vec<PageQuery> = source
            .queries()
            .into_iter()
            .filter(|q| q.query == "love")
            .collect();
        assert_eq!(searches, vec![PageQuery::new("love", 0, 10)]);
        assert_eq!(controller.state().pagination.current, 1);
    }

    #[test]
    fn test_navigation_is_recorded_and_fetches() {
        let source = Arc::new(MockSource::with_default(PostPage::new(sample_posts(), 4)));
        let mut controller = controller(&source);
        let start = Instant::now();
        controller.mount(start);
        assert!(controller.settle(WAIT));

        controller.dispatch(
            Action::TagSelectionChanged(vec!["history".into(), "crime".into()]),
            start,
        );
        assert!(controller.settle(WAIT));

        assert_eq!(
            controller.router().current(),
            Some(&Location::tags(&["history".into(), "crime".into()]))
        );
        assert_eq!(source.queries().len(), 2);
        assert_eq!(controller.state().visible_posts().len(), 1);
    }

    #[test]
    fn test_failure_keeps_posts() {
        let source = Arc::new(MockSource::new());
        source.push(Ok(PostPage::new(vec![post(1, "A", &["x"])], 1)));
        source.push(Err(ApiError::Status {
            status: 500,
            body: "oops".into(),
        }));
        let mut controller = controller(&source);
        let start = Instant::now();
        controller.mount(start);
        controller.cancel_pending();
        assert!(controller.settle(WAIT));

        controller.dispatch(
            Action::PageChanged {
                page: 2,
                page_size: 10,
            },
            start,
        );
        assert!(controller.settle(WAIT));

        let state = controller.state();
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.pagination.total, 1);
        assert!(!state.is_loading());
        assert_eq!(state.last_error.as_ref().and_then(|e| e.status), Some(500));
    }

    #[test]
    fn test_unmount_cancels_debounce_and_ignores_responses() {
        let source = Arc::new(MockSource::with_default(PostPage::new(sample_posts(), 4)));
        let mut controller = controller(&source);
        let start = Instant::now();
        controller.mount(start);
        controller.unmount();

        assert!(!controller.has_pending_fetch());
        assert!(controller.settle(WAIT));
        assert!(controller.state().posts.is_empty());

        controller.tick(start + DEBOUNCE * 2);
        assert_eq!(source.queries().len(), 1);
    }

    #[test]
    fn test_cancel_pending_only_cancels_armed_schedule() {
        let source = Arc::new(MockSource::with_default(PostPage::new(vec![], 0)));
        let mut controller = controller(&source);
        let start = Instant::now();
        controller.mount(start);

        assert!(controller.cancel_pending());
        assert!(!controller.has_pending_fetch());
        assert!(!controller.cancel_pending());

        controller.dispatch(Action::SearchEdited("a".into()), start);
        assert!(controller.tick(start + DEBOUNCE));
        assert!(!controller.has_pending_fetch());
        assert!(!controller.cancel_pending());
        assert!(controller.settle(WAIT));
        assert_eq!(source.queries().len(), 2);
    }

    #[test]
    fn test_dispatch_before_mount_is_ignored() {
        let source = Arc::new(MockSource::new());
        let mut controller = controller(&source);
        controller.dispatch(Action::SearchSubmitted("x".into()), Instant::now());

        assert_eq!(controller.state().filter.search_query, "");
        assert!(controller.router().history().is_empty());
        assert_eq!(controller.in_flight(), 0);
    }
}
