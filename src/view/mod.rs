//! View-state controller for the post browser
//!
//! The browser state is an explicit [`ViewState`] value. User input and fetch
//! results become [`Action`]s, the pure [`reduce`] function turns them into a
//! new state plus a list of [`Effect`]s, and [`ViewController`] carries those
//! effects out (debounce timer, navigation history, background fetches).
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//! use postdeck::api::HttpPostSource;
//! use postdeck::view::{Action, ControllerOptions, ViewController};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Arc::new(HttpPostSource::new("https://dummyjson.com/posts/search")?);
//! let mut controller = ViewController::new(source, ControllerOptions::default());
//!
//! controller.mount(Instant::now());
//! controller.dispatch(Action::SearchSubmitted("love".into()), Instant::now());
//! controller.settle(Duration::from_secs(10));
//!
//! for post in controller.state().visible_posts() {
//!     println!("{}: {}", post.id, post.title);
//! }
//! # Ok(())
//! # }
//! ```

mod controller;
mod debounce;
mod error;
mod filter;
mod reducer;
mod router;
mod state;

pub use controller::{ControllerOptions, FetchResponse, ViewController};
pub use debounce::{DEFAULT_DEBOUNCE, DebounceHandle, Debouncer};
pub use error::FetchError;
pub use filter::{dedup_preserving_order, filter_by_tags, tag_universe};
pub use reducer::{Action, Effect, FetchOutcome, reduce};
pub use router::{Location, Router};
pub use state::{
    DEFAULT_PAGE_SIZE, FetchPhase, FetchRequest, FilterState, PAGE_SIZE_OPTIONS,
    PaginationState, RequestId, ViewState,
};
