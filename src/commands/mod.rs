//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the effective configuration.

pub mod browse;
pub mod config;
pub mod list;

pub use browse::execute as browse;
pub use config::execute as config;
pub use list::execute as list;

use crate::cli::QueryArgs;
use crate::config::PostdeckConfig;
use crate::view::ViewState;

/// Starting view for `browse` and `list`
///
/// Tags given on the command line are selected before the first fetch; they
/// only filter the page client-side.
#[must_use]
pub fn initial_state(config: &PostdeckConfig, query: &QueryArgs) -> ViewState {
    let mut state = ViewState::new(config.page_size)
        .with_discard_stale(config.discard_stale_responses)
        .with_tags(query.tags.clone());
    if let Some(search) = &query.search {
        state = state.with_search(search.clone());
    }
    if let Some(page) = query.page {
        state = state.with_page(page);
    }
    state
}
