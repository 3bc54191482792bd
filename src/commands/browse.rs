//! Browse command - interactive post browser

use super::initial_state;
use crate::{
    PostdeckError,
    api::HttpPostSource,
    cli::QueryArgs,
    config::PostdeckConfig,
    ui::Browser,
    view::ViewController,
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, PostdeckError>;

/// Execute the browse command
///
/// # Errors
/// Returns an error if the endpoint is invalid or the terminal cannot be used
pub fn execute(config: &PostdeckConfig, query: &QueryArgs) -> Result<()> {
    let source = HttpPostSource::with_timeout(&config.endpoint, config.timeout())?;
    log::info!(
        "event=browse_start module=commands endpoint={} debounce_ms={} discard_stale={}",
        source.endpoint(),
        config.debounce_ms,
        config.discard_stale_responses
    );

    let state = initial_state(config, query);
    let mut controller = ViewController::with_state(Arc::new(source), state, config.debounce());

    Browser::new().run(&mut controller)?;
    Ok(())
}
