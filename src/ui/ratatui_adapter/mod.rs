//! Ratatui-based post browser
//!
//! Terminal front end for the [`view`](crate::view) controller.
//!
//! Each turn of the [`Browser`] loop ticks the controller so a due debounce
//! fires, draws the [`ViewState`](crate::view::ViewState) with the widgets in
//! [`widgets`], then waits for a key no longer than the next debounce
//! deadline. Keys either change [`BrowserState`] (cursor, overlays, the
//! search input) or become view [`Action`](crate::view::Action)s.
//!
//! Keys: typing searches after a pause and Enter searches at once,
//! PgUp/PgDn page, Ctrl+S cycles the page size, Ctrl+T opens the tag
//! picker and F1 shows help.

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::{Browser, render};
pub use events::{EventResult, handle_key, poll_and_handle};
pub use state::{BrowserState, Mode, Notice, SearchInput};
pub use theme::Theme;
