//! Widgets drawn by the post browser
//!
//! Each widget borrows what it shows from `ViewState` or `BrowserState` and
//! is rebuilt on every frame.

mod help_bar;
mod help_overlay;
mod pagination_bar;
mod post_table;
mod search_bar;
mod status_bar;
mod tag_picker;

pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use pagination_bar::PaginationBar;
pub use post_table::PostTable;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tag_picker::{TagPicker, TagPickerState};

use ratatui::layout::{Constraint, Layout, Rect};

/// Overlay area taking the given percentages of `area`, centered
pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Percentage(height_percent),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, popup, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(width_percent),
        Constraint::Fill(1),
    ])
    .areas(middle);
    popup
}
