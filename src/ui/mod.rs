//! UI layer
//!
//! Two ways of presenting posts:
//!
//! - [`ratatui_adapter::Browser`] - the interactive terminal browser
//! - [`output::OutputWriter`] - line output for the non-interactive commands
//!
//! ```
//! use postdeck::ui::output::{OutputWriter, MemoryWriter, MessageLevel};
//!
//! let output = MemoryWriter::new();
//! output.write("1  His mother had always taught him");
//! output.error("Request failed");
//! assert_eq!(output.lines_at(MessageLevel::Error), vec!["Request failed"]);
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MemoryWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::Browser;
