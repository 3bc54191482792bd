//! Postdeck - a terminal browser for paginated, searchable post feeds
//!
//! Posts are fetched page by page from a REST search endpoint. Search text
//! and page changes go back to the server after a short debounce; tag
//! selection is applied client-side to the loaded page and keeps only posts
//! that carry every selected tag.
//!
//! The crate is layered:
//!
//! - [`api`]: the [`PostSource`](api::PostSource) seam and its HTTP client
//! - [`view`]: view state, the reducer, debounce timer, router and the
//!   controller that runs fetches
//! - [`ui`]: the ratatui browser and plain-terminal output
//! - [`commands`]: `browse`, `list` and `config`

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod logging;
pub mod output;
pub mod post;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use post::{Post, PostPage};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PostdeckError {
    /// Remote API error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// A fetch driven by the view controller failed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] view::FetchError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LoggingError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

