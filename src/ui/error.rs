//! Errors raised while the browser owns the terminal

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// Drawing, raw mode or event polling failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// stdout is not an interactive terminal
    #[error("Terminal unavailable: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
