//! Error types for the content-source boundary

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by content fetching and response validation.
///
/// A missing document is not an error: by-identifier lookups return
/// `Ok(None)` so callers can render a dedicated "not found" state.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network or backend failure during a page or document fetch
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// A fetch did not resolve within the configured deadline
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    /// A response was missing required fields or carried wrong types
    #[error("malformed content at {path}: {message}")]
    MalformedContent { path: String, message: String },
}

impl SourceError {
    /// Shorthand for a [`SourceError::MalformedContent`] at a JSON path
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedContent {
            path: path.into(),
            message: message.into(),
        }
    }
}
