//! Post list view - append-only pagination over post summaries
//!
//! The list grows one post per "load more" request: each call fetches
//! the next page and reveals only the first summary of that page. The
//! visible sequence never shrinks or reorders within a session, and a
//! failed fetch leaves it exactly as it was.

use std::sync::Arc;
use std::time::Duration;

use crate::content::{PageCursor, PaginationResult, PostSummary};
use crate::error::SourceError;
use crate::source::{with_deadline, ContentSource};

/// Session-local pagination state.
///
/// `visible` is append-only; `next_page` is `None` exactly when the
/// server has no further page.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    visible: Vec<PostSummary>,
    next_page: Option<PageCursor>,
}

impl PaginationState {
    /// Build the initial state from a pre-fetched first page.
    ///
    /// An empty first page is valid: the list starts empty and, with no
    /// cursor, stays that way.
    pub fn seed(first_page: PaginationResult) -> Self {
        Self {
            visible: first_page.results,
            next_page: first_page.next_page,
        }
    }

    /// Summaries in order of first appearance
    pub fn visible(&self) -> &[PostSummary] {
        &self.visible
    }

    /// Cursor to the next page, if any
    pub fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    /// True when no further page exists
    pub fn is_exhausted(&self) -> bool {
        self.next_page.is_none()
    }
}

/// Result of one "load more" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and this many summaries were appended
    /// (zero when the fetched page was empty)
    Appended(usize),
    /// No further page exists; no fetch was performed
    Exhausted,
}

/// The post list view: owns one pagination session against an injected
/// content source.
pub struct PostListView {
    source: Arc<dyn ContentSource>,
    fetch_timeout: Duration,
    state: PaginationState,
}

impl PostListView {
    /// Create a view over a pre-fetched first page
    pub fn new(
        source: Arc<dyn ContentSource>,
        fetch_timeout: Duration,
        first_page: PaginationResult,
    ) -> Self {
        Self {
            source,
            fetch_timeout,
            state: PaginationState::seed(first_page),
        }
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Visible summaries, in order of first appearance
    pub fn posts(&self) -> &[PostSummary] {
        self.state.visible()
    }

    /// Fetch the next page and reveal its first summary.
    ///
    /// Performs exactly one round trip, or none at all when the cursor
    /// is exhausted. On any failure (including timeout) the state is
    /// left untouched and remains fully usable.
    ///
    /// Taking `&mut self` serializes calls within a session: a second
    /// `load_more` cannot start while one is in flight.
    pub async fn load_more(&mut self) -> Result<LoadOutcome, SourceError> {
        let Some(cursor) = self.state.next_page.clone() else {
            return Ok(LoadOutcome::Exhausted);
        };

        let page = with_deadline(self.fetch_timeout, self.source.fetch_page(&cursor)).await?;

        // Only the first summary of the fetched page is revealed; one
        // post per request.
        let mut appended = 0;
        if let Some(first) = page.results.into_iter().next() {
            self.state.visible.push(first);
            appended = 1;
        }
        self.state.next_page = page.next_page;

        tracing::debug!(
            appended,
            visible = self.state.visible.len(),
            exhausted = self.state.is_exhausted(),
            "loaded next page"
        );
        Ok(LoadOutcome::Appended(appended))
    }
}
