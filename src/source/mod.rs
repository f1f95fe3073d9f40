//! Content source boundary - the narrow interface to the headless CMS
//!
//! Views never talk to the backend directly; they hold a
//! [`ContentSource`] handed to them at construction. Keeping the
//! collaborator injected (instead of a process-wide client) lets every
//! view own its session state exclusively and makes the fetch path
//! trivially fakeable in tests.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::content::{PageCursor, PaginationResult, PostDetail};
use crate::error::SourceError;

pub mod memory;

pub use memory::StaticSource;

/// Options for a paginated query
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    /// Summaries per page; the backend may return fewer
    pub page_size: usize,
}

/// External service providing structured documents via paginated
/// queries and by-identifier lookup.
///
/// A missing document is an outcome, not an error: `get_by_uid`
/// returns `Ok(None)` so callers can render a "not found" state.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Query the first page of documents of one type
    async fn query_by_type(
        &self,
        doc_type: &str,
        options: QueryOptions,
    ) -> Result<PaginationResult, SourceError>;

    /// Resolve one page from a cursor obtained from a previous result
    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PaginationResult, SourceError>;

    /// Resolve a single document by its identifier
    async fn get_by_uid(
        &self,
        doc_type: &str,
        id: &str,
    ) -> Result<Option<PostDetail>, SourceError>;

    /// Enumerate known identifiers, in server order (used for static
    /// path pre-generation)
    async fn list_identifiers(&self, doc_type: &str) -> Result<Vec<String>, SourceError>;
}

/// Run one fetch under a deadline.
///
/// The source interface itself has no cancellation story, so every
/// round trip issued by a view goes through here; a fetch that does not
/// resolve in time becomes [`SourceError::Timeout`]. Dropping the
/// returned future cancels the request.
pub async fn with_deadline<T, F>(deadline: Duration, fetch: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    match tokio::time::timeout(deadline, fetch).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deadline_passes_through_success() {
        let result = with_deadline(Duration::from_secs(1), async { Ok::<_, SourceError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_deadline_expires_on_stalled_fetch() {
        let result = with_deadline(
            Duration::from_millis(10),
            std::future::pending::<Result<(), SourceError>>(),
        )
        .await;
        assert!(matches!(result, Err(SourceError::Timeout(_))));
    }
}
