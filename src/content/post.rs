//! Post models fetched from the content source

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::richtext::RichTextSpan;

/// A post summary as shown on the list page.
///
/// Immutable once fetched; the list view only ever appends summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Opaque slug assigned by the CMS, used for by-identifier lookup
    pub id: String,

    /// First publication date; unpublished previews carry none
    pub publication_date: Option<DateTime<Utc>>,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Author display name
    pub author: String,
}

/// A full post document as shown on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    /// First publication date; unpublished previews carry none
    pub publication_date: Option<DateTime<Utc>>,

    /// Post title
    pub title: String,

    /// URL of the banner image
    pub banner_url: String,

    /// Author display name
    pub author: String,

    /// Content blocks, in document order
    pub content: Vec<ContentBlock>,
}

/// One section of a post: a heading plus a run of rich-text spans.
///
/// The heading doubles as the display key for the rendered section and
/// is assumed unique within one document. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<RichTextSpan>,
}

/// An opaque continuation token for cursor pagination.
///
/// Tokens come from the content source and are never interpreted
/// client-side; they are only handed back to [`fetch_page`].
///
/// [`fetch_page`]: crate::source::ContentSource::fetch_page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of summaries plus the cursor to the next page.
///
/// `next_page` is `None` exactly when the result set is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationResult {
    pub results: Vec<PostSummary>,
    pub next_page: Option<PageCursor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_roundtrip() {
        let cursor = PageCursor::new("tok1");
        assert_eq!(cursor.as_str(), "tok1");
        assert_eq!(cursor, PageCursor::new(String::from("tok1")));
    }
}
