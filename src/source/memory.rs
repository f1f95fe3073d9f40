//! In-memory content source backed by raw JSON documents
//!
//! Holds full documents in the CMS wire shape and serves both the
//! paginated summary queries and by-identifier lookups from them. Every
//! response still goes through [`content::schema`] validation, so this
//! source behaves exactly like a remote backend at the type boundary,
//! malformed fixtures included.
//!
//! [`content::schema`]: crate::content::schema

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ContentSource, QueryOptions};
use crate::content::{schema, PageCursor, PaginationResult, PostDetail};
use crate::error::SourceError;

/// A static, ordered set of documents served page by page.
///
/// Page cursors are `offset:size` tokens minted by this source; they
/// stay opaque to callers.
pub struct StaticSource {
    documents: Vec<Value>,
}

impl StaticSource {
    /// Create a source over documents in server order
    pub fn new(documents: Vec<Value>) -> Self {
        Self { documents }
    }

    fn page(&self, offset: usize, size: usize) -> Result<PaginationResult, SourceError> {
        let size = size.max(1);
        let results: Vec<&Value> = self.documents.iter().skip(offset).take(size).collect();

        let next_page = if offset + size < self.documents.len() {
            Value::String(format!("{}:{}", offset + size, size))
        } else {
            Value::Null
        };

        let response = json!({
            "results": results,
            "next_page": next_page,
        });
        schema::parse_pagination(&response)
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn query_by_type(
        &self,
        _doc_type: &str,
        options: QueryOptions,
    ) -> Result<PaginationResult, SourceError> {
        self.page(0, options.page_size)
    }

    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PaginationResult, SourceError> {
        let (offset, size) = cursor
            .as_str()
            .split_once(':')
            .and_then(|(o, s)| Some((o.parse().ok()?, s.parse().ok()?)))
            .ok_or_else(|| SourceError::Fetch(format!("unknown page token `{}`", cursor.as_str())))?;
        self.page(offset, size)
    }

    async fn get_by_uid(
        &self,
        _doc_type: &str,
        id: &str,
    ) -> Result<Option<PostDetail>, SourceError> {
        let found = self
            .documents
            .iter()
            .find(|doc| doc.get("uid").and_then(Value::as_str) == Some(id));

        match found {
            Some(doc) => Ok(Some(schema::parse_detail(doc)?)),
            None => Ok(None),
        }
    }

    async fn list_identifiers(&self, _doc_type: &str) -> Result<Vec<String>, SourceError> {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                doc.get("uid")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        SourceError::malformed(format!("results[{}].uid", i), "expected a string")
                    })
            })
            .collect()
    }
}
