//! spacetraveling-rs: blog front-end core over a headless CMS
//!
//! This crate provides the presentation core of a statically generated
//! blog: a paginated post list view, a rich-text post detail view with
//! reading-time estimation, and the narrow [`source::ContentSource`]
//! boundary through which both talk to the backend.

pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod routes;
pub mod source;
pub mod view;

use std::sync::Arc;

use anyhow::Result;

use source::{ContentSource, QueryOptions};
use view::{PostDetailView, PostListView};

/// The blog application handle.
///
/// Owns the site configuration and the injected content source, and
/// constructs per-session views. There is no ambient client: every view
/// receives the source it was built with and nothing else.
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    source: Arc<dyn ContentSource>,
}

impl Blog {
    /// Create a blog over a content source
    pub fn new(config: config::SiteConfig, source: Arc<dyn ContentSource>) -> Self {
        Self { config, source }
    }

    /// Start a list-view session, seeding it with the first page
    pub async fn post_list(&self) -> Result<PostListView> {
        let first_page = source::with_deadline(
            self.config.fetch_timeout(),
            self.source.query_by_type(
                &self.config.document_type,
                QueryOptions {
                    page_size: self.config.page_size,
                },
            ),
        )
        .await?;

        tracing::debug!(
            seeded = first_page.results.len(),
            exhausted = first_page.next_page.is_none(),
            "seeded post list"
        );
        Ok(PostListView::new(
            self.source.clone(),
            self.config.fetch_timeout(),
            first_page,
        ))
    }

    /// Start a detail-view session in the `Loading` state
    pub fn post_detail(&self) -> PostDetailView {
        PostDetailView::new(self.source.clone(), self.config.clone())
    }

    /// Enumerate post route paths for static pre-generation
    pub async fn post_paths(&self) -> Result<Vec<String>> {
        Ok(routes::post_paths(&self.config, self.source.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source::memory::fixtures::document;
    use source::StaticSource;
    use view::{DetailState, LoadOutcome};

    fn blog() -> Blog {
        let source = Arc::new(StaticSource::new(vec![
            document("a", "A"),
            document("b", "B"),
            document("c", "C"),
        ]));
        Blog::new(config::SiteConfig::default(), source)
    }

    #[tokio::test]
    async fn test_list_session_end_to_end() {
        let mut view = blog().post_list().await.unwrap();
        // Default page size is 1: seed reveals the newest post only
        assert_eq!(view.posts().len(), 1);
        assert_eq!(view.posts()[0].id, "a");

        assert_eq!(view.load_more().await.unwrap(), LoadOutcome::Appended(1));
        assert_eq!(view.load_more().await.unwrap(), LoadOutcome::Appended(1));
        assert_eq!(view.load_more().await.unwrap(), LoadOutcome::Exhausted);

        let ids: Vec<&str> = view.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_detail_session_end_to_end() {
        let blog = blog();
        let mut view = blog.post_detail();
        assert_eq!(view.state(), &DetailState::Loading);

        match view.resolve("b").await.unwrap() {
            DetailState::Ready(model) => assert_eq!(model.title, "B"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_post_paths() {
        let paths = blog().post_paths().await.unwrap();
        assert_eq!(paths, vec!["/post/a", "/post/b", "/post/c"]);
    }
}
