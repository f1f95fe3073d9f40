//! Post detail view - reading-time estimation and block rendering

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{richtext, ContentBlock, PostDetail};
use crate::error::SourceError;
use crate::helpers;
use crate::source::{with_deadline, ContentSource};

/// Words-per-minute constant behind the reading-time heuristic
pub const WORDS_PER_MINUTE: usize = 200;

/// Total whitespace-separated word count of a document's plain text,
/// in block order then span order
fn word_count(content: &[ContentBlock]) -> usize {
    content
        .iter()
        .flat_map(|block| &block.body)
        .map(|span| span.as_text().split_whitespace().count())
        .sum()
}

/// Estimate reading time in whole minutes, rounded up.
///
/// Pure function of the content: no words means 0 minutes, 200 words
/// one minute, 201 words two.
pub fn estimate_reading_minutes(content: &[ContentBlock]) -> u32 {
    minutes(word_count(content), WORDS_PER_MINUTE)
}

fn minutes(words: usize, per_minute: usize) -> u32 {
    words.div_ceil(per_minute.max(1)) as u32
}

/// One rendered content section, keyed by its heading
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub body_html: String,
}

/// Everything the detail page needs to draw one post
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub title: String,
    pub banner_url: String,
    pub author: String,
    /// Formatted publication date; empty when the post has none
    pub publication_date: String,
    pub reading_minutes: u32,
    pub sections: Vec<Section>,
}

/// Render a fetched document to its display model.
///
/// Each content block becomes exactly one section, in document order;
/// no block is skipped or merged.
pub fn render(post: &PostDetail, config: &SiteConfig) -> DisplayModel {
    let sections = post
        .content
        .iter()
        .map(|block| Section {
            heading: block.heading.clone(),
            body_html: richtext::as_html_fragment(&block.body),
        })
        .collect();

    DisplayModel {
        title: post.title.clone(),
        banner_url: post.banner_url.clone(),
        author: post.author.clone(),
        publication_date: helpers::format_optional(
            post.publication_date.as_ref(),
            &config.date_format,
        ),
        reading_minutes: minutes(word_count(&post.content), config.words_per_minute),
        sections,
    }
}

/// State of one detail-view session
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// The document is not yet resolved; nothing can be rendered
    Loading,
    /// The identifier did not resolve to a document
    NotFound,
    /// The document is resolved and rendered
    Ready(DisplayModel),
}

/// The post detail view: resolves one document by identifier against an
/// injected content source.
pub struct PostDetailView {
    source: Arc<dyn ContentSource>,
    config: SiteConfig,
    state: DetailState,
}

impl PostDetailView {
    /// Create a view in the [`DetailState::Loading`] state
    pub fn new(source: Arc<dyn ContentSource>, config: SiteConfig) -> Self {
        Self {
            source,
            config,
            state: DetailState::Loading,
        }
    }

    /// Current session state
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Fetch and render the document with the given identifier.
    ///
    /// Transitions to `Ready` or `NotFound`; on a failed fetch the view
    /// stays in its previous state and the error is returned.
    pub async fn resolve(&mut self, id: &str) -> Result<&DetailState, SourceError> {
        let fetched = with_deadline(
            self.config.fetch_timeout(),
            self.source.get_by_uid(&self.config.document_type, id),
        )
        .await?;

        self.state = match fetched {
            Some(post) => DetailState::Ready(render(&post, &self.config)),
            None => {
                tracing::debug!(id, "document not found");
                DetailState::NotFound
            }
        };
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::content::RichTextSpan;
    use crate::source::memory::fixtures::document;
    use crate::source::StaticSource;

    fn block(heading: &str, words: usize) -> ContentBlock {
        let text = vec!["word"; words].join(" ");
        ContentBlock {
            heading: heading.to_string(),
            body: vec![RichTextSpan::paragraph(text)],
        }
    }

    #[test]
    fn test_reading_time_boundaries() {
        assert_eq!(estimate_reading_minutes(&[]), 0);
        assert_eq!(estimate_reading_minutes(&[block("h", 1)]), 1);
        assert_eq!(estimate_reading_minutes(&[block("h", 200)]), 1);
        assert_eq!(estimate_reading_minutes(&[block("h", 201)]), 2);
    }

    #[test]
    fn test_reading_time_spans_blocks() {
        // Two blocks totaling 350 words read in two minutes
        let content = vec![block("one", 150), block("two", 200)];
        assert_eq!(estimate_reading_minutes(&content), 2);
    }

    #[test]
    fn test_reading_time_monotonic_in_word_count() {
        let mut last = 0;
        for words in [0, 1, 199, 200, 201, 399, 400, 1000] {
            let estimate = estimate_reading_minutes(&[block("h", words)]);
            assert!(estimate >= last);
            last = estimate;
        }
    }

    #[test]
    fn test_render_one_section_per_block_in_order() {
        let post = PostDetail {
            publication_date: Some(Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap()),
            title: "Launch day".to_string(),
            banner_url: "https://img.example/banner.png".to_string(),
            author: "Danilo Vieira".to_string(),
            content: vec![block("First", 10), block("Second", 10), block("Third", 10)],
        };

        let model = render(&post, &SiteConfig::default());
        assert_eq!(model.sections.len(), 3);
        let headings: Vec<&str> = model.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["First", "Second", "Third"]);
        assert_eq!(model.publication_date, "15 Mar 2021");
        assert!(model.sections[0].body_html.starts_with("<p>"));
    }

    #[test]
    fn test_render_without_publication_date() {
        let post = PostDetail {
            publication_date: None,
            title: "Draft".to_string(),
            banner_url: String::new(),
            author: "a".to_string(),
            content: Vec::new(),
        };

        let model = render(&post, &SiteConfig::default());
        assert_eq!(model.publication_date, "");
        assert_eq!(model.reading_minutes, 0);
        assert!(model.sections.is_empty());
    }

    #[tokio::test]
    async fn test_view_resolves_to_ready() {
        let source = Arc::new(StaticSource::new(vec![document("a", "A")]));
        let mut view = PostDetailView::new(source, SiteConfig::default());
        assert_eq!(view.state(), &DetailState::Loading);

        let state = view.resolve("a").await.unwrap();
        match state {
            DetailState::Ready(model) => {
                assert_eq!(model.title, "A");
                assert_eq!(model.sections.len(), 1);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_view_resolves_to_not_found() {
        let source = Arc::new(StaticSource::new(vec![document("a", "A")]));
        let mut view = PostDetailView::new(source, SiteConfig::default());

        let state = view.resolve("missing").await.unwrap();
        assert_eq!(state, &DetailState::NotFound);
    }
}
