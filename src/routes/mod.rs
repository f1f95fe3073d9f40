//! Route enumeration for static path pre-generation

use crate::config::SiteConfig;
use crate::error::SourceError;
use crate::source::ContentSource;

/// Enumerate the route path of every known post, in server order.
///
/// Used ahead of a static build to decide which detail pages exist;
/// identifiers not listed here render through the `Loading` fallback
/// until resolved.
pub async fn post_paths(
    config: &SiteConfig,
    source: &dyn ContentSource,
) -> Result<Vec<String>, SourceError> {
    let ids = source.list_identifiers(&config.document_type).await?;
    Ok(ids
        .into_iter()
        .map(|id| format!("{}post/{}", config.root, id))
        .collect())
}
