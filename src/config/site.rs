//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Content source
    /// CMS document type holding blog posts
    pub document_type: String,
    /// Summaries requested per page when seeding the list view
    pub page_size: usize,
    /// Deadline for one fetch round trip, in seconds
    pub fetch_timeout_secs: u64,

    // Reading time
    pub words_per_minute: usize,

    // Date / Time format (Moment.js style)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "spacetraveling".to_string(),
            subtitle: String::new(),
            author: String::new(),
            language: "pt-BR".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            document_type: "posts".to_string(),
            page_size: 1,
            fetch_timeout_secs: 10,

            words_per_minute: 200,

            date_format: "DD MMM YYYY".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Fetch deadline as a [`Duration`]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.document_type, "posts");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title: my blog\npage_size: 20\ndate_format: YYYY-MM-DD\ncustom_key: 42"
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "my blog");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.date_format, "YYYY-MM-DD");
        // Unknown fields are preserved, not rejected
        assert!(config.extra.contains_key("custom_key"));
        // Unspecified fields fall back to defaults
        assert_eq!(config.document_type, "posts");
    }
}
