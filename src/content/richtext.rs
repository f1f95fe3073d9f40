//! Rich-text spans and their plain-text / HTML renderings
//!
//! The CMS delivers post bodies as a flat run of structured spans: a
//! block kind, the raw text, and inline format ranges over that text.
//! Rendering to HTML happens here so that every piece of CMS-supplied
//! text is escaped before it reaches a page; nothing downstream injects
//! unescaped markup.

use serde::{Deserialize, Serialize};

use crate::helpers::html_escape;

/// Block-level kind of a rich-text span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Paragraph,
    /// Heading level, clamped to 1..=6 when rendered
    Heading(u8),
    Preformatted,
    ListItem,
    OrderedListItem,
    Image {
        url: String,
        alt: String,
    },
}

/// Inline formatting applied to a character range of a span's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineStyle {
    Strong,
    Em,
    Hyperlink { url: String },
}

/// A formatting range over a span's text, in character offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineFormat {
    pub start: usize,
    pub end: usize,
    pub style: InlineStyle,
}

/// One structured-text fragment from the CMS.
///
/// Convertible to plain text (for word counting) and to an escaped
/// HTML fragment (for rendering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextSpan {
    pub kind: BlockKind,
    pub text: String,
    #[serde(default)]
    pub formats: Vec<InlineFormat>,
}

impl RichTextSpan {
    /// Create a plain paragraph span with no inline formatting
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            formats: Vec::new(),
        }
    }

    /// Plain-text rendering; empty for image spans
    pub fn as_text(&self) -> &str {
        &self.text
    }

    /// Escaped HTML fragment for this span
    pub fn as_html(&self) -> String {
        match &self.kind {
            BlockKind::Paragraph => format!("<p>{}</p>", self.formatted_text()),
            BlockKind::Heading(level) => {
                let level = (*level).clamp(1, 6);
                format!("<h{}>{}</h{}>", level, self.formatted_text(), level)
            }
            BlockKind::Preformatted => format!("<pre>{}</pre>", self.formatted_text()),
            BlockKind::ListItem | BlockKind::OrderedListItem => {
                format!("<li>{}</li>", self.formatted_text())
            }
            BlockKind::Image { url, alt } => {
                format!(
                    r#"<img src="{}" alt="{}">"#,
                    html_escape(url),
                    html_escape(alt)
                )
            }
        }
    }

    /// Escape the text and wrap inline format ranges in their tags.
    ///
    /// Ranges are applied in offset order. A range that overlaps the
    /// previous one or runs past the text is skipped rather than
    /// producing broken markup.
    fn formatted_text(&self) -> String {
        if self.formats.is_empty() {
            return html_escape(&self.text);
        }

        let chars: Vec<char> = self.text.chars().collect();
        let mut formats: Vec<&InlineFormat> = self.formats.iter().collect();
        formats.sort_by_key(|f| (f.start, f.end));

        let mut html = String::with_capacity(self.text.len());
        let mut pos = 0;

        for format in formats {
            if format.start < pos || format.end > chars.len() || format.start >= format.end {
                tracing::warn!(
                    start = format.start,
                    end = format.end,
                    "skipping out-of-bounds inline format range"
                );
                continue;
            }

            let plain: String = chars[pos..format.start].iter().collect();
            html.push_str(&html_escape(&plain));

            let inner: String = chars[format.start..format.end].iter().collect();
            let inner = html_escape(&inner);
            match &format.style {
                InlineStyle::Strong => {
                    html.push_str(&format!("<strong>{}</strong>", inner));
                }
                InlineStyle::Em => {
                    html.push_str(&format!("<em>{}</em>", inner));
                }
                InlineStyle::Hyperlink { url } => {
                    html.push_str(&format!(r#"<a href="{}">{}</a>"#, html_escape(url), inner));
                }
            }

            pos = format.end;
        }

        let rest: String = chars[pos..].iter().collect();
        html.push_str(&html_escape(&rest));
        html
    }
}

/// Render a run of spans to one HTML fragment, in span order
pub fn as_html_fragment(spans: &[RichTextSpan]) -> String {
    spans
        .iter()
        .map(|span| span.as_html())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_escapes_text() {
        let span = RichTextSpan::paragraph("a <b> & 'c'");
        assert_eq!(span.as_html(), "<p>a &lt;b&gt; &amp; &#39;c&#39;</p>");
    }

    #[test]
    fn test_heading_level_clamped() {
        let span = RichTextSpan {
            kind: BlockKind::Heading(9),
            text: "Deep".to_string(),
            formats: Vec::new(),
        };
        assert_eq!(span.as_html(), "<h6>Deep</h6>");
    }

    #[test]
    fn test_inline_formats_applied_in_order() {
        let span = RichTextSpan {
            kind: BlockKind::Paragraph,
            text: "hello brave world".to_string(),
            formats: vec![
                InlineFormat {
                    start: 12,
                    end: 17,
                    style: InlineStyle::Em,
                },
                InlineFormat {
                    start: 6,
                    end: 11,
                    style: InlineStyle::Strong,
                },
            ],
        };
        assert_eq!(
            span.as_html(),
            "<p>hello <strong>brave</strong> <em>world</em></p>"
        );
    }

    #[test]
    fn test_hyperlink_url_escaped() {
        let span = RichTextSpan {
            kind: BlockKind::Paragraph,
            text: "link".to_string(),
            formats: vec![InlineFormat {
                start: 0,
                end: 4,
                style: InlineStyle::Hyperlink {
                    url: "https://example.com/?a=1&b=2".to_string(),
                },
            }],
        };
        assert_eq!(
            span.as_html(),
            r#"<p><a href="https://example.com/?a=1&amp;b=2">link</a></p>"#
        );
    }

    #[test]
    fn test_out_of_bounds_range_skipped() {
        let span = RichTextSpan {
            kind: BlockKind::Paragraph,
            text: "short".to_string(),
            formats: vec![InlineFormat {
                start: 2,
                end: 40,
                style: InlineStyle::Strong,
            }],
        };
        assert_eq!(span.as_html(), "<p>short</p>");
    }

    #[test]
    fn test_image_renders_attributes() {
        let span = RichTextSpan {
            kind: BlockKind::Image {
                url: "https://img.example/banner.png".to_string(),
                alt: "Banner".to_string(),
            },
            text: String::new(),
            formats: Vec::new(),
        };
        assert_eq!(
            span.as_html(),
            r#"<img src="https://img.example/banner.png" alt="Banner">"#
        );
    }

    #[test]
    fn test_fragment_preserves_span_order() {
        let spans = vec![RichTextSpan::paragraph("one"), RichTextSpan::paragraph("two")];
        assert_eq!(as_html_fragment(&spans), "<p>one</p>\n<p>two</p>");
    }
}
