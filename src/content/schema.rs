//! Validation of raw CMS responses at the content-source boundary
//!
//! The backend replies with loosely-shaped JSON. Rather than trusting
//! that shape, every response is parsed through here and any missing or
//! mistyped field becomes a [`SourceError::MalformedContent`] naming
//! the offending path. Rendering never sees a partially-valid document.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::post::{ContentBlock, PageCursor, PaginationResult, PostDetail, PostSummary};
use super::richtext::{BlockKind, InlineFormat, InlineStyle, RichTextSpan};
use crate::error::SourceError;

/// Parse one page of a paginated query response
pub fn parse_pagination(value: &Value) -> Result<PaginationResult, SourceError> {
    let results = value
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::malformed("results", "expected an array"))?;

    let results = results
        .iter()
        .enumerate()
        .map(|(i, doc)| parse_summary(doc, &format!("results[{}]", i)))
        .collect::<Result<Vec<_>, _>>()?;

    let next_page = match value.get("next_page") {
        None | Some(Value::Null) => None,
        Some(Value::String(token)) => Some(PageCursor::new(token.clone())),
        Some(_) => {
            return Err(SourceError::malformed(
                "next_page",
                "expected a string or null",
            ))
        }
    };

    Ok(PaginationResult { results, next_page })
}

/// Parse a single document response into a [`PostDetail`]
pub fn parse_detail(value: &Value) -> Result<PostDetail, SourceError> {
    let data = object_field(value, "", "data")?;

    let banner = object_field(data, "data", "banner")?;
    let banner_url = string_field(banner, "data.banner", "url")?;

    let blocks = data
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::malformed("data.content", "expected an array"))?;

    let content = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| parse_block(block, &format!("data.content[{}]", i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostDetail {
        publication_date: date_field(value, "", "first_publication_date")?,
        title: string_field(data, "data", "title")?,
        banner_url,
        author: string_field(data, "data", "author")?,
        content,
    })
}

fn parse_summary(value: &Value, path: &str) -> Result<PostSummary, SourceError> {
    let data = object_field(value, path, "data")?;
    let data_path = format!("{}.data", path);

    Ok(PostSummary {
        id: string_field(value, path, "uid")?,
        publication_date: date_field(value, path, "first_publication_date")?,
        title: string_field(data, &data_path, "title")?,
        subtitle: string_field(data, &data_path, "subtitle")?,
        author: string_field(data, &data_path, "author")?,
    })
}

fn parse_block(value: &Value, path: &str) -> Result<ContentBlock, SourceError> {
    let spans = value
        .get("body")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::malformed(format!("{}.body", path), "expected an array"))?;

    let body = spans
        .iter()
        .enumerate()
        .map(|(i, span)| parse_span(span, &format!("{}.body[{}]", path, i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ContentBlock {
        heading: string_field(value, path, "heading")?,
        body,
    })
}

fn parse_span(value: &Value, path: &str) -> Result<RichTextSpan, SourceError> {
    let kind_name = string_field(value, path, "type")?;

    let kind = match kind_name.as_str() {
        "paragraph" => BlockKind::Paragraph,
        "preformatted" => BlockKind::Preformatted,
        "list-item" => BlockKind::ListItem,
        "o-list-item" => BlockKind::OrderedListItem,
        "image" => BlockKind::Image {
            url: string_field(value, path, "url")?,
            alt: value
                .get("alt")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        other => match other.strip_prefix("heading").and_then(|n| n.parse().ok()) {
            Some(level @ 1..=6) => BlockKind::Heading(level),
            _ => {
                return Err(SourceError::malformed(
                    format!("{}.type", path),
                    format!("unknown span type `{}`", other),
                ))
            }
        },
    };

    // Image spans carry no text
    let text = match kind {
        BlockKind::Image { .. } => String::new(),
        _ => string_field(value, path, "text")?,
    };

    let formats = match value.get("spans") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(ranges)) => ranges
            .iter()
            .enumerate()
            .map(|(i, range)| parse_format(range, &format!("{}.spans[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(SourceError::malformed(
                format!("{}.spans", path),
                "expected an array",
            ))
        }
    };

    Ok(RichTextSpan {
        kind,
        text,
        formats,
    })
}

fn parse_format(value: &Value, path: &str) -> Result<InlineFormat, SourceError> {
    let style = match string_field(value, path, "type")?.as_str() {
        "strong" => InlineStyle::Strong,
        "em" => InlineStyle::Em,
        "hyperlink" => {
            let data = object_field(value, path, "data")?;
            InlineStyle::Hyperlink {
                url: string_field(data, &format!("{}.data", path), "url")?,
            }
        }
        other => {
            return Err(SourceError::malformed(
                format!("{}.type", path),
                format!("unknown inline style `{}`", other),
            ))
        }
    };

    Ok(InlineFormat {
        start: uint_field(value, path, "start")?,
        end: uint_field(value, path, "end")?,
        style,
    })
}

fn object_field<'a>(value: &'a Value, path: &str, key: &str) -> Result<&'a Value, SourceError> {
    match value.get(key) {
        Some(field) if field.is_object() => Ok(field),
        _ => Err(SourceError::malformed(
            join(path, key),
            "expected an object",
        )),
    }
}

fn string_field(value: &Value, path: &str, key: &str) -> Result<String, SourceError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SourceError::malformed(join(path, key), "expected a string"))
}

fn uint_field(value: &Value, path: &str, key: &str) -> Result<usize, SourceError> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .ok_or_else(|| SourceError::malformed(join(path, key), "expected a non-negative integer"))
}

/// Nullable timestamp field; accepts RFC 3339 and the compact-offset
/// variant the CMS emits (`2021-03-15T19:25:28+0000`)
fn date_field(
    value: &Value,
    path: &str,
    key: &str,
) -> Result<Option<DateTime<Utc>>, SourceError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(|e| {
                SourceError::malformed(join(path, key), format!("invalid timestamp: {}", e))
            }),
        Some(_) => Err(SourceError::malformed(
            join(path, key),
            "expected a string or null",
        )),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
