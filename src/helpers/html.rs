//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an image tag with escaped attributes
///
/// # Examples
/// ```ignore
/// image_tag("/images/banner.png", "Banner publication")
/// // -> <img src="/images/banner.png" alt="Banner publication">
/// ```
pub fn image_tag(src: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}">"#,
        html_escape(src),
        html_escape(alt)
    )
}
