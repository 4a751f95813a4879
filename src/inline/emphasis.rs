//! Bold (`**text**`) and emphasis (`__text__`) rendering.
//!
//! Content is copied through untouched; nothing inside is escaped.

/// Wrap content in `<b>`.
pub fn render_bold(content: &str, out: &mut String) {
    out.push_str("<b>");
    out.push_str(content);
    out.push_str("</b>");
}

/// Wrap content in `<em>`.
pub fn render_emphasis(content: &str, out: &mut String) {
    out.push_str("<em>");
    out.push_str(content);
    out.push_str("</em>");
}
