//! HTML output writer.
//!
//! Output is a sequence of fragments, one per line. Every fragment is
//! terminated by `\n`, so the document is always newline-terminated.

use crate::block::{BlockEvent, ListKind};
use crate::inline::apply_inline_rules;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.heading(2, "Title");
/// writer.ul_start();
/// writer.li("item");
/// writer.ul_end();
///
/// assert_eq!(writer.into_string(), "<h2>Title</h2>\n<ul>\n<li>item</li>\n</ul>\n");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write one complete fragment line.
    #[inline]
    pub fn fragment(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// Write a heading: `<hN>content</hN>`
    #[inline]
    pub fn heading(&mut self, level: u8, content: &str) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
        self.out.push_str(content);
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.fragment(">");
    }

    #[inline]
    pub fn ul_start(&mut self) {
        self.fragment("<ul>");
    }

    #[inline]
    pub fn ul_end(&mut self) {
        self.fragment("</ul>");
    }

    /// Write ordered list start. No `start`/`value` attributes are emitted.
    #[inline]
    pub fn ol_start(&mut self) {
        self.fragment("<ol>");
    }

    #[inline]
    pub fn ol_end(&mut self) {
        self.fragment("</ol>");
    }

    /// Write a list item: `<li>content</li>`
    #[inline]
    pub fn li(&mut self, content: &str) {
        self.out.push_str("<li>");
        self.out.push_str(content);
        self.fragment("</li>");
    }

    #[inline]
    pub fn paragraph_start(&mut self) {
        self.fragment("<p>");
    }

    #[inline]
    pub fn paragraph_end(&mut self) {
        self.fragment("</p>");
    }

    /// Write one block event.
    pub fn write_event(&mut self, event: &BlockEvent<'_>) {
        match *event {
            BlockEvent::Heading { level, content } => self.heading(level, content),
            BlockEvent::ListStart(ListKind::Unordered) => self.ul_start(),
            BlockEvent::ListStart(ListKind::Ordered) => self.ol_start(),
            BlockEvent::ListItem(content) => self.li(content),
            BlockEvent::ListEnd(ListKind::Unordered) => self.ul_end(),
            BlockEvent::ListEnd(ListKind::Ordered) => self.ol_end(),
            BlockEvent::ParagraphStart => self.paragraph_start(),
            BlockEvent::ParagraphLine(line) => self.fragment(&apply_inline_rules(line)),
            BlockEvent::ParagraphEnd => self.paragraph_end(),
        }
    }

    /// Consume the writer. A document with no fragments is a lone `\n`.
    pub fn into_string(mut self) -> String {
        if self.out.is_empty() {
            self.out.push('\n');
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> HtmlWriter {
        HtmlWriter::with_capacity_for(64)
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1250);
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=6 {
            let mut writer = writer();
            writer.heading(level, "x");
            let expected = format!("<h{level}>x</h{level}>\n");
            assert_eq!(writer.into_string(), expected);
        }
    }

    #[test]
    fn test_writer_ordered_list_has_no_numbering() {
        let mut writer = writer();
        writer.ol_start();
        writer.li("one");
        writer.ol_end();
        assert_eq!(writer.into_string(), "<ol>\n<li>one</li>\n</ol>\n");
    }

    #[test]
    fn test_writer_paragraph_event_applies_inline_rules() {
        let mut writer = writer();
        writer.write_event(&BlockEvent::ParagraphStart);
        writer.write_event(&BlockEvent::ParagraphLine("**hi**"));
        writer.write_event(&BlockEvent::ParagraphEnd);
        assert_eq!(writer.into_string(), "<p>\n<b>hi</b>\n</p>\n");
    }

    #[test]
    fn test_writer_list_content_is_verbatim() {
        let mut writer = writer();
        writer.write_event(&BlockEvent::ListItem("**raw**"));
        assert_eq!(writer.into_string(), "<li>**raw**</li>\n");
    }

    #[test]
    fn test_writer_empty_document() {
        assert_eq!(writer().into_string(), "\n");
    }
}
