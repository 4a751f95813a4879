//! markdown2html: a minimal, line-oriented Markdown to HTML converter
//!
//! Each input line is classified on its own (heading, list item, blank or
//! paragraph text) and folded through a tiny open-block state machine that
//! groups consecutive list items and paragraph lines. Paragraph text then
//! goes through a fixed sequence of inline rules.
//!
//! # Supported syntax
//! - `# Heading` through `###### Heading`
//! - `- item` (`<ul>`) and `* item` (`<ol>`)
//! - `**bold**`, `__emphasis__`
//! - `[[text]]` → MD5 hex digest of `text`
//! - `((text))` → `text` with every `c`/`C` removed
//!
//! Nothing is escaped and nothing nests. The output is an HTML fragment.

pub mod block;
pub mod cursor;
pub mod error;
pub mod inline;
pub mod io;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, LineKind, ListKind, OpenBlock};
pub use error::{Error, Malformed, Result};
pub use inline::{apply_inline_rules, InlineRule};
pub use io::convert_file;
pub use render::HtmlWriter;

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld").unwrap();
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>\n");
/// ```
pub fn to_html(input: &str) -> Result<String> {
    render_lines(input.lines(), input.len())
}

/// Convert an already split sequence of lines to HTML.
pub fn to_html_lines<'a, I>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    render_lines(lines, 0)
}

fn render_lines<'a, I>(lines: I, size_hint: usize) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut events = Vec::with_capacity((size_hint / 16).max(16));
    BlockParser::new(lines).parse(&mut events)?;
    log::debug!("parsed {} block events", events.len());

    let mut writer = HtmlWriter::with_capacity_for(size_hint);
    for event in &events {
        writer.write_event(event);
    }
    Ok(writer.into_string())
}
