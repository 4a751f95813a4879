//! Delimited span scanning (`<open>content<close>`).
//!
//! Matching is leftmost and non-greedy: the first opener wins and pairs with
//! the nearest closer after it. When an opener cannot be completed the scan
//! resumes one byte after it, so overlapping delimiter runs such as `___x__`
//! resolve the same way a backtracking search would.

use std::borrow::Cow;
use std::ops::Range;

use crate::cursor::Cursor;

/// Opening and closing delimiters of an inline rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static [u8],
    pub close: &'static [u8],
    /// Byte that may not appear inside the content, if any.
    pub forbid: Option<u8>,
}

impl Delimiters {
    /// Delimiters whose content may be anything.
    pub const fn new(open: &'static [u8], close: &'static [u8]) -> Self {
        Self {
            open,
            close,
            forbid: None,
        }
    }

    /// Delimiters whose content may not contain `byte`.
    pub const fn forbidding(open: &'static [u8], close: &'static [u8], byte: u8) -> Self {
        Self {
            open,
            close,
            forbid: Some(byte),
        }
    }
}

/// A matched span in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Offset of the opener.
    pub start: usize,
    /// Byte range of the content between the delimiters.
    pub content: Range<usize>,
    /// Offset just past the closer.
    pub end: usize,
}

/// Find the first span starting at or after `from`.
pub fn find_span(text: &str, from: usize, delims: &Delimiters) -> Option<Span> {
    let mut pos = from;

    loop {
        let open_at = pos + Cursor::new_at(text, pos).find_bytes(delims.open)?;
        let content_start = open_at + delims.open.len();
        let body = Cursor::new_at(text, content_start);

        let close_at = match delims.forbid {
            // Nearest closer; if there is none, no later opener can close either.
            None => Some(content_start + body.find_bytes(delims.close)?),
            // The content stops at the first forbidden byte, so the closer must sit there.
            Some(byte) => body
                .find(byte)
                .map(|rel| content_start + rel)
                .filter(|&at| Cursor::new_at(text, at).at_bytes(delims.close)),
        };

        match close_at {
            Some(close_at) => {
                return Some(Span {
                    start: open_at,
                    content: content_start..close_at,
                    end: close_at + delims.close.len(),
                });
            }
            None => pos = open_at + 1,
        }
    }
}

/// Replace every span in `text`, left to right, without overlap.
///
/// `render` receives each span's content and appends its replacement.
/// Returns the input unchanged (borrowed) when nothing matched.
pub fn substitute<'t, F>(text: &'t str, delims: &Delimiters, mut render: F) -> Cow<'t, str>
where
    F: FnMut(&str, &mut String),
{
    let mut out: Option<String> = None;
    let mut last = 0;

    while let Some(span) = find_span(text, last, delims) {
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[last..span.start]);
        render(&text[span.content], buf);
        last = span.end;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}
