//! Per-line classification.

use crate::cursor::Cursor;
use crate::error::{Error, Malformed, Result};

use super::event::{LineKind, ListKind};

/// Deepest heading HTML can express.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Classify one line in isolation.
///
/// `line_no` is 1-based and only used to report malformed input. Trailing
/// whitespace (including a stray `\r`) is stripped before classification.
///
/// # Example
/// ```
/// use markdown2html::block::{classify_line, LineKind, ListKind};
///
/// assert_eq!(
///     classify_line("- milk", 1).unwrap(),
///     LineKind::ListItem { kind: ListKind::Unordered, content: "milk" }
/// );
/// ```
pub fn classify_line(line: &str, line_no: usize) -> Result<LineKind<'_>> {
    let line = line.trim_end();
    let mut cursor = Cursor::new(line);

    match cursor.peek() {
        None => Ok(LineKind::Blank),
        Some(b'#') => classify_heading(cursor, line_no),
        Some(marker) => match ListKind::from_marker(marker) {
            Some(kind) => {
                cursor.advance(1);
                if !cursor.eat(b' ') {
                    return Err(Error::malformed(
                        line_no,
                        Malformed::MissingListSpace(marker as char),
                    ));
                }
                Ok(LineKind::ListItem {
                    kind,
                    content: cursor.rest(),
                })
            }
            None => Ok(LineKind::Text(line)),
        },
    }
}

/// Heading level is the leading `#` run; content starts after the first space.
fn classify_heading(mut cursor: Cursor<'_>, line_no: usize) -> Result<LineKind<'_>> {
    let level = cursor.skip_while(|b| b == b'#');
    if level > MAX_HEADING_LEVEL {
        return Err(Error::malformed(line_no, Malformed::HeadingTooDeep(level)));
    }

    let Some(space) = cursor.find(b' ') else {
        return Err(Error::malformed(line_no, Malformed::MissingHeadingSpace));
    };
    cursor.advance(space + 1);

    Ok(LineKind::Heading {
        level: level as u8,
        content: cursor.rest(),
    })
}
