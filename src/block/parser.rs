//! Block parser implementation.
//!
//! Lines are folded through [`transition`], which takes the currently open
//! block and one classified line and returns the next open block together
//! with the events that line produced. The fold accumulator is the only
//! state; nothing outlives a call to [`BlockParser::parse`].

use smallvec::SmallVec;

use crate::error::Result;

use super::classify::classify_line;
use super::event::{BlockEvent, LineKind, OpenBlock};

/// Events produced by a single line: at most a close, an open and the line itself.
pub type Transition<'a> = SmallVec<[BlockEvent<'a>; 3]>;

/// Advance the open-block state by one line.
///
/// # Example
/// ```
/// use markdown2html::block::{transition, BlockEvent, LineKind, ListKind, OpenBlock};
///
/// let (open, events) = transition(OpenBlock::Paragraph, LineKind::ListItem {
///     kind: ListKind::Unordered,
///     content: "a",
/// });
/// assert_eq!(open, OpenBlock::UnorderedList);
/// assert_eq!(
///     events.as_slice(),
///     &[
///         BlockEvent::ParagraphEnd,
///         BlockEvent::ListStart(ListKind::Unordered),
///         BlockEvent::ListItem("a"),
///     ]
/// );
/// ```
pub fn transition<'a>(open: OpenBlock, line: LineKind<'a>) -> (OpenBlock, Transition<'a>) {
    let mut events = Transition::new();

    let next = match line {
        LineKind::Blank => {
            events.extend(open.close_event());
            OpenBlock::None
        }
        LineKind::Heading { level, content } => {
            events.extend(open.close_event());
            events.push(BlockEvent::Heading { level, content });
            OpenBlock::None
        }
        LineKind::ListItem { kind, content } => {
            let target = OpenBlock::list(kind);
            if open != target {
                events.extend(open.close_event());
                events.push(BlockEvent::ListStart(kind));
            }
            events.push(BlockEvent::ListItem(content));
            target
        }
        LineKind::Text(content) => {
            if open != OpenBlock::Paragraph {
                events.extend(open.close_event());
                events.push(BlockEvent::ParagraphStart);
            }
            events.push(BlockEvent::ParagraphLine(content));
            OpenBlock::Paragraph
        }
    };

    (next, events)
}

/// Block parser over an ordered sequence of lines.
pub struct BlockParser<I> {
    lines: I,
}

impl<'a, I> BlockParser<I>
where
    I: Iterator<Item = &'a str>,
{
    /// Create a new block parser.
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
        }
    }

    /// Parse all lines and collect events.
    ///
    /// Any block still open at the end of input is closed. On malformed
    /// input `events` holds whatever was produced before the bad line.
    pub fn parse(self, events: &mut Vec<BlockEvent<'a>>) -> Result<()> {
        let open = self
            .lines
            .enumerate()
            .try_fold(OpenBlock::None, |open, (idx, line)| {
                let kind = classify_line(line, idx + 1)?;
                let (next, emitted) = transition(open, kind);
                if next != open {
                    log::trace!("line {}: {open:?} -> {next:?}", idx + 1);
                }
                events.extend(emitted);
                Ok::<_, crate::Error>(next)
            })?;

        events.extend(open.close_event());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ListKind;
    use crate::error::{Error, Malformed};

    fn parse(input: &str) -> Vec<BlockEvent<'_>> {
        let mut events = Vec::new();
        BlockParser::new(input.lines()).parse(&mut events).unwrap();
        events
    }

    #[test]
    fn test_heading() {
        let events = parse("# Hello");
        assert_eq!(
            events,
            vec![BlockEvent::Heading { level: 1, content: "Hello" }]
        );
    }

    #[test]
    fn test_list_is_closed_at_end_of_input() {
        let events = parse("- a\n- b");
        assert_eq!(
            events,
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListItem("b"),
                BlockEvent::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn test_list_kind_switch() {
        let events = parse("- a\n* b");
        assert_eq!(
            events,
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::ListStart(ListKind::Ordered),
                BlockEvent::ListItem("b"),
                BlockEvent::ListEnd(ListKind::Ordered),
            ]
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let events = parse("- a\n\n- b");
        assert_eq!(
            events,
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("b"),
                BlockEvent::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn test_paragraph_lines_are_grouped() {
        let events = parse("one\ntwo\n\nthree");
        assert_eq!(
            events,
            vec![
                BlockEvent::ParagraphStart,
                BlockEvent::ParagraphLine("one"),
                BlockEvent::ParagraphLine("two"),
                BlockEvent::ParagraphEnd,
                BlockEvent::ParagraphStart,
                BlockEvent::ParagraphLine("three"),
                BlockEvent::ParagraphEnd,
            ]
        );
    }

    #[test]
    fn test_heading_closes_open_blocks() {
        let events = parse("text\n# Head\n- item\n## Next");
        assert_eq!(
            events,
            vec![
                BlockEvent::ParagraphStart,
                BlockEvent::ParagraphLine("text"),
                BlockEvent::ParagraphEnd,
                BlockEvent::Heading { level: 1, content: "Head" },
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("item"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::Heading { level: 2, content: "Next" },
            ]
        );
    }

    #[test]
    fn test_transition_from_none_on_blank_emits_nothing() {
        let (open, events) = transition(OpenBlock::None, LineKind::Blank);
        assert_eq!(open, OpenBlock::None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_transition_stays_in_list() {
        let line = LineKind::ListItem {
            kind: ListKind::Ordered,
            content: "x",
        };
        let (open, events) = transition(OpenBlock::OrderedList, line);
        assert_eq!(open, OpenBlock::OrderedList);
        assert_eq!(events.as_slice(), &[BlockEvent::ListItem("x")]);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let mut events = Vec::new();
        let err = BlockParser::new("# ok\ntext\n#bad".lines())
            .parse(&mut events)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput {
                line: 3,
                reason: Malformed::MissingHeadingSpace
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }
}
