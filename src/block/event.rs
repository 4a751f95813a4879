//! Block-level event types.

/// List flavour, chosen by the item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`, rendered as `<ul>`.
    Unordered,
    /// `* item`, rendered as `<ol>` without numbering attributes.
    Ordered,
}

impl ListKind {
    /// Map a marker byte to its list kind.
    #[inline]
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'-' => Some(Self::Unordered),
            b'*' => Some(Self::Ordered),
            _ => None,
        }
    }

    /// HTML tag name for the list wrapper.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// What a single line is, decided without looking at its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// `#`-prefixed heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        content: &'a str,
    },
    /// `-` or `*` prefixed list item, marker and one space stripped.
    ListItem { kind: ListKind, content: &'a str },
    /// Anything else.
    Text(&'a str),
}

/// The block that is currently open while folding over lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenBlock {
    /// Nothing open.
    #[default]
    None,
    /// Inside `<ul>`.
    UnorderedList,
    /// Inside `<ol>`.
    OrderedList,
    /// Inside `<p>`.
    Paragraph,
}

impl OpenBlock {
    /// The open block for a list of the given kind.
    #[inline]
    pub fn list(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => Self::UnorderedList,
            ListKind::Ordered => Self::OrderedList,
        }
    }

    /// Event that closes this block, if any is open.
    #[inline]
    pub fn close_event<'a>(self) -> Option<BlockEvent<'a>> {
        match self {
            Self::None => None,
            Self::UnorderedList => Some(BlockEvent::ListEnd(ListKind::Unordered)),
            Self::OrderedList => Some(BlockEvent::ListEnd(ListKind::Ordered)),
            Self::Paragraph => Some(BlockEvent::ParagraphEnd),
        }
    }
}

/// Events emitted by the block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent<'a> {
    /// A complete heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        content: &'a str,
    },

    /// Start of a list.
    ListStart(ListKind),
    /// A single list item's content.
    ListItem(&'a str),
    /// End of a list.
    ListEnd(ListKind),

    /// Start of a paragraph.
    ParagraphStart,
    /// One raw paragraph line; inline rules run at render time.
    ParagraphLine(&'a str),
    /// End of a paragraph.
    ParagraphEnd,
}
