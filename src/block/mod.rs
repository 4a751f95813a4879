//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - Headings (`#` through `######`)
//! - Unordered lists (`- item`)
//! - Ordered lists (`* item`)
//! - Paragraphs
//!
//! Blank lines close whatever block is open.

mod classify;
mod event;
mod parser;

pub use classify::{classify_line, MAX_HEADING_LEVEL};
pub use event::{BlockEvent, LineKind, ListKind, OpenBlock};
pub use parser::{transition, BlockParser, Transition};
