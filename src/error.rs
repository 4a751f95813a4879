//! Error types for conversion and file handling.

use std::fmt;
use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while converting Markdown.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    /// A line could not be classified safely.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: Malformed },

    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A `#` run with no space after it (`#`, `##Title`).
    MissingHeadingSpace,
    /// More than six leading `#` characters.
    HeadingTooDeep(usize),
    /// A list marker not followed by a space (`-`, `*x`).
    MissingListSpace(char),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeadingSpace => f.write_str("heading marker must be followed by a space"),
            Self::HeadingTooDeep(level) => {
                write!(f, "heading level {level} is deeper than 6")
            }
            Self::MissingListSpace(marker) => {
                write!(f, "list marker '{marker}' must be followed by a space")
            }
        }
    }
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: Malformed) -> Self {
        Self::MalformedInput { line, reason }
    }
}
