//! Inline rules applied to paragraph text.
//!
//! Each rule is a pair of delimiters plus a renderer for the content between
//! them. Rules run one after another over the whole line in the order given
//! by [`InlineRule::ORDER`]; a later rule sees the output of earlier ones.

mod delimited;
mod digest;
mod emphasis;
mod strip;

use std::borrow::Cow;

pub use delimited::{find_span, substitute, Delimiters, Span};
pub use digest::render_digest;
pub use emphasis::{render_bold, render_emphasis};
pub use strip::render_strip_c;

/// A named inline substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    /// `**text**` → `<b>text</b>`
    Bold,
    /// `__text__` → `<em>text</em>`, content without `_`
    Emphasis,
    /// `[[text]]` → lowercase hex MD5 of `text`
    Digest,
    /// `((text))` → `text` without `c`/`C`
    StripC,
}

impl InlineRule {
    /// Application order.
    pub const ORDER: [InlineRule; 4] = [Self::Bold, Self::Emphasis, Self::Digest, Self::StripC];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Emphasis => "emphasis",
            Self::Digest => "digest",
            Self::StripC => "strip-c",
        }
    }

    pub fn delimiters(self) -> Delimiters {
        match self {
            Self::Bold => Delimiters::new(b"**", b"**"),
            Self::Emphasis => Delimiters::forbidding(b"__", b"__", b'_'),
            Self::Digest => Delimiters::new(b"[[", b"]]"),
            Self::StripC => Delimiters::new(b"((", b"))"),
        }
    }

    fn render(self, content: &str, out: &mut String) {
        match self {
            Self::Bold => render_bold(content, out),
            Self::Emphasis => render_emphasis(content, out),
            Self::Digest => render_digest(content, out),
            Self::StripC => render_strip_c(content, out),
        }
    }

    /// Apply this rule alone to `text`.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        substitute(text, &self.delimiters(), |content, out| {
            self.render(content, out)
        })
    }
}

/// Run every inline rule over one paragraph line.
///
/// # Example
/// ```
/// use markdown2html::inline::apply_inline_rules;
///
/// assert_eq!(apply_inline_rules("**a** ((cab))"), "<b>a</b> ab");
/// ```
pub fn apply_inline_rules(line: &str) -> String {
    let mut text = Cow::Borrowed(line);

    for rule in InlineRule::ORDER {
        let rewritten = match rule.apply(&text) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = rewritten {
            log::trace!("{} rule rewrote {:?} -> {:?}", rule.name(), text, s);
            text = Cow::Owned(s);
        }
    }

    text.into_owned()
}
