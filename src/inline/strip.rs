//! `((text))` replacement: the content with every `c` and `C` removed.

/// Append `content` minus its `c`/`C` characters.
pub fn render_strip_c(content: &str, out: &mut String) {
    out.extend(content.chars().filter(|ch| !matches!(ch, 'c' | 'C')));
}
