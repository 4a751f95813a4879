//! `[[text]]` replacement: the MD5 digest of the content.

/// Append the lowercase hex MD5 digest of `content`'s UTF-8 bytes.
pub fn render_digest(content: &str, out: &mut String) {
    let digest = md5::compute(content.as_bytes());
    out.push_str(&format!("{digest:x}"));
}
