//! Whitespace handling for trimmed keys, values, queries and fragments.

/// Whether `c` is stripped by [`trim_whitespace`].
///
/// This is the web whitespace set: Unicode `White_Space` plus the byte-order
/// mark U+FEFF, minus the next-line control U+0085.
pub fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Strip leading and trailing whitespace as defined by [`is_trimmable`].
pub fn trim_whitespace(input: &str) -> &str {
    input.trim_matches(is_trimmable)
}
