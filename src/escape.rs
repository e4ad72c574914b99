//! Percent-escaping for field names and string literal text.

use std::borrow::Cow;

/// Escape a string for embedding in a predicate or sort token.
///
/// Unreserved characters (letters, digits, `-`, `.`, `_`, `~`) pass
/// through unchanged; every other byte of the UTF-8 encoding becomes
/// `%XX` with uppercase hex. The grammar delimiters `(`, `)`, `,`, `!`,
/// and `$` all fall outside the unreserved set, so escaped text can never
/// be read as structure.
pub fn escape(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}
