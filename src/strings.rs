//! Owned-string construction helpers.
//!
//! The ownership rules that once needed a whole allocation API collapse into
//! the type system here: every function returns a `String` whose release is
//! `Drop`, and formatted construction is plain [`format!`] — there is no
//! two-pass length-probing formatter to reimplement and no destroy function
//! to call. What remains are the two helpers with behavior `std` does not
//! provide directly: byte-bounded copying that respects UTF-8 boundaries,
//! and exact-capacity concatenation.

/// Copies up to `max_chars` bytes of `source` into a new owned string, or
/// the whole source when `max_chars` is 0.
///
/// The cut never splits a UTF-8 sequence; when `max_chars` lands inside a
/// multi-byte character the copy stops at the previous boundary.
///
/// # Examples
///
/// ```
/// # use fskit::strings::copy_truncated;
/// assert_eq!(copy_truncated("hello world", 5), "hello");
/// assert_eq!(copy_truncated("hello", 0), "hello");
/// assert_eq!(copy_truncated("héllo", 2), "h"); // 'é' is two bytes
/// ```
#[must_use]
pub fn copy_truncated(source: &str, max_chars: usize) -> String {
    if max_chars == 0 || max_chars >= source.len() {
        return source.to_string();
    }

    let mut end = max_chars;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    source[..end].to_string()
}

/// Concatenates two strings into a single allocation of exactly
/// `a.len() + b.len()` bytes.
#[must_use]
pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}
