//! Lexical path manipulation: join, dirname, basename.
//!
//! These functions are pure string surgery over the host separator
//! ([`crate::platform::PATH_SEPARATOR`]). They never touch the filesystem,
//! never validate that anything exists, and never normalize: `join` produces
//! exactly `dir + separator + base`, and `dirname`/`basename` split on the
//! last separator, so `join(&dirname(p), &basename(p))` reconstructs any `p`
//! that contains at least one separator.

use crate::platform::PATH_SEPARATOR;

/// Returns the final component of a path: everything after the last
/// separator.
///
/// Returns an empty string when the path contains no separator, or when it
/// ends with one.
///
/// # Examples
///
/// ```
/// # use fskit::paths::basename;
/// # let sep = std::path::MAIN_SEPARATOR;
/// let path = format!("{sep}home{sep}user{sep}docs");
/// assert_eq!(basename(&path), "docs");
/// assert_eq!(basename("docs"), "");
/// ```
#[must_use]
pub fn basename(path: &str) -> String {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => path[idx + 1..].to_string(),
        None => String::new(),
    }
}

/// Returns all leading components of a path: everything before the last
/// separator.
///
/// Returns an empty string when the path contains no separator.
///
/// # Examples
///
/// ```
/// # use fskit::paths::dirname;
/// # let sep = std::path::MAIN_SEPARATOR;
/// let path = format!("{sep}home{sep}user{sep}docs");
/// assert_eq!(dirname(&path), format!("{sep}home{sep}user"));
/// assert_eq!(dirname("docs"), "");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

/// Concatenates `dir + separator + base`.
///
/// No validation or normalization happens here; this only exists so callers
/// never hardcode a separator.
///
/// # Examples
///
/// ```
/// # use fskit::paths::join;
/// # let sep = std::path::MAIN_SEPARATOR;
/// assert_eq!(join("a", "b"), format!("a{sep}b"));
/// ```
#[must_use]
pub fn join(dir: &str, base: &str) -> String {
    let mut joined = String::with_capacity(dir.len() + base.len() + 1);
    joined.push_str(dir);
    joined.push(PATH_SEPARATOR);
    joined.push_str(base);
    joined
}
