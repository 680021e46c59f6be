//! Directory listing and counting with caller-supplied filters.
//!
//! [`list`] and [`count_entries`] share one enumeration contract: the base
//! directory is resolved to an absolute path first, `.`/`..` never appear,
//! hidden entries (dotfiles on POSIX, hidden-attribute entries on Windows)
//! are excluded unless asked for, and each surviving entry is offered to the
//! caller's [`PathFilter`] as a full path. The listing is produced atomically
//! by a single call; there is no streaming variant.

use crate::error::{FsError, Result};
use crate::metadata::{PathKind, exists};
use crate::platform;
use crate::resolve::resolve;
use std::fs;
use std::path::{Path, PathBuf};

/// A predicate over a full path, used to restrict [`list`] and
/// [`count_entries`] results.
///
/// Any `Fn(&Path) -> bool` closure implements this trait, so stateful
/// filters work without globals:
///
/// ```no_run
/// # fn main() -> fskit::Result<()> {
/// let min_len = 4;
/// let long_names = move |p: &std::path::Path| {
///     p.file_name().is_some_and(|n| n.len() >= min_len)
/// };
/// let entries = fskit::list("/tmp", false, Some(&long_names))?;
/// # Ok(())
/// # }
/// ```
pub trait PathFilter {
    /// Returns `true` to keep the entry at `path`, `false` to drop it.
    fn accepts(&self, path: &Path) -> bool;
}

impl<F: Fn(&Path) -> bool> PathFilter for F {
    fn accepts(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Keeps every entry that exists, regardless of kind.
pub struct AllEntries;

impl PathFilter for AllEntries {
    fn accepts(&self, path: &Path) -> bool {
        exists(path, PathKind::Any)
    }
}

/// Keeps file-like entries: regular files, symlinks, and devices.
pub struct FilesOnly;

impl PathFilter for FilesOnly {
    fn accepts(&self, path: &Path) -> bool {
        exists(path, PathKind::File)
    }
}

/// Keeps directories.
pub struct DirsOnly;

impl PathFilter for DirsOnly {
    fn accepts(&self, path: &Path) -> bool {
        exists(path, PathKind::Folder)
    }
}

/// Lists the immediate children of `base_dir` as full paths.
///
/// `base_dir` is resolved with [`resolve`] first, so relative paths, tilde
/// forms, and environment variables all work. Hidden entries are skipped
/// unless `list_hidden` is set. When `filter` is present, only entries it
/// accepts are returned; absence means "accept all".
///
/// # Errors
///
/// Fails when `base_dir` cannot be resolved, is not a directory, or cannot
/// be opened for reading. Individual entries that fail to enumerate are
/// logged and skipped rather than aborting the whole listing.
pub fn list(
    base_dir: &str,
    list_hidden: bool,
    filter: Option<&dyn PathFilter>,
) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for_each_entry(base_dir, list_hidden, filter, |path| entries.push(path))?;
    Ok(entries)
}

/// Counts the immediate children of `base_dir` under the same enumeration
/// and filtering rules as [`list`], without returning the paths themselves.
///
/// # Errors
///
/// Same failure conditions as [`list`].
pub fn count_entries(
    base_dir: &str,
    list_hidden: bool,
    filter: Option<&dyn PathFilter>,
) -> Result<usize> {
    let mut count = 0;
    for_each_entry(base_dir, list_hidden, filter, |_| count += 1)?;
    Ok(count)
}

/// Shared enumeration loop behind [`list`] and [`count_entries`].
fn for_each_entry(
    base_dir: &str,
    list_hidden: bool,
    filter: Option<&dyn PathFilter>,
    mut visit: impl FnMut(PathBuf),
) -> Result<()> {
    let base = resolve(base_dir)?;
    if !exists(&base, PathKind::Folder) {
        return Err(FsError::NotADirectory { path: base });
    }

    let read_dir = fs::read_dir(&base).map_err(|e| FsError::os("reading directory", &base, e))?;

    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(
                    target: "fskit::list",
                    base = %base.display(),
                    error = %e,
                    "skipping unreadable directory entry"
                );
                continue;
            }
        };

        let name = entry.file_name();
        let full_path = base.join(&name);

        if !list_hidden && platform::is_hidden(&full_path, &name) {
            continue;
        }

        if filter.is_none_or(|f| f.accepts(&full_path)) {
            visit(full_path);
        }
    }

    Ok(())
}
