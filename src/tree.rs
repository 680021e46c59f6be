//! Directory tree manipulation: recursive creation, removal, and moves.
//!
//! These are the operations with real failure-ordering semantics. `mkdirs`
//! walks a path left to right and stops at the first component it cannot
//! create; `remove` walks depth-first and stops at the first entry it cannot
//! delete, leaving earlier deletions in place; `move_path` clears a
//! conflicting destination before the rename only when overwriting was
//! requested. Nothing here is transactional.

use crate::error::{FsError, Result};
use crate::metadata::{PathKind, exists};
use crate::platform::{self, PATH_SEPARATOR};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Stats an entry without following a final symlink. Absence is `None`;
/// every other stat failure propagates, so an entry that exists but cannot
/// be inspected is never mistaken for a missing one.
fn classify(path: &Path) -> Result<Option<fs::FileType>> {
    match fs::symlink_metadata(path) {
        Ok(md) => Ok(Some(md.file_type())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FsError::os("reading metadata", path, e)),
    }
}

/// Directory permissions for created components: owner rwx, group rwx,
/// other read. Windows ignores this and applies the default ACL.
#[cfg(unix)]
const DIR_MODE: u32 = 0o774;

/// Recursively creates a directory structure.
///
/// The path is walked left to right; each missing intermediate component is
/// created before the final one. Already-existing intermediates are skipped,
/// which also makes the whole call idempotent — running it twice on the same
/// path succeeds both times.
///
/// # Errors
///
/// Fails on empty input, or with the failing component attached as soon as
/// any single creation fails; later components are not attempted.
pub fn mkdirs(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FsError::EmptyPath);
    }

    // Create each proper prefix ending at a separator. Starting at 1 skips
    // the root separator of absolute paths.
    for (idx, ch) in path.char_indices().skip(1) {
        if ch == PATH_SEPARATOR {
            make_one_dir(&path[..idx])?;
        }
    }

    make_one_dir(path)
}

/// Creates a single directory component unless it already exists.
fn make_one_dir(prefix: &str) -> Result<()> {
    if exists(prefix, PathKind::Folder) {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    let target = platform::windows_long_path(Path::new(prefix));
    builder.create(&target).map_err(|e| FsError::os("creating directory", &target, e))
}

/// Removes an entry from the local filesystem.
///
/// A file-like entry is unlinked directly. A directory with `recurse` unset
/// is only removed when empty. With `recurse` set, the tree is walked
/// depth-first so every child is removed before its parent; `follow_links`
/// decides whether the walk physically traverses through directory
/// symlinks.
///
/// # Errors
///
/// Fails with [`FsError::NotFound`] when the path is absent, with
/// [`FsError::PermissionDenied`] when it cannot even be stat'ed, and aborts
/// on the first removal error during a recursive walk. Partial deletions are
/// not rolled back. Unlinking needs no read permission, so a write-only
/// file is still removed.
pub fn remove(path: impl AsRef<Path>, recurse: bool, follow_links: bool) -> Result<()> {
    let path = path.as_ref();

    let file_type = match classify(path)? {
        Some(ft) => ft,
        None => return Err(FsError::NotFound { path: path.to_path_buf() }),
    };

    if !file_type.is_dir() {
        return fs::remove_file(path).map_err(|e| FsError::os("removing file", path, e));
    }

    if !recurse {
        return fs::remove_dir(path).map_err(|e| FsError::os("removing directory", path, e));
    }

    // contents_first yields children before their parent directories, the
    // ordering a depth-first removal needs.
    for entry in WalkDir::new(path).follow_links(follow_links).contents_first(true) {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(path).to_path_buf();
            tracing::warn!(
                target: "fskit::tree",
                path = %at.display(),
                error = %e,
                "recursive removal walk failed"
            );
            match e.into_io_error() {
                Some(io) => FsError::os("walking directory tree", &at, io),
                None => FsError::NotFound { path: at },
            }
        })?;

        let child = entry.path();
        if entry.file_type().is_dir() && !entry.path_is_symlink() {
            fs::remove_dir(child).map_err(|e| FsError::os("removing directory", child, e))?;
        } else {
            fs::remove_file(child).map_err(|e| FsError::os("removing file", child, e))?;
        }
    }

    Ok(())
}

/// Moves a file or directory with an OS-level rename.
///
/// The source's kind is determined first; when the destination already
/// exists as the same kind of entry it is removed before the rename if
/// `overwrite` is set, and the call fails otherwise. Removal failures
/// propagate instead of being masked by a doomed rename.
///
/// # Errors
///
/// - [`FsError::NotFound`] when `from` is absent
/// - [`FsError::PermissionDenied`] when either operand cannot be stat'ed
/// - [`FsError::AlreadyExists`] for a same-kind collision without
///   `overwrite`; neither entry is modified in that case
/// - [`FsError::Io`] when the rename itself fails (e.g. across filesystems)
pub fn move_path(from: impl AsRef<Path>, to: impl AsRef<Path>, overwrite: bool) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    let from_type = match classify(from)? {
        Some(ft) => ft,
        None => return Err(FsError::NotFound { path: from.to_path_buf() }),
    };

    if let Some(to_type) = classify(to)? {
        if from_type.is_dir() == to_type.is_dir() {
            if !overwrite {
                return Err(FsError::AlreadyExists { path: to.to_path_buf() });
            }
            remove(to, to_type.is_dir(), false)?;
        }
    }

    fs::rename(from, to).map_err(|e| FsError::os("renaming", from, e))
}
