//! Existence checks and path classification.
//!
//! The [`PathKind`] tag is the crate's filter/classification parameter: it
//! names the category of filesystem entry an operation cares about and is
//! never stored anywhere. [`try_exists`] is the primary entry point; the
//! [`exists`] wrapper folds every failure into `false` for callers that only
//! want a boolean, logging the cause first.
//!
//! Classification stats the path without following a final symlink, so a
//! dangling symlink still reports as [`PathKind::Link`].

use crate::error::{FsError, Result};
use std::fs;
use std::path::Path;

/// Categories of filesystem entries used to filter or classify paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathKind {
    /// Any entry that exists on the filesystem
    #[default]
    Any,
    /// Regular files only, no links
    Regular,
    /// Files or file-like entries: regular files, symlinks, devices, pipes
    File,
    /// Symbolic links only
    Link,
    /// Directories
    Folder,
}

impl PathKind {
    /// Checks whether an entry's file type falls under this category.
    #[must_use]
    pub fn matches(self, file_type: fs::FileType) -> bool {
        match self {
            Self::Any => true,
            Self::Regular => file_type.is_file(),
            Self::File => file_type.is_file() || file_type.is_symlink() || is_device(file_type),
            Self::Link => file_type.is_symlink(),
            Self::Folder => file_type.is_dir(),
        }
    }
}

#[cfg(unix)]
fn is_device(file_type: fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_block_device() || file_type.is_char_device() || file_type.is_fifo()
}

#[cfg(not(unix))]
fn is_device(_file_type: fs::FileType) -> bool {
    false
}

/// Checks whether `path` exists as an entry of the requested kind.
///
/// The final path component is not followed if it is a symlink, so `kind`
/// classifies the link itself rather than its target.
///
/// # Errors
///
/// - [`FsError::EmptyPath`] for an empty input
/// - [`FsError::PermissionDenied`] when the entry exists but its owner-read
///   bit is unset — existence cannot be conflated with readability
/// - [`FsError::Io`] for any other stat failure besides absence
///
/// A plain "not found" is `Ok(false)`, not an error.
pub fn try_exists(path: impl AsRef<Path>, kind: PathKind) -> Result<bool> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(FsError::EmptyPath);
    }

    let metadata = match fs::symlink_metadata(path) {
        Ok(md) => md,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(FsError::os("reading metadata", path, e)),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o400 == 0 {
            return Err(FsError::PermissionDenied { path: path.to_path_buf() });
        }
    }

    Ok(kind.matches(metadata.file_type()))
}

/// Boolean wrapper around [`try_exists`] that fails closed.
///
/// Every error, including permission denied, becomes `false` after a
/// `warn!` diagnostic. Callers that need to distinguish "absent" from
/// "unreadable" use [`try_exists`] directly.
#[must_use]
pub fn exists(path: impl AsRef<Path>, kind: PathKind) -> bool {
    let path = path.as_ref();
    match try_exists(path, kind) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(
                target: "fskit::metadata",
                path = %path.display(),
                error = %e,
                "existence check failed"
            );
            false
        }
    }
}
