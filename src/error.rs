//! Error handling for fskit
//!
//! Every fallible operation in this crate returns [`Result`], built on a
//! single [`FsError`] enumeration. Each variant represents one failure class
//! from the error taxonomy (not-found, permission denied, conflict, kind
//! mismatch, expansion failure, OS-call failure), so callers can match on the
//! cause instead of parsing messages. OS-call failures keep the underlying
//! [`std::io::Error`] as their source and record which operation was being
//! attempted on which path.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsError>;

/// The error type for all fskit operations.
///
/// Variants are grouped by failure class rather than by the function that
/// produced them, so the same variant can surface from several operations
/// (for example [`FsError::AlreadyExists`] from both [`crate::files::copy`]
/// and [`crate::tree::move_path`]).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FsError {
    /// An empty path was supplied where a filesystem entry was expected.
    #[error("path is empty")]
    EmptyPath,

    /// The target path does not exist on the local filesystem.
    #[error("path not found: {}", .path.display())]
    NotFound {
        /// The path that could not be located
        path: PathBuf,
    },

    /// The entry exists but its owner-read bit is unset.
    ///
    /// This is deliberately distinct from [`FsError::NotFound`]: a
    /// permission-denied stat does not mean the entry is absent.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        /// The path that could not be read
        path: PathBuf,
    },

    /// The destination already exists and overwriting was not requested.
    #[error("destination already exists: {}", .path.display())]
    AlreadyExists {
        /// The conflicting destination path
        path: PathBuf,
    },

    /// The entry exists but is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory {
        /// The path that was expected to be a directory
        path: PathBuf,
    },

    /// The entry exists but is not a regular file (or file-like entry).
    #[error("not a file: {}", .path.display())]
    NotAFile {
        /// The path that was expected to be a file
        path: PathBuf,
    },

    /// Shell-style expansion of a path failed before any OS resolution ran.
    ///
    /// `reason` names the specific expansion error class, e.g. an undefined
    /// environment variable or an unsupported tilde form.
    #[error("failed to expand path {path:?}: {reason}")]
    Expansion {
        /// The original, unexpanded input
        path: String,
        /// Description of the expansion failure
        reason: String,
    },

    /// An OS call failed.
    #[error("{operation} failed for {}", .path.display())]
    Io {
        /// The operation being attempted, e.g. `"reading directory"`
        operation: &'static str,
        /// The path the operation was acting on
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an [`std::io::Error`], promoting the well-known kinds to their
    /// dedicated variants so callers never have to inspect `io::ErrorKind`
    /// themselves.
    pub(crate) fn os(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path: path.to_path_buf() },
            std::io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied { path: path.to_path_buf() }
            }
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path: path.to_path_buf() },
            _ => Self::Io { operation, path: path.to_path_buf(), source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_promotes_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FsError::os("reading", Path::new("/no/such"), io);
        assert!(matches!(err, FsError::NotFound { .. }));
    }

    #[test]
    fn test_os_promotes_permission_denied() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = FsError::os("reading", Path::new("/locked"), io);
        assert!(matches!(err, FsError::PermissionDenied { .. }));
    }

    #[test]
    fn test_os_keeps_other_kinds() {
        let io = std::io::Error::other("disk on fire");
        let err = FsError::os("writing", Path::new("/out"), io);
        match err {
            FsError::Io { operation, ref path, .. } => {
                assert_eq!(operation, "writing");
                assert_eq!(path, Path::new("/out"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_path() {
        let err = FsError::AlreadyExists { path: PathBuf::from("/tmp/out.txt") };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out.txt"));
        assert!(msg.contains("already exists"));
    }
}
