//! Platform-specific helpers behind the crate's shared contract.
//!
//! Everything that genuinely differs between POSIX and Windows lives here:
//! the path separator, hidden-entry detection (leading dot vs. the hidden
//! file attribute), Windows long-path handling, and home directory lookup.
//! The rest of the crate calls these helpers and stays platform-neutral.

use crate::error::{FsError, Result};
use std::path::{Path, PathBuf};

/// The host's path separator (`\` on Windows, `/` elsewhere).
pub const PATH_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Returns `true` when running on Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Returns the current user's home directory.
///
/// Used for tilde expansion during [`crate::resolve::resolve`].
///
/// # Errors
///
/// Fails when the platform's home directory cannot be determined (e.g. the
/// `HOME` / `USERPROFILE` environment variable is unset).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let reason = if is_windows() {
            "could not determine home directory; check that USERPROFILE is set"
        } else {
            "could not determine home directory; check that HOME is set"
        };
        FsError::Expansion { path: "~".to_string(), reason: reason.to_string() }
    })
}

/// Decides whether a directory entry counts as hidden.
///
/// On POSIX this is purely name-based: any entry whose name starts with `.`
/// is hidden. `path` is unused but kept so both platforms share a signature.
#[cfg(not(windows))]
pub(crate) fn is_hidden(_path: &Path, name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Decides whether a directory entry counts as hidden.
///
/// On Windows an entry is hidden when it carries `FILE_ATTRIBUTE_HIDDEN`,
/// regardless of its name. Entries whose attributes cannot be read are
/// treated as visible.
#[cfg(windows)]
pub(crate) fn is_hidden(path: &Path, _name: &std::ffi::OsStr) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    std::fs::symlink_metadata(path)
        .map(|md| md.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

/// Converts a path to use the Windows `\\?\` prefix when it exceeds the
/// legacy 260-character limit. Shorter paths pass through unchanged.
#[cfg(windows)]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str.len() > 260 && !path_str.starts_with(r"\\?\") {
        let absolute_path = if path.is_relative() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
        } else {
            path.to_path_buf()
        };

        let absolute_str = absolute_path.to_string_lossy();
        if absolute_str.len() > 260 {
            if let Some(stripped) = absolute_str.strip_prefix(r"\\") {
                // Network path
                PathBuf::from(format!(r"\\?\UNC\{stripped}"))
            } else {
                PathBuf::from(format!(r"\\?\{absolute_str}"))
            }
        } else {
            absolute_path
        }
    } else {
        path.to_path_buf()
    }
}

/// No-op counterpart of [`windows_long_path`] for non-Windows platforms.
#[cfg(not(windows))]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
