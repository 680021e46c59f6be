//! Chunked file copy and concatenation.
//!
//! Both operations stream in fixed-size binary chunks instead of loading
//! whole files into memory, validate their inputs through
//! [`crate::metadata::try_exists`] before opening anything, and refuse to
//! clobber an existing destination unless overwriting was requested.
//! [`concat`] is not atomic: on a mid-stream failure it removes the partial
//! output as a best-effort cleanup, but a reader racing the cleanup can still
//! observe a half-written file.

use crate::error::{FsError, Result};
use crate::metadata::{PathKind, try_exists};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

/// Fixed streaming chunk size in bytes.
const CHUNK_SIZE: usize = 4096;

/// Copies `from` into `to` in binary mode.
///
/// # Errors
///
/// - [`FsError::NotFound`] when `from` does not exist as a file
/// - [`FsError::NotAFile`] when either operand exists but is not file-like
/// - [`FsError::AlreadyExists`] when `to` exists and `overwrite` is unset
/// - [`FsError::Io`] on any read or short write during streaming
///
/// # Examples
///
/// ```no_run
/// # fn main() -> fskit::Result<()> {
/// fskit::files::copy("data.bin", "backup.bin", true)?;
/// # Ok(())
/// # }
/// ```
pub fn copy(from: impl AsRef<Path>, to: impl AsRef<Path>, overwrite: bool) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    require_file(from)?;
    require_writable_destination(to, overwrite)?;

    stream_into(from, to, false)
}

/// Concatenates `file_a` followed by `file_b` into `out_file`, byte for
/// byte with no separator inserted.
///
/// The output is written by truncating with `file_a`'s content and then
/// appending `file_b`'s. When either stream fails, the partially written
/// output is removed as cleanup; if that cleanup itself fails the removal
/// error is logged and the original streaming error is still returned.
///
/// # Errors
///
/// - [`FsError::NotFound`] when either input does not exist as a file
/// - [`FsError::NotAFile`] when any operand exists but is not file-like
/// - [`FsError::AlreadyExists`] when `out_file` exists and `overwrite` is
///   unset
/// - [`FsError::Io`] on streaming failure
pub fn concat(
    file_a: impl AsRef<Path>,
    file_b: impl AsRef<Path>,
    out_file: impl AsRef<Path>,
    overwrite: bool,
) -> Result<()> {
    let file_a = file_a.as_ref();
    let file_b = file_b.as_ref();
    let out_file = out_file.as_ref();

    require_file(file_a)?;
    require_file(file_b)?;
    require_writable_destination(out_file, overwrite)?;

    let streamed =
        stream_into(file_a, out_file, false).and_then(|()| stream_into(file_b, out_file, true));

    if let Err(e) = streamed {
        if let Err(cleanup) = std::fs::remove_file(out_file) {
            tracing::warn!(
                target: "fskit::files",
                path = %out_file.display(),
                error = %cleanup,
                "failed to clean up partial output after concat error"
            );
        }
        return Err(e);
    }

    Ok(())
}

/// Validates that `path` exists as a file-like entry.
fn require_file(path: &Path) -> Result<()> {
    if try_exists(path, PathKind::File)? {
        Ok(())
    } else if try_exists(path, PathKind::Any)? {
        Err(FsError::NotAFile { path: path.to_path_buf() })
    } else {
        Err(FsError::NotFound { path: path.to_path_buf() })
    }
}

/// Validates that `path` can be written: absent, or a file-like entry with
/// `overwrite`. An existing directory is never a valid output.
fn require_writable_destination(path: &Path, overwrite: bool) -> Result<()> {
    if try_exists(path, PathKind::File)? {
        if !overwrite {
            return Err(FsError::AlreadyExists { path: path.to_path_buf() });
        }
    } else if try_exists(path, PathKind::Any)? {
        return Err(FsError::NotAFile { path: path.to_path_buf() });
    }
    Ok(())
}

/// Streams `from` into `to` in [`CHUNK_SIZE`] blocks. `append` selects
/// between truncate and append write modes.
fn stream_into(from: &Path, to: &Path, append: bool) -> Result<()> {
    let mut src = File::open(from).map_err(|e| FsError::os("opening for reading", from, e))?;
    let mut dst = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(to)
        .map_err(|e| FsError::os("opening for writing", to, e))?;

    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = src.read(&mut buffer).map_err(|e| FsError::os("reading chunk", from, e))?;
        if read == 0 {
            break;
        }
        // write_all reports a short write as an error
        dst.write_all(&buffer[..read]).map_err(|e| FsError::os("writing chunk", to, e))?;
    }

    Ok(())
}
