//! Path resolution: shell-style expansion plus OS canonicalization.
//!
//! [`resolve`] is the one place the crate turns user-supplied path text into
//! an absolute, symlink-free path. Expansion runs first — tilde and `$VAR` /
//! `${VAR}` on every platform, `%VAR%` additionally on Windows — and then the
//! expanded path is canonicalized against the live filesystem. Either stage
//! can fail, and the two stages report distinct error classes so callers can
//! tell a bad variable reference apart from a missing entry.

use crate::error::{FsError, Result};
use crate::platform;
use std::path::{Path, PathBuf};

/// Expands and canonicalizes a path.
///
/// Expansion handles `~/` (home directory) and environment variables;
/// canonicalization resolves `.`/`..`, symlinks, and produces an absolute
/// path. The final path is returned with Windows long-path (`\\?\`)
/// prefixing applied where needed.
///
/// # Errors
///
/// - [`FsError::EmptyPath`] for empty input
/// - [`FsError::Expansion`] when a tilde form is unsupported or a referenced
///   environment variable is undefined; the message names the failing token
/// - [`FsError::NotFound`] / [`FsError::Io`] when the expanded path cannot be
///   canonicalized
///
/// # Examples
///
/// ```no_run
/// # fn main() -> fskit::Result<()> {
/// let home = fskit::resolve("~/projects")?;
/// assert!(home.is_absolute());
/// # Ok(())
/// # }
/// ```
pub fn resolve(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return Err(FsError::EmptyPath);
    }

    let expanded = expand(path)?;
    canonicalize(&expanded, path)
}

/// Tilde and environment-variable expansion, without touching the
/// filesystem.
fn expand(path: &str) -> Result<PathBuf> {
    let after_tilde = if let Some(stripped) = path.strip_prefix("~/") {
        let home = platform::home_dir()?;
        home.join(stripped)
    } else if path == "~" {
        platform::home_dir()?
    } else if path.starts_with('~') {
        // ~username expansion would need a passwd lookup; not supported
        return Err(FsError::Expansion {
            path: path.to_string(),
            reason: "tilde expansion only supports '~' and '~/' for the current user".to_string(),
        });
    } else {
        PathBuf::from(path)
    };

    let path_str = after_tilde.to_string_lossy();
    let expanded = expand_env(&path_str, path)?;
    Ok(PathBuf::from(expanded))
}

/// Unix-style `$VAR` / `${VAR}` expansion.
#[cfg(not(windows))]
fn expand_env(path_str: &str, original: &str) -> Result<String> {
    shellexpand::env(path_str).map(std::borrow::Cow::into_owned).map_err(|e| {
        FsError::Expansion {
            path: original.to_string(),
            reason: format!("undefined or malformed variable '{}': {}", e.var_name, e.cause),
        }
    })
}

/// Windows expands `%VAR%` first, then falls back to Unix-style `$VAR`
/// syntax for compatibility. Unmatched `%VAR%` tokens are left in place, the
/// way `cmd.exe` leaves them.
#[cfg(windows)]
fn expand_env(path_str: &str, original: &str) -> Result<String> {
    let mut result = path_str.to_string();
    if path_str.contains('%') {
        let re = regex::Regex::new(r"%([^%]+)%").expect("static pattern");
        for cap in re.captures_iter(path_str) {
            if let Some(var_name) = cap.get(1)
                && let Ok(value) = std::env::var(var_name.as_str())
            {
                result = result.replace(&format!("%{}%", var_name.as_str()), &value);
            }
        }
    }

    shellexpand::env(&result).map(std::borrow::Cow::into_owned).map_err(|e| {
        FsError::Expansion {
            path: original.to_string(),
            reason: format!("undefined or malformed variable '{}': {}", e.var_name, e.cause),
        }
    })
}

/// Resolves the expanded path against the live filesystem.
fn canonicalize(expanded: &Path, original: &str) -> Result<PathBuf> {
    match expanded.canonicalize() {
        Ok(canonical) => Ok(platform::windows_long_path(&canonical)),
        Err(e) => {
            tracing::debug!(
                target: "fskit::resolve",
                input = original,
                expanded = %expanded.display(),
                error = %e,
                "canonicalization failed"
            );
            Err(FsError::os("canonicalizing", expanded, e))
        }
    }
}
