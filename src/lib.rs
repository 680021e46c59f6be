//! fskit - cross-platform filesystem utilities
//!
//! A small library for path manipulation, directory tree operations, and
//! basic file I/O that behaves the same on Windows, macOS, and Linux. Every
//! platform divergence (shell-style expansion vs. lexical canonicalization,
//! dotfile-hidden vs. attribute-hidden entries, permission bits vs. default
//! ACLs) is hidden behind one semantic contract with `cfg`-gated backends.
//!
//! # Key Features
//!
//! - **Unified errors**: every operation returns [`Result`] with the
//!   [`FsError`] cause enumeration — no sentinel values, no boolean-vs-status
//!   mismatches between calls
//! - **Path resolution**: tilde and environment-variable expansion followed
//!   by OS canonicalization, with Windows long-path handling
//! - **Filtered listing**: directory enumeration with hidden-entry rules and
//!   first-class [`PathFilter`] predicates (closures work directly)
//! - **Tree operations**: recursive creation, depth-first removal, and
//!   rename-based moves with explicit overwrite semantics
//! - **Chunked file I/O**: fixed-size streaming copy and concatenation that
//!   never load whole files into memory
//!
//! # Example
//!
//! ```no_run
//! use fskit::{PathKind, paths};
//!
//! # fn main() -> fskit::Result<()> {
//! // Build and create a nested directory, then verify it
//! let target = paths::join("/tmp/demo", "a/b/c");
//! fskit::mkdirs(&target)?;
//! assert!(fskit::exists(&target, PathKind::Folder));
//!
//! // List visible siblings, directories only
//! let dirs = fskit::list("/tmp/demo", false, Some(&fskit::DirsOnly))?;
//!
//! // Tear the tree back down
//! fskit::remove("/tmp/demo", true, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous and blocking, and no state is shared
//! between calls. Concurrent invocation against the *same* path is racy at
//! the OS level (e.g. a recursive remove against a concurrent create) and is
//! not guarded here; callers needing that coordination must serialize
//! externally.
//!
//! # Diagnostics
//!
//! Failures that get folded into a boolean or skipped during enumeration are
//! reported through [`tracing`] events under `fskit::*` targets; install any
//! `tracing` subscriber to see them.

pub mod endian;
pub mod error;
pub mod files;
pub mod list;
pub mod metadata;
pub mod paths;
pub mod platform;
pub mod resolve;
pub mod strings;
pub mod tree;

pub use error::{FsError, Result};
pub use list::{AllEntries, DirsOnly, FilesOnly, PathFilter, count_entries, list};
pub use metadata::{PathKind, exists, try_exists};
pub use paths::{basename, dirname, join};
pub use platform::PATH_SEPARATOR;
pub use resolve::resolve;
pub use tree::{mkdirs, move_path, remove};

/// Crate version, as compiled.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
