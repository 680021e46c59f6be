//! Integration test suite for fskit
//!
//! End-to-end tests that exercise the public surface against a real
//! filesystem in temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **workflow**: the full discover/list/build/create/verify/move/remove
//!   lifecycle, driven end to end against one tree
//! - **properties**: cross-operation guarantees (copy fidelity, concat
//!   byte-exactness, join/dirname/basename round-trips, mkdirs/remove
//!   inverses)

mod properties;
mod workflow;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a `tracing` subscriber once per test binary so fskit
/// diagnostics surface when tests run with `RUST_LOG` set.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
