//! Integration tests for Layer 3: Runtime
//!
//! Tests sessions built from configuration files and the renderers.

mod render;
mod session;

use std::path::PathBuf;

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
