// tests/common/mod.rs

#![allow(dead_code, unused_imports)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use outcome_test_utils::builders;
pub use outcome_test_utils::init_tracing;

/// Write `contents` to a temporary `.toml` file that lives as long as the
/// returned handle.
pub fn write_pipeline(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(file, "{contents}").unwrap();
    file
}
