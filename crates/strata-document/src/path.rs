//! Field-path building for diagnostics.
//!
//! Paths are plain strings accumulated as a document is walked: object
//! members append `.key` and array elements append `[index]`, so a
//! three-deep failure reads `pages[2].title`.

/// Qualify a member key with its parent path.
pub fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Qualify an array element with its parent path.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
