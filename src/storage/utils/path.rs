// Key helpers shared across storage operations
use std::path::Path;

/// Build an object key by appending a file name to a key prefix.
///
/// A `/` separator is inserted when the prefix is non-empty and lacks one,
/// so `dir` and `dir/` both yield `dir/<file_name>`.
pub fn build_remote_key(prefix: &str, file_name: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{file_name}")
    } else {
        format!("{prefix}/{file_name}")
    }
}

/// Last segment of an object key, or `None` when the key names a
/// "directory" (empty or ending in `/`).
pub fn key_basename(key: &str) -> Option<&str> {
    match key.rsplit('/').next() {
        Some(name) if !name.is_empty() => Some(name),
        _ => None,
    }
}

/// File name of a local path as an owned string.
pub fn local_basename(path: &Path) -> Option<String> {
    path.file_name().map(|s| s.to_string_lossy().to_string())
}

/// Whether an object key has a `.csv` extension, ignoring ASCII case.
pub fn has_csv_extension(key: &str) -> bool {
    let suffix = crate::storage::constants::CSV_EXTENSION;
    key.len() >= suffix.len()
        && key.is_char_boundary(key.len() - suffix.len())
        && key[key.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
