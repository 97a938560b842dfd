//! File-system checkers.
//!
//! Path checks read the live file system at call time. Any I/O error,
//! including a missing entry or a permission failure, is a `false`.

use std::fs::{self, File, Metadata, OpenOptions};
use std::path::Path;

use crate::value::Value;

// ==================== STREAMS ====================

/// Returns true for in-memory binary streams.
pub fn is_bytes_io(value: &Value) -> bool {
    matches!(value, Value::BytesBuffer(_))
}

/// Returns true for in-memory text streams.
pub fn is_string_io(value: &Value) -> bool {
    matches!(value, Value::StringBuffer(_))
}

// ==================== PATHS ====================

/// The path a value designates, if any. Empty text designates nothing.
fn path_of(value: &Value) -> Option<&Path> {
    match value {
        Value::Path(path) => Some(path),
        Value::Text(text) if !text.is_empty() => Some(Path::new(text)),
        _ => None,
    }
}

fn metadata_of(value: &Value) -> Option<(&Path, Metadata)> {
    let path = path_of(value)?;
    let metadata = fs::metadata(path).ok()?;
    Some((path, metadata))
}

/// Returns true for path values and non-empty text. The path need not exist.
pub fn is_pathlike(value: &Value) -> bool {
    path_of(value).is_some()
}

/// Returns true if the path exists.
pub fn is_on_filesystem(value: &Value) -> bool {
    metadata_of(value).is_some()
}

/// Returns true if the path is an existing file, following symlinks.
pub fn is_file(value: &Value) -> bool {
    metadata_of(value).is_some_and(|(_, m)| m.is_file())
}

/// Returns true if the path is an existing directory, following symlinks.
pub fn is_directory(value: &Value) -> bool {
    metadata_of(value).is_some_and(|(_, m)| m.is_dir())
}

// ==================== ACCESS ====================

/// Returns true if the file can be opened, or the directory listed.
pub fn is_readable(value: &Value) -> bool {
    match metadata_of(value) {
        Some((path, m)) if m.is_dir() => fs::read_dir(path).is_ok(),
        Some((path, _)) => File::open(path).is_ok(),
        None => false,
    }
}

/// Returns true if the file can be opened for appending, or the directory
/// is not read-only.
///
/// Opening for append never truncates or writes.
pub fn is_writeable(value: &Value) -> bool {
    match metadata_of(value) {
        Some((_, m)) if m.is_dir() => !m.permissions().readonly(),
        Some((path, _)) => OpenOptions::new().append(true).open(path).is_ok(),
        None => false,
    }
}

/// Returns true for files that may be executed.
///
/// On Unix this means any execute bit is set. Elsewhere it means the file
/// has an executable extension.
pub fn is_executable(value: &Value) -> bool {
    metadata_of(value).is_some_and(|(path, m)| m.is_file() && has_execute_permission(path, &m))
}

#[cfg(unix)]
fn has_execute_permission(_path: &Path, metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_execute_permission(path: &Path, _metadata: &Metadata) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ["exe", "bat", "cmd", "com"].iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
