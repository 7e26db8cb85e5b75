//! Path validation
//!
//! Confines candidate paths to the working root. Normalization is lexical
//! (no filesystem access) so targets that do not exist yet can still be
//! validated, and the containment check compares whole path segments, so a
//! sibling directory sharing a string prefix with the root never passes.

use std::path::{Component, Path, PathBuf};

use crate::error::GuardError;

/// Resolve `candidate` and verify it stays inside `root`.
///
/// `candidate` must already be absolute (callers join user input against the
/// cursor, which is). Returns the normalized absolute path on success.
pub fn confine(root: &Path, candidate: &Path) -> Result<PathBuf, GuardError> {
    let normalized = normalize(candidate);
    if normalized.starts_with(root) {
        Ok(normalized)
    } else {
        Err(GuardError::AccessDenied(candidate.display().to_string()))
    }
}

/// Lexically resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
