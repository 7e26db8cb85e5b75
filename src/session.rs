//! Session state
//!
//! Holds the working root and the current-directory cursor. Every operation
//! takes the session explicitly; there is no process-wide state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::GuardError;
use crate::guard;

/// A file manager session: the sandbox root and a cursor inside it.
///
/// The cursor starts at the root and only moves through successful
/// navigation, so it is always equal to the root or a descendant of it.
#[derive(Debug)]
pub struct Session {
    root: PathBuf,
    cursor: PathBuf,
}

impl Session {
    /// Create a session rooted at `root`, creating the directory if absent.
    pub fn new(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;
        let root = root.canonicalize()?;
        Ok(Self {
            cursor: root.clone(),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cursor(&self) -> &Path {
        &self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: PathBuf) {
        self.cursor = cursor;
    }

    /// Resolve a candidate path against the cursor and confine it to the root.
    pub fn resolve(&self, candidate: &Path) -> Result<PathBuf, GuardError> {
        guard::confine(&self.root, &self.cursor.join(candidate))
    }

    /// The cursor as a root-relative display path ("/" at the root).
    pub fn relative_cursor(&self) -> String {
        relative_display(&self.root, &self.cursor)
    }
}

/// Render a confined path relative to the root, with a leading "/".
pub fn relative_display(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => "/".to_string(),
        Ok(rel) => format!("/{}", rel.display()),
        Err(_) => path.display().to_string(),
    }
}
