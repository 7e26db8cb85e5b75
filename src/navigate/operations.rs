//! Navigation operations implementation

use log::info;
use std::path::Path;

use crate::error::NavigateError;
use crate::navigate::results::CwdResult;
use crate::session::{Session, relative_display};

/// Move the cursor into a folder below it.
///
/// The target is resolved against the cursor and confined to the root; it
/// must exist and be a directory.
pub fn enter(session: &mut Session, target: &str) -> Result<CwdResult, NavigateError> {
    if target.is_empty() {
        return Err(NavigateError::NotFound(target.to_string()));
    }

    let path = session.resolve(Path::new(target))?;

    if !path.exists() {
        return Err(NavigateError::NotFound(target.to_string()));
    }
    if !path.is_dir() {
        return Err(NavigateError::NotADirectory(target.to_string()));
    }

    let display = relative_display(session.root(), &path);
    session.set_cursor(path.clone());
    info!("Cursor moved to {}", display);

    Ok(CwdResult { path, display })
}

/// Move the cursor to its parent directory.
///
/// Fails with `AtRoot` when the cursor already sits at the working root;
/// repeated calls at the root never move the cursor.
pub fn leave(session: &mut Session) -> Result<CwdResult, NavigateError> {
    if session.cursor() == session.root() {
        return Err(NavigateError::AtRoot);
    }

    let parent = match session.cursor().parent() {
        Some(parent) if parent.starts_with(session.root()) => parent.to_path_buf(),
        _ => return Err(NavigateError::AtRoot),
    };

    let display = relative_display(session.root(), &parent);
    session.set_cursor(parent.clone());
    info!("Cursor moved to {}", display);

    Ok(CwdResult {
        path: parent,
        display,
    })
}
