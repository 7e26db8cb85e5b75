//! Storage operations
//!
//! File and folder operations on the sandbox: create, delete, read, write,
//! copy, move, rename, list. Sources are resolved relative to the cursor;
//! copy/move destinations arrive as already-resolved absolute directories
//! (the shell resolves the folder name via the destination resolver).

use filetime::FileTime;
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::guard;
use crate::session::{Session, relative_display};
use crate::storage::results::{ListResult, ReadResult, TransferResult};

/// Create a folder under the cursor. Idempotent: an existing directory at
/// the path is a success.
pub fn create_folder(session: &Session, name: &str) -> Result<PathBuf, StorageError> {
    let path = resolve_name(session, name)?;
    fs::create_dir_all(&path)?;
    info!("Created folder {}", relative_display(session.root(), &path));
    Ok(path)
}

/// Recursively delete a folder under the cursor.
pub fn delete_folder(session: &Session, name: &str) -> Result<(), StorageError> {
    let path = resolve_name(session, name)?;
    if !path.exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }
    if !path.is_dir() {
        return Err(StorageError::NotADirectory(name.to_string()));
    }
    fs::remove_dir_all(&path)?;
    info!("Deleted folder {}", relative_display(session.root(), &path));
    Ok(())
}

/// Create an empty file under the cursor. Fails if anything already
/// occupies the path.
pub fn create_file(session: &Session, name: &str) -> Result<PathBuf, StorageError> {
    let path = resolve_name(session, name)?;
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => {
            info!("Created file {}", relative_display(session.root(), &path));
            Ok(path)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(StorageError::AlreadyExists(name.to_string()))
        }
        Err(e) => {
            error!("Failed to create file {}: {}", name, e);
            Err(StorageError::from(e))
        }
    }
}

/// Append a line of text to a file under the cursor, creating it if absent.
pub fn write_file(session: &Session, name: &str, text: &str) -> Result<PathBuf, StorageError> {
    let path = resolve_name(session, name)?;
    let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
    writeln!(file, "{}", text)?;
    info!("Appended to file {}", relative_display(session.root(), &path));
    Ok(path)
}

/// Read the full content of a file under the cursor. Query only.
pub fn read_file(session: &Session, name: &str) -> Result<ReadResult, StorageError> {
    let path = resolve_name(session, name)?;
    if !path.exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }
    if !path.is_file() {
        return Err(StorageError::NotAFile(name.to_string()));
    }
    let content = fs::read_to_string(&path)?;
    Ok(ReadResult { content, path })
}

/// Delete a file under the cursor.
pub fn delete_file(session: &Session, name: &str) -> Result<(), StorageError> {
    let path = resolve_name(session, name)?;
    if !path.exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }
    if !path.is_file() {
        return Err(StorageError::NotAFile(name.to_string()));
    }
    fs::remove_file(&path)?;
    info!("Deleted file {}", relative_display(session.root(), &path));
    Ok(())
}

/// Rename an entry under the cursor. Fails if the old path is absent or the
/// new path is already occupied.
pub fn rename_file(session: &Session, old: &str, new: &str) -> Result<PathBuf, StorageError> {
    let old_path = resolve_name(session, old)?;
    let new_path = resolve_name(session, new)?;
    if !old_path.exists() {
        return Err(StorageError::NotFound(old.to_string()));
    }
    if new_path.exists() {
        return Err(StorageError::AlreadyExists(new.to_string()));
    }
    fs::rename(&old_path, &new_path)?;
    info!(
        "Renamed {} -> {}",
        relative_display(session.root(), &old_path),
        relative_display(session.root(), &new_path)
    );
    Ok(new_path)
}

/// Copy a file from under the cursor into an already-resolved destination
/// directory, preserving timestamps.
pub fn copy_file(
    session: &Session,
    source: &str,
    dest_dir: &Path,
) -> Result<TransferResult, StorageError> {
    let (src, dest) = resolve_transfer(session, source, dest_dir)?;
    fs::create_dir_all(dest_dir)?;
    fs::copy(&src, &dest)?;
    copy_file_times(&src, &dest)?;
    info!(
        "Copied {} -> {}",
        relative_display(session.root(), &src),
        relative_display(session.root(), &dest)
    );
    Ok(TransferResult {
        source: src,
        destination: dest,
    })
}

/// Move a file from under the cursor into an already-resolved destination
/// directory. Rename first; fall back to copy + delete across filesystems.
pub fn move_file(
    session: &Session,
    source: &str,
    dest_dir: &Path,
) -> Result<TransferResult, StorageError> {
    let (src, dest) = resolve_transfer(session, source, dest_dir)?;
    fs::create_dir_all(dest_dir)?;
    if fs::rename(&src, &dest).is_err() {
        fs::copy(&src, &dest)?;
        copy_file_times(&src, &dest)?;
        fs::remove_file(&src)?;
    }
    info!(
        "Moved {} -> {}",
        relative_display(session.root(), &src),
        relative_display(session.root(), &dest)
    );
    Ok(TransferResult {
        source: src,
        destination: dest,
    })
}

/// List the entries of the cursor directory, sorted, folders suffixed
/// with '/'.
pub fn list_directory(session: &Session) -> Result<ListResult, StorageError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(session.cursor())?.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => entries.push(format!("{}/", name)),
            _ => entries.push(name),
        }
    }
    entries.sort();
    Ok(ListResult {
        entries,
        path: session.relative_cursor(),
    })
}

/// Resolve a single name against the cursor, rejecting empty input.
fn resolve_name(session: &Session, name: &str) -> Result<PathBuf, StorageError> {
    if name.is_empty() {
        return Err(StorageError::InvalidPath("empty name".to_string()));
    }
    Ok(session.resolve(Path::new(name))?)
}

/// Resolve source and destination for a copy/move. The destination file
/// keeps the source's base name and is confined again under the root.
fn resolve_transfer(
    session: &Session,
    source: &str,
    dest_dir: &Path,
) -> Result<(PathBuf, PathBuf), StorageError> {
    let src = resolve_name(session, source)?;
    if !src.exists() {
        return Err(StorageError::NotFound(source.to_string()));
    }
    if !src.is_file() {
        return Err(StorageError::NotAFile(source.to_string()));
    }
    let file_name = src
        .file_name()
        .ok_or_else(|| StorageError::InvalidPath(source.to_string()))?;
    let dest = guard::confine(session.root(), &dest_dir.join(file_name))?;
    // Copying a file onto itself would truncate it; refuse before acting
    if src == dest {
        return Err(StorageError::SameFile(source.to_string()));
    }
    Ok((src, dest))
}

/// Mirror the source's access and modification times onto the destination.
fn copy_file_times(src: &Path, dest: &Path) -> Result<(), StorageError> {
    let metadata = fs::metadata(src)?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    let atime = FileTime::from_last_access_time(&metadata);
    filetime::set_file_times(dest, atime, mtime)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path()).unwrap();
        (dir, session)
    }

    #[test]
    fn test_create_folder_is_idempotent() {
        let (_dir, session) = session();
        create_folder(&session, "docs").unwrap();
        create_folder(&session, "docs").unwrap();
        assert!(session.root().join("docs").is_dir());
    }

    #[test]
    fn test_create_file_twice_fails() {
        let (_dir, session) = session();
        create_file(&session, "a.txt").unwrap();
        assert!(matches!(
            create_file(&session, "a.txt"),
            Err(StorageError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_write_appends_with_newline() {
        let (_dir, session) = session();
        write_file(&session, "log.txt", "x").unwrap();
        write_file(&session, "log.txt", "y").unwrap();
        let result = read_file(&session, "log.txt").unwrap();
        assert_eq!(result.content, "x\ny\n");
    }

    #[test]
    fn test_read_missing_file() {
        let (_dir, session) = session();
        assert!(matches!(
            read_file(&session, "nope.txt"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_file_and_folder_missing() {
        let (_dir, session) = session();
        assert!(matches!(
            delete_file(&session, "nope.txt"),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            delete_folder(&session, "nope"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_folder_recursive() {
        let (_dir, session) = session();
        create_folder(&session, "docs/inner").unwrap();
        write_file(&session, "docs/inner/a.txt", "x").unwrap();
        delete_folder(&session, "docs").unwrap();
        assert!(!session.root().join("docs").exists());
    }

    #[test]
    fn test_rename_checks_both_ends() {
        let (_dir, session) = session();
        create_file(&session, "a.txt").unwrap();
        create_file(&session, "b.txt").unwrap();

        assert!(matches!(
            rename_file(&session, "missing.txt", "c.txt"),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            rename_file(&session, "a.txt", "b.txt"),
            Err(StorageError::AlreadyExists(_))
        ));

        rename_file(&session, "a.txt", "c.txt").unwrap();
        assert!(!session.root().join("a.txt").exists());
        assert!(session.root().join("c.txt").exists());
    }

    #[test]
    fn test_copy_preserves_content_and_mtime() {
        let (_dir, session) = session();
        write_file(&session, "a.txt", "hello").unwrap();
        create_folder(&session, "dest").unwrap();

        let dest_dir = session.root().join("dest");
        copy_file(&session, "a.txt", &dest_dir).unwrap();

        let copied = dest_dir.join("a.txt");
        assert_eq!(fs::read_to_string(&copied).unwrap(), "hello\n");

        let src_meta = fs::metadata(session.root().join("a.txt")).unwrap();
        let dst_meta = fs::metadata(&copied).unwrap();
        assert_eq!(
            FileTime::from_last_modification_time(&src_meta),
            FileTime::from_last_modification_time(&dst_meta)
        );
    }

    #[test]
    fn test_move_removes_source() {
        let (_dir, session) = session();
        write_file(&session, "a.txt", "hello").unwrap();
        create_folder(&session, "dest").unwrap();

        let dest_dir = session.root().join("dest");
        move_file(&session, "a.txt", &dest_dir).unwrap();

        assert!(!session.root().join("a.txt").exists());
        assert_eq!(
            fs::read_to_string(dest_dir.join("a.txt")).unwrap(),
            "hello\n"
        );
    }

    #[test]
    fn test_escape_paths_are_denied() {
        let (_dir, session) = session();
        assert!(matches!(
            create_file(&session, "../escape.txt"),
            Err(StorageError::AccessDenied(_))
        ));
        assert!(matches!(
            write_file(&session, "../escape.txt", "x"),
            Err(StorageError::AccessDenied(_))
        ));
        assert!(matches!(
            create_folder(&session, "../escape"),
            Err(StorageError::AccessDenied(_))
        ));
    }

    #[test]
    fn test_list_directory_sorted_with_suffix() {
        let (_dir, session) = session();
        create_folder(&session, "docs").unwrap();
        create_file(&session, "a.txt").unwrap();
        create_file(&session, "z.txt").unwrap();

        let result = list_directory(&session).unwrap();
        assert_eq!(result.entries, vec!["a.txt", "docs/", "z.txt"]);
        assert_eq!(result.path, "/");
    }

    #[test]
    fn test_copy_onto_itself_is_rejected() {
        let (_dir, session) = session();
        write_file(&session, "a.txt", "payload").unwrap();

        // Destination directory is the file's own directory
        let result = copy_file(&session, "a.txt", session.root());
        assert!(matches!(result, Err(StorageError::SameFile(_))));
        assert_eq!(
            fs::read_to_string(session.root().join("a.txt")).unwrap(),
            "payload\n"
        );
    }

    #[test]
    fn test_move_onto_itself_is_rejected() {
        let (_dir, session) = session();
        write_file(&session, "a.txt", "payload").unwrap();

        let result = move_file(&session, "a.txt", session.root());
        assert!(matches!(result, Err(StorageError::SameFile(_))));
        assert_eq!(
            fs::read_to_string(session.root().join("a.txt")).unwrap(),
            "payload\n"
        );
    }

    #[test]
    fn test_copy_source_must_be_local_file() {
        let (_dir, session) = session();
        create_folder(&session, "dest").unwrap();
        let dest_dir = session.root().join("dest");
        assert!(matches!(
            copy_file(&session, "missing.txt", &dest_dir),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            copy_file(&session, "dest", &dest_dir),
            Err(StorageError::NotAFile(_))
        ));
    }
}
