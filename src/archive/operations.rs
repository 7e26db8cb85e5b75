//! ZIP archive operations implementation

use log::{info, warn};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::ArchiveError;
use crate::guard;
use crate::session::{Session, relative_display};

/// Result of an archive operation
#[derive(Debug, Clone)]
pub struct ArchiveResult {
    pub archive: PathBuf,
    pub entries: usize,
}

/// Create a ZIP archive from a file or directory under the cursor.
///
/// A single file is stored under its base name. A directory is walked in
/// sorted order and every contained file is stored under its path relative
/// to the directory, so the subtree's internal structure is preserved and
/// the absolute prefix discarded.
pub fn create_archive(
    session: &Session,
    source: &str,
    archive_name: &str,
) -> Result<ArchiveResult, ArchiveError> {
    let src = session.resolve(Path::new(source))?;
    if !src.exists() {
        return Err(ArchiveError::NotFound(source.to_string()));
    }
    let archive_path = session.resolve(Path::new(archive_name))?;

    let file = File::create(&archive_path)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = 0;

    if src.is_file() {
        let name = src
            .file_name()
            .ok_or_else(|| ArchiveError::NotFound(source.to_string()))?
            .to_string_lossy()
            .to_string();
        zip.start_file(name, options)?;
        let mut input = File::open(&src)?;
        io::copy(&mut input, &mut zip)?;
        entries += 1;
    } else {
        for entry in WalkDir::new(&src).sort_by_file_name().into_iter().flatten() {
            if entry.depth() == 0 {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&src) else {
                continue;
            };
            let name = rel.to_string_lossy().replace('\\', "/");
            if entry.file_type().is_dir() {
                zip.add_directory(name, options)?;
            } else {
                zip.start_file(name, options)?;
                let mut input = File::open(entry.path())?;
                io::copy(&mut input, &mut zip)?;
                entries += 1;
            }
        }
    }

    zip.finish()?;
    info!(
        "Created archive {} ({} file(s))",
        relative_display(session.root(), &archive_path),
        entries
    );
    Ok(ArchiveResult {
        archive: archive_path,
        entries,
    })
}

/// Extract a ZIP archive under the cursor into a target directory.
///
/// The target is created if absent; every entry lands under it with its
/// archive-relative path. Entries whose names would escape the target are
/// skipped, and the whole extraction stays confined to the working root.
/// Existing files are overwritten (platform default).
pub fn extract_archive(
    session: &Session,
    archive_name: &str,
    target_dir: &str,
) -> Result<ArchiveResult, ArchiveError> {
    let archive_path = session.resolve(Path::new(archive_name))?;
    if !archive_path.is_file() {
        return Err(ArchiveError::NotFound(archive_name.to_string()));
    }
    let target = session.resolve(Path::new(target_dir))?;
    fs::create_dir_all(&target)?;

    let mut zip = ZipArchive::new(File::open(&archive_path)?)?;
    let mut entries = 0;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(rel) = entry.enclosed_name().map(Path::to_path_buf) else {
            warn!("Skipped unsafe archive entry: {}", entry.name());
            continue;
        };
        let dest = guard::confine(session.root(), &target.join(&rel))?;

        if entry.is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut output = File::create(&dest)?;
            io::copy(&mut entry, &mut output)?;
            entries += 1;
        }
    }

    info!(
        "Extracted {} file(s) into {}",
        entries,
        relative_display(session.root(), &target)
    );
    Ok(ArchiveResult {
        archive: archive_path,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path()).unwrap();
        (dir, session)
    }

    #[test]
    fn test_directory_round_trip() {
        let (_dir, session) = session();
        storage::create_folder(&session, "src/nested").unwrap();
        storage::write_file(&session, "src/a.txt", "alpha").unwrap();
        storage::write_file(&session, "src/nested/b.txt", "beta").unwrap();

        let created = create_archive(&session, "src", "a.zip").unwrap();
        assert_eq!(created.entries, 2);

        let extracted = extract_archive(&session, "a.zip", "out").unwrap();
        assert_eq!(extracted.entries, 2);

        let out = session.root().join("out");
        assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "alpha\n");
        assert_eq!(
            fs::read_to_string(out.join("nested/b.txt")).unwrap(),
            "beta\n"
        );
    }

    #[test]
    fn test_single_file_stored_under_base_name() {
        let (_dir, session) = session();
        storage::create_folder(&session, "docs").unwrap();
        storage::write_file(&session, "docs/note.txt", "hi").unwrap();

        create_archive(&session, "docs/note.txt", "note.zip").unwrap();
        extract_archive(&session, "note.zip", "out").unwrap();

        assert_eq!(
            fs::read_to_string(session.root().join("out/note.txt")).unwrap(),
            "hi\n"
        );
    }

    #[test]
    fn test_missing_source_and_archive() {
        let (_dir, session) = session();
        assert!(matches!(
            create_archive(&session, "missing", "a.zip"),
            Err(ArchiveError::NotFound(_))
        ));
        assert!(matches!(
            extract_archive(&session, "missing.zip", "out"),
            Err(ArchiveError::NotFound(_))
        ));
    }

    #[test]
    fn test_extract_creates_target_dir() {
        let (_dir, session) = session();
        storage::write_file(&session, "a.txt", "x").unwrap();
        create_archive(&session, "a.txt", "a.zip").unwrap();

        assert!(!session.root().join("deep").exists());
        extract_archive(&session, "a.zip", "deep").unwrap();
        assert!(session.root().join("deep/a.txt").is_file());
    }

    #[test]
    fn test_archive_paths_are_confined() {
        let (_dir, session) = session();
        storage::write_file(&session, "a.txt", "x").unwrap();
        assert!(matches!(
            create_archive(&session, "a.txt", "../outside.zip"),
            Err(ArchiveError::AccessDenied(_))
        ));
        assert!(matches!(
            extract_archive(&session, "../outside.zip", "out"),
            Err(ArchiveError::AccessDenied(_))
        ));
    }
}
