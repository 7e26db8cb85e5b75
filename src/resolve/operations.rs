//! Resolver operations implementation

use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ResolveError;

/// Find every directory under `root` whose name equals `name` exactly.
///
/// The walk is sorted by file name so the returned sequence is deterministic
/// within one filesystem snapshot; numbered selection against it is
/// reproducible. Fails with `NotFound` when nothing matches.
pub fn find_folders(root: &Path, name: &str) -> Result<Vec<PathBuf>, ResolveError> {
    if name.is_empty() {
        return Err(ResolveError::NotFound(name.to_string()));
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .flatten()
    {
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_dir() && entry.file_name() == name {
            matches.push(entry.path().to_path_buf());
        }
    }

    if matches.is_empty() {
        return Err(ResolveError::NotFound(name.to_string()));
    }

    info!("Found {} folder(s) named '{}'", matches.len(), name);
    Ok(matches)
}

/// Pick one match by 1-based index.
///
/// Non-numeric or out-of-range input fails with `InvalidSelection`; the
/// caller aborts the operation with no side effects.
pub fn choose<'a>(matches: &'a [PathBuf], selection: &str) -> Result<&'a PathBuf, ResolveError> {
    let invalid = || ResolveError::InvalidSelection {
        given: selection.trim().to_string(),
        count: matches.len(),
    };

    let index: usize = selection.trim().parse().map_err(|_| invalid())?;
    if index == 0 || index > matches.len() {
        return Err(invalid());
    }
    Ok(&matches[index - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_three_matches_are_deterministic() {
        let dir = TempDir::new().unwrap();
        for parent in ["a", "b", "c"] {
            fs::create_dir_all(dir.path().join(parent).join("target")).unwrap();
        }

        let first = find_folders(dir.path(), "target").unwrap();
        let second = find_folders(dir.path(), "target").unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);

        // Lexical walk order: a/target, b/target, c/target
        assert!(first[0].starts_with(dir.path().join("a")));
        assert!(first[1].starts_with(dir.path().join("b")));
        assert!(first[2].starts_with(dir.path().join("c")));
    }

    #[test]
    fn test_choose_is_one_based() {
        let dir = TempDir::new().unwrap();
        for parent in ["a", "b", "c"] {
            fs::create_dir_all(dir.path().join(parent).join("target")).unwrap();
        }

        let matches = find_folders(dir.path(), "target").unwrap();
        assert_eq!(choose(&matches, "2").unwrap(), &matches[1]);
        assert_eq!(choose(&matches, " 1 ").unwrap(), &matches[0]);
    }

    #[test]
    fn test_choose_rejects_bad_input() {
        let matches = vec![PathBuf::from("/srv/box/a")];
        assert!(matches!(
            choose(&matches, "0"),
            Err(ResolveError::InvalidSelection { .. })
        ));
        assert!(matches!(
            choose(&matches, "2"),
            Err(ResolveError::InvalidSelection { .. })
        ));
        assert!(matches!(
            choose(&matches, "abc"),
            Err(ResolveError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_no_match_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            find_folders(dir.path(), "missing"),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn test_name_match_is_exact_and_case_sensitive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Target")).unwrap();
        fs::create_dir_all(dir.path().join("target-2")).unwrap();
        assert!(find_folders(dir.path(), "target").is_err());
        assert_eq!(find_folders(dir.path(), "Target").unwrap().len(), 1);
    }

    #[test]
    fn test_files_are_not_matched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("target"), b"not a dir").unwrap();
        assert!(find_folders(dir.path(), "target").is_err());
    }
}
