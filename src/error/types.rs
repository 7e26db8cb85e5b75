//! Error types
//!
//! Defines domain-specific error types for each module of the file manager.
//! Every public operation returns a typed error so callers can branch on the
//! kind rather than on message text; the shell converts them to status lines.

use std::fmt;
use std::io;

/// Path confinement errors
#[derive(Debug)]
pub enum GuardError {
    AccessDenied(String),
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::AccessDenied(p) => {
                write!(f, "Access denied: {} is outside the working root", p)
            }
        }
    }
}

impl std::error::Error for GuardError {}

/// Navigation errors
#[derive(Debug)]
pub enum NavigateError {
    AccessDenied(String),
    NotFound(String),
    NotADirectory(String),
    AtRoot,
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::AccessDenied(p) => {
                write!(f, "Access denied: {} is outside the working root", p)
            }
            NavigateError::NotFound(p) => write!(f, "Folder not found: {}", p),
            NavigateError::NotADirectory(p) => write!(f, "Not a folder: {}", p),
            NavigateError::AtRoot => write!(f, "Already at the working root"),
        }
    }
}

impl std::error::Error for NavigateError {}

impl From<GuardError> for NavigateError {
    fn from(error: GuardError) -> Self {
        match error {
            GuardError::AccessDenied(p) => NavigateError::AccessDenied(p),
        }
    }
}

/// Destination resolver errors
#[derive(Debug)]
pub enum ResolveError {
    NotFound(String),
    InvalidSelection { given: String, count: usize },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound(name) => write!(f, "No folder named '{}' found", name),
            ResolveError::InvalidSelection { given, count } => {
                write!(f, "Invalid selection '{}': expected 1-{}", given, count)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    AccessDenied(String),
    NotFound(String),
    AlreadyExists(String),
    NotAFile(String),
    NotADirectory(String),
    InvalidPath(String),
    SameFile(String),
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::AccessDenied(p) => {
                write!(f, "Access denied: {} is outside the working root", p)
            }
            StorageError::NotFound(p) => write!(f, "Not found: {}", p),
            StorageError::AlreadyExists(p) => write!(f, "Already exists: {}", p),
            StorageError::NotAFile(p) => write!(f, "Not a file: {}", p),
            StorageError::NotADirectory(p) => write!(f, "Not a folder: {}", p),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::SameFile(p) => {
                write!(f, "Source and destination are the same file: {}", p)
            }
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

impl From<GuardError> for StorageError {
    fn from(error: GuardError) -> Self {
        match error {
            GuardError::AccessDenied(p) => StorageError::AccessDenied(p),
        }
    }
}

/// Archive module errors
#[derive(Debug)]
pub enum ArchiveError {
    AccessDenied(String),
    NotFound(String),
    Malformed(String),
    Io(io::Error),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::AccessDenied(p) => {
                write!(f, "Access denied: {} is outside the working root", p)
            }
            ArchiveError::NotFound(p) => write!(f, "Not found: {}", p),
            ArchiveError::Malformed(msg) => write!(f, "Malformed archive: {}", msg),
            ArchiveError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ArchiveError {}

impl From<io::Error> for ArchiveError {
    fn from(error: io::Error) -> Self {
        ArchiveError::Io(error)
    }
}

impl From<GuardError> for ArchiveError {
    fn from(error: GuardError) -> Self {
        match error {
            GuardError::AccessDenied(p) => ArchiveError::AccessDenied(p),
        }
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(error: zip::result::ZipError) -> Self {
        match error {
            zip::result::ZipError::Io(e) => ArchiveError::Io(e),
            other => ArchiveError::Malformed(other.to_string()),
        }
    }
}

/// General file manager error that encompasses all error types
#[derive(Debug)]
pub enum FmError {
    Guard(GuardError),
    Navigate(NavigateError),
    Resolve(ResolveError),
    Storage(StorageError),
    Archive(ArchiveError),
}

impl fmt::Display for FmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmError::Guard(e) => write!(f, "{}", e),
            FmError::Navigate(e) => write!(f, "{}", e),
            FmError::Resolve(e) => write!(f, "{}", e),
            FmError::Storage(e) => write!(f, "{}", e),
            FmError::Archive(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FmError {}

// Implement conversions from specific errors to FmError
impl From<GuardError> for FmError {
    fn from(error: GuardError) -> Self {
        FmError::Guard(error)
    }
}

impl From<NavigateError> for FmError {
    fn from(error: NavigateError) -> Self {
        FmError::Navigate(error)
    }
}

impl From<ResolveError> for FmError {
    fn from(error: ResolveError) -> Self {
        FmError::Resolve(error)
    }
}

impl From<StorageError> for FmError {
    fn from(error: StorageError) -> Self {
        FmError::Storage(error)
    }
}

impl From<ArchiveError> for FmError {
    fn from(error: ArchiveError) -> Self {
        FmError::Archive(error)
    }
}
