//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// Result of a directory listing operation
#[derive(Debug, Clone)]
pub struct ListResult {
    pub entries: Vec<String>,
    pub path: String,
}

/// Result of a file read operation
#[derive(Debug, Clone)]
pub struct ReadResult {
    pub content: String,
    pub path: PathBuf,
}

/// Result of a copy or move operation
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub source: PathBuf,
    pub destination: PathBuf,
}
