//! Result types for navigate operations

use std::path::PathBuf;

/// Result of a successful cursor move
#[derive(Debug, Clone)]
pub struct CwdResult {
    pub path: PathBuf,
    pub display: String,
}
