//! Archive operations
//!
//! ZIP creation and extraction confined to the working root.

mod operations;

pub use operations::{ArchiveResult, create_archive, extract_archive};
