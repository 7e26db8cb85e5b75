//! Navigate module
//!
//! Handles cursor movement within the working root: entering a folder and
//! leaving back toward the root.

mod operations;
mod results;

pub use operations::{enter, leave};
pub use results::CwdResult;
