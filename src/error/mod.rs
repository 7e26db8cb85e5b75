//! Error handling
//!
//! Defines error types for each module of the file manager.

pub mod types;

pub use types::*;
