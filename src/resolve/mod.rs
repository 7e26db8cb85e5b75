//! Destination resolver
//!
//! Locates folders by name anywhere under the working root for copy/move
//! targets, and resolves a numbered choice among ambiguous matches.

mod operations;

pub use operations::{choose, find_folders};
