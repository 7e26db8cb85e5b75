//! Path confinement guard
//!
//! Validates every candidate path against the working-root boundary before
//! any filesystem call.

mod validation;

pub use validation::confine;
