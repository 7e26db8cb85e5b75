pub mod archive;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigate;
pub mod resolve;
pub mod session;
pub mod shell;
pub mod storage;

pub use session::Session;
