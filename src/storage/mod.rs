//! File and folder operations
//!
//! Every operation resolves its arguments against the session cursor,
//! confines them to the working root, then acts on the filesystem.

mod operations;
mod results;

pub use operations::{
    copy_file, create_file, create_folder, delete_file, delete_folder, list_directory, move_file,
    read_file, rename_file, write_file,
};
pub use results::{ListResult, ReadResult, TransferResult};
