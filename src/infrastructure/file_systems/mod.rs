//! File system adapters

mod local_file_system;

pub use local_file_system::LocalFileSystem;
