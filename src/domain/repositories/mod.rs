//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.

mod file_system;

pub use file_system::{EntryMetadata, FileSystem};
