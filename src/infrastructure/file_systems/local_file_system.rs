//! Local file system implementation
//!
//! Backs the [`FileSystem`] port with `std::fs`.

use crate::domain::repositories::{EntryMetadata, FileSystem};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// The host file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    type Reader = File;

    fn stat(&self, path: &Path) -> io::Result<EntryMetadata> {
        let metadata = fs::metadata(path)?;
        Ok(EntryMetadata {
            is_dir: metadata.is_dir(),
            len: metadata.len(),
        })
    }

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}
