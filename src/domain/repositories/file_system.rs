//! File system trait
//!
//! The classifier only needs to stat a path and open it for sequential
//! reading. Everything else about the underlying storage stays outside
//! the domain.

use std::io::{self, Read};
use std::path::Path;

/// The subset of entry metadata the detector inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Whether the entry is a directory
    pub is_dir: bool,
    /// Length of the entry in bytes
    pub len: u64,
}

/// Trait for the storage a detector reads from
///
/// Errors are reported with POSIX-like [`io::ErrorKind`]s; in particular a
/// missing entry must surface as [`io::ErrorKind::NotFound`] from
/// [`stat`](FileSystem::stat).
///
/// # Example
///
/// ```ignore
/// let fs = LocalFileSystem;
/// let meta = fs.stat(Path::new("image.gif"))?;
/// let mut reader = fs.open(Path::new("image.gif"))?;
/// ```
pub trait FileSystem: Send + Sync {
    /// Reader returned by [`open`](FileSystem::open). Dropping it releases
    /// the underlying handle.
    type Reader: Read;

    /// Returns metadata for the entry at `path`, following symlinks
    fn stat(&self, path: &Path) -> io::Result<EntryMetadata>;

    /// Opens the entry at `path` for reading from its first byte
    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}
