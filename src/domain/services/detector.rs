//! File type detector
//!
//! Validates a path, reads a bounded prefix from it and matches the prefix
//! against a [`SignatureTable`].

use super::signature_table::SignatureTable;
use crate::core::error::{DetectError, Result};
use crate::domain::entities::FileInfo;
use crate::domain::repositories::FileSystem;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::Path;

/// Minimum file size a detector accepts before reading anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// Any non-empty file is read; records that need more bytes than the
    /// file holds simply cannot match.
    #[default]
    NonEmpty,
    /// Files shorter than this many bytes are rejected untested.
    MinimumLength(u64),
    /// Files that no record in the table could fit are rejected untested.
    ShortestSignature,
}

impl SizePolicy {
    /// The fixed 8-byte floor used by early versions of the detector
    pub const fn legacy() -> Self {
        SizePolicy::MinimumLength(8)
    }

    /// Applies the policy to a file of `size` bytes. `shortest` is the
    /// smallest window in the table being matched against.
    fn check(&self, path: &Path, size: u64, shortest: usize) -> Result<()> {
        if size == 0 {
            return Err(DetectError::Empty(path.to_path_buf()));
        }
        let minimum = match *self {
            SizePolicy::NonEmpty => return Ok(()),
            SizePolicy::MinimumLength(minimum) => minimum,
            SizePolicy::ShortestSignature => u64::try_from(shortest).unwrap_or(u64::MAX),
        };
        if size < minimum {
            return Err(DetectError::TooSmall { size, minimum });
        }
        Ok(())
    }
}

/// Classifies files by their magic bytes
///
/// A detector holds no mutable state; one instance can serve any number of
/// threads as long as its file system is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Detector<'t, F> {
    table: &'t SignatureTable,
    fs: F,
    size_policy: SizePolicy,
}

impl<'t, F: FileSystem> Detector<'t, F> {
    /// Creates a detector over `table`, reading through `fs`
    pub fn new(table: &'t SignatureTable, fs: F) -> Self {
        Self {
            table,
            fs,
            size_policy: SizePolicy::default(),
        }
    }

    /// Sets the minimum size policy
    pub fn with_size_policy(mut self, size_policy: SizePolicy) -> Self {
        self.size_policy = size_policy;
        self
    }

    /// Returns the table this detector matches against
    pub fn table(&self) -> &SignatureTable {
        self.table
    }

    /// Returns the active size policy
    pub fn size_policy(&self) -> SizePolicy {
        self.size_policy
    }

    /// Identifies the file at `path`.
    ///
    /// Checks run in a fixed order and stop at the first failure: missing
    /// path, nonexistent entry, directory, size policy, then I/O and
    /// matching. At most `table.max_prefix_len()` bytes are read.
    pub fn classify(&self, path: impl AsRef<Path>) -> Result<FileInfo> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(DetectError::MissingPath);
        }

        let meta = self.fs.stat(path).map_err(|source| DetectError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        if meta.is_dir {
            return Err(DetectError::Directory(path.to_path_buf()));
        }

        let size = meta.len;
        self.size_policy
            .check(path, size, self.table.min_window_len())?;

        let max = self.table.max_prefix_len();
        let read_len = usize::try_from(size).map_or(max, |size| size.min(max));

        let prefix = {
            let mut reader = self.fs.open(path)?;
            read_prefix(&mut reader, read_len)?
        };

        match self.table.lookup(&prefix) {
            Some(record) => {
                tracing::debug!(
                    path = %path.display(),
                    size,
                    read_len,
                    description = record.description(),
                    "classified file"
                );
                Ok(FileInfo::new(path, record, size))
            }
            None => {
                tracing::debug!(path = %path.display(), size, read_len, "no signature matched");
                Err(DetectError::UnknownType(path.to_path_buf()))
            }
        }
    }
}

/// Reads exactly `len` bytes from the start of `reader`.
///
/// Partial reads are retried until the buffer is full. Hitting end of
/// stream first is reported as [`io::ErrorKind::UnexpectedEof`], so a
/// file that shrank after it was stat'ed is never matched on a truncated
/// prefix.
pub(crate) fn read_prefix<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    let mut filled = 0;
    while filled < len {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("short read: got {filled} of {len} bytes"),
                ));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(buf)
}
