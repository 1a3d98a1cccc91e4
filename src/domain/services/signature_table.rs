//! Signature table service
//!
//! Holds an immutable, ordered collection of file signatures and matches
//! byte prefixes against it.

use super::signatures::BUILTIN_SIGNATURES;
use crate::domain::entities::SignatureRecord;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<SignatureTable> =
    Lazy::new(|| SignatureTable::new(BUILTIN_SIGNATURES.to_vec()));

/// Ordered table of file signatures
///
/// Matching is first-match-wins: when several records accept the same
/// bytes, the one that appears earliest in the table is reported. The
/// table cannot be modified once built.
///
/// # Example
///
/// ```
/// use filemagic::domain::services::SignatureTable;
///
/// let table = SignatureTable::builtin();
/// let gif = b"GIF89a\x01\x00\x01\x00";
/// let record = table.lookup(gif).unwrap();
/// assert_eq!(record.description(), "GIF89a Image");
/// assert_eq!(record.extension(), Some("gif"));
/// ```
#[derive(Debug, Clone)]
pub struct SignatureTable {
    records: Vec<SignatureRecord>,
    /// Largest `offset + len(signature)` over all records
    max_prefix_len: usize,
    /// Smallest `offset + len(signature)` over all records
    min_window_len: usize,
}

impl SignatureTable {
    /// Builds a table, keeping `records` in the given order
    pub fn new(records: Vec<SignatureRecord>) -> Self {
        let max_prefix_len = records.iter().map(SignatureRecord::window).max().unwrap_or(0);
        let min_window_len = records.iter().map(SignatureRecord::window).min().unwrap_or(0);
        Self {
            records,
            max_prefix_len,
            min_window_len,
        }
    }

    /// Returns the process-wide built-in table, building it on first use
    pub fn builtin() -> &'static SignatureTable {
        &BUILTIN
    }

    /// Number of bytes that must be read from a file to test every record
    pub fn max_prefix_len(&self) -> usize {
        self.max_prefix_len
    }

    /// Number of bytes needed by the least demanding record.
    ///
    /// Backs [`SizePolicy::ShortestSignature`](super::SizePolicy::ShortestSignature).
    pub fn min_window_len(&self) -> usize {
        self.min_window_len
    }

    /// Returns the records in table order
    pub fn records(&self) -> &[SignatureRecord] {
        &self.records
    }

    /// Returns an iterator over the records in table order
    pub fn iter(&self) -> std::slice::Iter<'_, SignatureRecord> {
        self.records.iter()
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the first record, in table order, whose signature appears
    /// in `data` at the record's offset.
    ///
    /// Records that need more bytes than `data` holds are skipped.
    pub fn lookup(&self, data: &[u8]) -> Option<&SignatureRecord> {
        let found = self.records.iter().find(|record| record.matches(data));
        if let Some(record) = found {
            tracing::trace!(
                description = record.description(),
                offset = record.offset(),
                "signature matched"
            );
        }
        found
    }
}

impl<'a> IntoIterator for &'a SignatureTable {
    type Item = &'a SignatureRecord;
    type IntoIter = std::slice::Iter<'a, SignatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
