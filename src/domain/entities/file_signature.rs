//! File signature entity
//!
//! Represents the magic bytes that identify a file type, together with
//! the fixed offset at which they must appear.

use std::fmt;

/// A file signature: magic bytes expected at a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRecord {
    /// Human-readable file type label
    description: &'static str,
    /// Known extensions, canonical one first
    extensions: &'static [&'static str],
    /// Offset from the start where the signature should be found
    offset: usize,
    /// The magic bytes
    signature: &'static [u8],
}

impl SignatureRecord {
    /// Creates a signature that must appear at the start of the file
    pub const fn new(
        description: &'static str,
        extensions: &'static [&'static str],
        signature: &'static [u8],
    ) -> Self {
        Self {
            description,
            extensions,
            offset: 0,
            signature,
        }
    }

    /// Moves the signature to a custom offset
    pub const fn at_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the human-readable type label
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the known extensions, canonical one first
    pub const fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Returns the canonical extension, if the record lists any
    pub fn extension(&self) -> Option<&'static str> {
        self.extensions.first().copied()
    }

    /// Returns the byte offset the signature must start at
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the magic bytes
    pub const fn signature(&self) -> &'static [u8] {
        self.signature
    }

    /// Number of leading bytes needed before this record can be tested.
    ///
    /// Saturates instead of wrapping, so an absurd offset can never appear
    /// to fit inside a real buffer.
    pub const fn window(&self) -> usize {
        self.offset.saturating_add(self.signature.len())
    }

    /// Checks if `data` carries this signature at its offset.
    ///
    /// Buffers shorter than [`window`](Self::window) never match.
    pub fn matches(&self, data: &[u8]) -> bool {
        let end = self.window();
        if end > data.len() {
            return false;
        }
        &data[self.offset..end] == self.signature
    }
}

impl fmt::Display for SignatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
