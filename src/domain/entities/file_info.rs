//! Classified file entity
//!
//! The result of a successful classification.

use super::file_signature::SignatureRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file whose type has been identified from its magic bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// The path that was classified, as supplied by the caller
    name: PathBuf,
    /// Description of the matched file type
    description: String,
    /// Known extensions for the matched type, canonical one first
    extensions: Vec<String>,
    /// Size of the file in bytes
    size: u64,
}

impl FileInfo {
    /// Creates a new file info from the record that matched
    pub fn new(name: impl Into<PathBuf>, record: &SignatureRecord, size: u64) -> Self {
        Self {
            name: name.into(),
            description: record.description().to_string(),
            extensions: record.extensions().iter().map(|e| e.to_string()).collect(),
            size,
        }
    }

    /// Returns the path that was classified
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Returns the matched type's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns every known extension, canonical one first
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns the canonical extension
    pub fn extension(&self) -> Option<&str> {
        self.extensions.first().map(String::as_str)
    }

    /// Returns the file size in bytes at classification time
    pub fn size(&self) -> u64 {
        self.size
    }
}
