//! Detector configuration DTO

use crate::domain::services::SizePolicy;
use serde::{Deserialize, Serialize};

/// Options for classifying files
///
/// Deserialises from e.g. `{"size_policy": "non_empty"}` or
/// `{"size_policy": {"minimum_length": 8}}`; missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum file size accepted before any bytes are read
    pub size_policy: SizePolicy,
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size policy
    pub fn with_size_policy(mut self, size_policy: SizePolicy) -> Self {
        self.size_policy = size_policy;
        self
    }

    /// Rejects files shorter than 8 bytes, as early releases did
    pub fn legacy() -> Self {
        Self::new().with_size_policy(SizePolicy::legacy())
    }
}
