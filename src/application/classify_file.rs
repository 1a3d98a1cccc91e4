//! Classify file use case
//!
//! Wires the detector to the local file system and the built-in table.

use crate::application::dto::DetectorConfig;
use crate::core::error::Result;
use crate::domain::entities::FileInfo;
use crate::domain::services::{Detector, SignatureTable};
use crate::infrastructure::file_systems::LocalFileSystem;
use once_cell::sync::Lazy;
use std::path::Path;

static DEFAULT: Lazy<ClassifyFileUseCase> = Lazy::new(ClassifyFileUseCase::default);

/// Classify file use case
///
/// Identifies files on the local file system using the built-in
/// signature table.
#[derive(Debug, Clone)]
pub struct ClassifyFileUseCase {
    detector: Detector<'static, LocalFileSystem>,
}

impl ClassifyFileUseCase {
    /// Creates the use case with the given options
    pub fn new(config: DetectorConfig) -> Self {
        Self::with_table(SignatureTable::builtin(), config)
    }

    /// Creates the use case over a caller-supplied table
    pub fn with_table(table: &'static SignatureTable, config: DetectorConfig) -> Self {
        let detector = Detector::new(table, LocalFileSystem).with_size_policy(config.size_policy);
        Self { detector }
    }

    /// Executes the classification for one path
    pub fn execute(&self, path: impl AsRef<Path>) -> Result<FileInfo> {
        self.detector.classify(path)
    }

    pub fn detector(&self) -> &Detector<'static, LocalFileSystem> {
        &self.detector
    }
}

impl Default for ClassifyFileUseCase {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

/// Identifies the file at `path` with the built-in table and default
/// options.
///
/// # Example
///
/// ```no_run
/// match filemagic::classify("picture.gif") {
///     Ok(info) => println!("{}: {}", info.name().display(), info.description()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn classify(path: impl AsRef<Path>) -> Result<FileInfo> {
    DEFAULT.execute(path)
}
