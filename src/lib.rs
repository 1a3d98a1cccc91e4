//! Identify file types from the magic bytes at the start of a file.
//!
//! ```no_run
//! let info = filemagic::classify("archive.bin")?;
//! println!("{} ({:?})", info.description(), info.extension());
//! # Ok::<(), filemagic::DetectError>(())
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use application::dto::DetectorConfig;
pub use application::{ClassifyFileUseCase, classify};
pub use crate::core::{DetectError, ErrorKind, Result};
pub use domain::entities::{FileInfo, SignatureRecord};
pub use domain::repositories::{EntryMetadata, FileSystem};
pub use domain::services::{Detector, SignatureTable, SizePolicy};
pub use infrastructure::file_systems::LocalFileSystem;
