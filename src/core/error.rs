use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`DetectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No path was supplied.
    InvalidArgument,
    /// The path could not be resolved to a filesystem entry.
    NotFound,
    /// The path resolves to something that cannot be classified (a directory).
    InvalidTarget,
    /// The file is empty, or smaller than the configured minimum.
    EmptyFile,
    /// Opening or reading the file failed.
    IoError,
    /// The file was read but no signature matched.
    UnknownType,
}

/// Errors that can occur when classifying a file
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("File name not supplied")]
    MissingPath,

    #[error("File does not exist")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory")]
    Directory(PathBuf),

    #[error("Empty file")]
    Empty(PathBuf),

    #[error("File too small to test")]
    TooSmall { size: u64, minimum: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown file type")]
    UnknownType(PathBuf),
}

impl DetectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DetectError::MissingPath => ErrorKind::InvalidArgument,
            DetectError::NotFound { .. } => ErrorKind::NotFound,
            DetectError::Directory(_) => ErrorKind::InvalidTarget,
            DetectError::Empty(_) | DetectError::TooSmall { .. } => ErrorKind::EmptyFile,
            DetectError::Io(_) => ErrorKind::IoError,
            DetectError::UnknownType(_) => ErrorKind::UnknownType,
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;
