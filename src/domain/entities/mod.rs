//! Domain entities
//!
//! Core value objects of file type identification.

mod file_info;
mod file_signature;

pub use file_info::FileInfo;
pub use file_signature::SignatureRecord;
