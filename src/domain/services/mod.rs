//! Domain services
//!
//! Signature matching and file classification.

mod detector;
mod signature_table;
mod signatures;

pub use detector::{Detector, SizePolicy};
pub use signature_table::SignatureTable;
