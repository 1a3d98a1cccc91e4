//! Application layer
//!
//! Use cases that orchestrate domain logic.

mod classify_file;
pub mod dto;

pub use classify_file::{ClassifyFileUseCase, classify};
