//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories.

pub mod file_systems;
