//! Domain layer - Core business logic
//!
//! Entities, repository traits and services for signature matching. Nothing
//! in here touches the real file system.

pub mod entities;
pub mod repositories;
pub mod services;
