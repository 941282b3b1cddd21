//! Infrastructure layer - External I/O and persistence

pub mod repository;

pub use repository::{DocumentRepository, FileSystemRepository};
