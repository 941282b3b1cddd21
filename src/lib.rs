//! chapters - YouTube chapter lists from markdown headings
//!
//! Scans markdown documents for second-level headings and appends a
//! "YouTube chapters" section listing a timestamp and label for each one.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChaptersError;
