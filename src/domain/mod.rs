//! Domain layer - Chapter extraction rules

pub mod chapters;

pub use chapters::{ChapterList, Heading, MarkerSource};
