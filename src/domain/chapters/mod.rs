//! YouTube chapter extraction from markdown headings

pub mod heading;
pub mod list;

pub use heading::{parse_heading, Heading, MarkerSource, DEFAULT_MARKER};
pub use list::{append_chapters, extract_chapters, render_block, ChapterList, CHAPTERS_HEADING};
