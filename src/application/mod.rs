//! Application layer - Use cases and orchestration

pub mod generate_chapters;

pub use generate_chapters::{
    DocumentOutcome, GenerateChaptersService, GenerateOptions, RunReport,
};
