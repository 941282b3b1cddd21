//! Error types for chapters

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the chapters tool
#[derive(Debug, Error)]
pub enum ChaptersError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a Markdown file: {0}")]
    NotMarkdown(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {total} document(s) failed")]
    DocumentsFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChaptersError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChaptersError::DirectoryNotFound(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChaptersError::DirectoryNotFound(path) => {
                format!(
                    "Directory not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --dir\n\
                    • Run chapters without --dir to scan the current directory",
                    path.display()
                )
            }
            ChaptersError::NotMarkdown(path) => {
                format!(
                    "Not a Markdown file: {}\n\n\
                    Only files with the .md extension are processed.",
                    path.display()
                )
            }
            ChaptersError::DocumentsFailed { .. } => {
                format!(
                    "{}\n\n\
                    Failed documents were left unchanged; see the messages above.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChaptersError
pub type Result<T> = std::result::Result<T, ChaptersError>;
