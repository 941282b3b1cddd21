//! Generate chapters use case
//!
//! Runs the read, extract, append, write cycle over every selected document,
//! isolating per-document failures so the rest of the batch still runs.

use crate::domain::chapters::{append_chapters, render_block, ChapterList, MarkerSource};
use crate::error::{ChaptersError, Result};
use crate::infrastructure::{DocumentRepository, FileSystemRepository};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

/// Options for a chapter generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit documents to process (empty = discover markdown files)
    pub paths: Vec<PathBuf>,

    /// Descend into subdirectories during discovery
    pub recursive: bool,

    /// Compute the chapter block without writing it
    pub dry_run: bool,
}

/// What happened to one document
#[derive(Debug)]
pub enum DocumentOutcome {
    /// Chapter block appended and written back
    Updated { chapters: usize },

    /// Dry run: the block that would have been appended
    Preview { chapters: usize, block: String },

    /// Read, write or validation failed; document left untouched
    Failed(ChaptersError),
}

impl DocumentOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, DocumentOutcome::Failed(_))
    }
}

/// Per-document results of a run, in processing order
#[derive(Debug, Default)]
pub struct RunReport {
    pub documents: Vec<(PathBuf, DocumentOutcome)>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.documents.len()
    }

    pub fn failed(&self) -> usize {
        self.documents
            .iter()
            .filter(|(_, outcome)| outcome.is_failure())
            .count()
    }

    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Turn a report with failures into the batch-level error
    pub fn into_result(self) -> Result<RunReport> {
        if self.has_failures() {
            return Err(ChaptersError::DocumentsFailed {
                failed: self.failed(),
                total: self.total(),
            });
        }
        Ok(self)
    }
}

/// Service for appending chapter lists to markdown documents
pub struct GenerateChaptersService<R: DocumentRepository = FileSystemRepository> {
    repository: R,
}

impl<R: DocumentRepository> GenerateChaptersService<R> {
    /// Create new generate chapters service
    pub fn new(repository: R) -> Self {
        GenerateChaptersService { repository }
    }

    /// Execute the run.
    ///
    /// # Errors
    ///
    /// Only discovery failures abort the run. Per-document failures are
    /// recorded in the returned report.
    pub fn execute(&self, options: &GenerateOptions) -> Result<RunReport> {
        let documents = if options.paths.is_empty() {
            self.repository.discover_documents(options.recursive)?
        } else {
            options.paths.clone()
        };

        if documents.is_empty() {
            info!(
                "No markdown files found in {}",
                self.repository.root().display()
            );
        }

        let mut report = RunReport::default();
        for path in documents {
            let outcome = match self.process_document(&path, options.dry_run) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                    DocumentOutcome::Failed(e)
                }
            };
            report.documents.push((path, outcome));
        }

        Ok(report)
    }

    /// Process a single document
    pub fn process_document(&self, path: &Path, dry_run: bool) -> Result<DocumentOutcome> {
        if !FileSystemRepository::is_markdown(path) {
            return Err(ChaptersError::NotMarkdown(path.to_path_buf()));
        }

        let content = self.repository.read_document(path)?;
        let (chapters, output) = append_chapters(&content);
        warn_about_markers(path, &chapters);

        if dry_run {
            debug!("Dry run, not writing {}", path.display());
            return Ok(DocumentOutcome::Preview {
                chapters: chapters.len(),
                block: render_block(&chapters),
            });
        }

        self.repository.write_document(path, &output)?;
        info!(
            "Appended {} chapter(s) to {}",
            chapters.len(),
            path.display()
        );
        Ok(DocumentOutcome::Updated {
            chapters: chapters.len(),
        })
    }
}

fn warn_about_markers(path: &Path, chapters: &ChapterList) {
    for heading in chapters.headings() {
        match heading.marker_source {
            MarkerSource::Malformed => warn!(
                "{}: unbalanced parentheses in '{}', using default marker",
                path.display(),
                heading.raw_line.trim_end()
            ),
            MarkerSource::Parenthetical if !heading.has_timestamp_marker() => warn!(
                "{}: marker '{}' in '{}' is not a timestamp",
                path.display(),
                heading.marker,
                heading.raw_line.trim_end()
            ),
            _ => {}
        }
    }
}
