//! Output formatting utilities

use crate::application::{DocumentOutcome, RunReport};
use std::path::Path;

fn chapter_count(chapters: usize) -> String {
    if chapters == 1 {
        "1 chapter".to_string()
    } else {
        format!("{} chapters", chapters)
    }
}

/// Format the status line for one document
pub fn format_outcome(path: &Path, outcome: &DocumentOutcome) -> String {
    match outcome {
        DocumentOutcome::Updated { chapters } => {
            format!("updated {} ({})", path.display(), chapter_count(*chapters))
        }
        DocumentOutcome::Preview { chapters, block } => {
            format!(
                "would update {} ({}):{}\n",
                path.display(),
                chapter_count(*chapters),
                block
            )
        }
        DocumentOutcome::Failed(e) => format!("failed {}: {}", path.display(), e),
    }
}

/// Format the closing summary of a run
pub fn format_summary(report: &RunReport) -> String {
    if report.total() == 0 {
        return "No Markdown files found".to_string();
    }

    format!(
        "Processed {} document(s), {} failed",
        report.total(),
        report.failed()
    )
}
