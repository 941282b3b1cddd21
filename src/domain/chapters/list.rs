//! Chapter list extraction and rendering

use super::heading::{parse_heading, Heading};

/// Heading line that introduces the generated block
pub const CHAPTERS_HEADING: &str = "## YouTube chapters";

/// Ordered chapter entries for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterList {
    headings: Vec<Heading>,
}

impl ChapterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, heading: Heading) {
        self.headings.push(heading);
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Chapter lines in source order
    pub fn entries(&self) -> Vec<String> {
        self.headings.iter().map(Heading::entry).collect()
    }
}

/// Scan markdown content line by line and collect second-level headings
pub fn extract_chapters(content: &str) -> ChapterList {
    let mut chapters = ChapterList::new();
    for line in content.split('\n') {
        if let Some(heading) = parse_heading(line) {
            chapters.push(heading);
        }
    }
    chapters
}

/// Render the block appended to a document.
///
/// The block starts with a blank line, so it is written directly after the
/// original content. No newline follows the last entry.
pub fn render_block(chapters: &ChapterList) -> String {
    format!(
        "\n\n{}\n\n{}",
        CHAPTERS_HEADING,
        chapters.entries().join("\n")
    )
}

/// Extract chapters from `content` and return them with the rewritten text
pub fn append_chapters(content: &str) -> (ChapterList, String) {
    let chapters = extract_chapters(content);
    let mut output = String::with_capacity(content.len() + 64);
    output.push_str(content);
    output.push_str(&render_block(&chapters));
    (chapters, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "# Title\n## Intro\ntext\n## Details (2:10)\nmore text\n";

    #[test]
    fn test_demo_document() {
        let (chapters, output) = append_chapters(DEMO);
        assert_eq!(chapters.entries(), vec!["0:00 Intro", "2:10 Details"]);
        assert_eq!(
            output,
            format!(
                "{}\n\n## YouTube chapters\n\n0:00 Intro\n2:10 Details",
                DEMO
            )
        );
    }

    #[test]
    fn test_original_content_is_prefix() {
        let content = "intro text\n## A\n### B\n## C (1:00)\n";
        let (_, output) = append_chapters(content);
        assert!(output.starts_with(content));
    }

    #[test]
    fn test_order_follows_source() {
        let content = "## Third (9:00)\n## First (0:10)\n## Second\n";
        let chapters = extract_chapters(content);
        assert_eq!(
            chapters.entries(),
            vec!["9:00 Third", "0:10 First", "0:00 Second"]
        );
    }

    #[test]
    fn test_no_headings_still_renders_header() {
        let (chapters, output) = append_chapters("just prose");
        assert!(chapters.is_empty());
        assert_eq!(output, "just prose\n\n## YouTube chapters\n\n");
    }

    #[test]
    fn test_skips_levels_and_hash_in_text() {
        let content = "# Top\n## Keep\n### Skip\n## C# Basics\n";
        let chapters = extract_chapters(content);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters.entries(), vec!["0:00 Keep"]);
    }

    #[test]
    fn test_second_run_appends_second_block() {
        let (_, once) = append_chapters(DEMO);
        let (chapters, twice) = append_chapters(&once);

        assert!(twice.starts_with(&once));
        assert_eq!(twice.matches(CHAPTERS_HEADING).count(), 2);
        // The first block's heading is picked up as a chapter on the rerun.
        assert_eq!(
            chapters.entries(),
            vec!["0:00 Intro", "2:10 Details", "0:00 YouTube chapters"]
        );
    }

    #[test]
    fn test_crlf_content() {
        let chapters = extract_chapters("## One\r\n## Two (0:42)\r\n");
        assert_eq!(chapters.entries(), vec!["0:00 One", "0:42 Two"]);
    }
}
