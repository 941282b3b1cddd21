//! Heading parsing for chapter extraction

use regex::Regex;
use std::sync::OnceLock;

/// Marker used when a heading carries no parenthetical timestamp
pub const DEFAULT_MARKER: &str = "0:00";

/// Regex for timestamp-shaped markers: m:ss, mm:ss, h:mm:ss
fn timestamp_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{1,2}:\d{2}(:\d{2})?$").unwrap())
}

/// Where a heading's marker came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSource {
    /// Text between the first `(` and the first `)`
    Parenthetical,
    /// No parentheses on the line
    Default,
    /// Parentheses present but out of order or unbalanced; default marker used
    Malformed,
}

/// A second-level heading turned into a chapter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub raw_line: String,
    pub marker: String,
    pub label: String,
    pub marker_source: MarkerSource,
}

impl Heading {
    /// The chapter line: `marker label`
    pub fn entry(&self) -> String {
        format!("{} {}", self.marker, self.label)
    }

    /// Whether the marker looks like a video timestamp
    pub fn has_timestamp_marker(&self) -> bool {
        timestamp_regex().is_match(&self.marker)
    }
}

/// Parse one line into a heading.
///
/// A line qualifies only if it starts with `#` and contains exactly two `#`
/// characters anywhere. `## C# Basics` therefore does not qualify.
pub fn parse_heading(line: &str) -> Option<Heading> {
    if !line.starts_with('#') {
        return None;
    }
    if line.bytes().filter(|b| *b == b'#').count() != 2 {
        return None;
    }

    let open = line.find('(');
    let close = line.find(')');

    let (marker, marker_source) = match (open, close) {
        (Some(o), Some(c)) if c > o => (line[o + 1..c].to_string(), MarkerSource::Parenthetical),
        (None, None) => (DEFAULT_MARKER.to_string(), MarkerSource::Default),
        _ => (DEFAULT_MARKER.to_string(), MarkerSource::Malformed),
    };

    let head = match open {
        Some(o) => &line[..o],
        None => line,
    };
    let label = head.replace('#', "").trim().to_string();

    Some(Heading {
        raw_line: line.to_string(),
        marker,
        label,
        marker_source,
    })
}
