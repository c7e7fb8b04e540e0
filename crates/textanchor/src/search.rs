//! Pattern search over document lines.
//!
//! Queries match anchors whole-line and case-insensitively, so the usual
//! workflow is to search first (find the exact line text to anchor on),
//! then write the query against it.

use regex::Regex;

use crate::document::Document;
use crate::geometry::Polygon;

/// Options controlling line search behavior.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Whether to interpret the pattern as a regex (default: `true`).
    /// When `false`, the pattern is treated as a literal string.
    pub regex: bool,
    /// Whether the search is case-sensitive (default: `true`).
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            regex: true,
            case_sensitive: true,
        }
    }
}

/// A line whose text matched a search pattern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineMatch {
    /// The full text of the matching line.
    pub text: String,
    /// The line's boundary quadrilateral.
    pub bounding_polygon: Polygon,
    /// Page number (0-indexed).
    pub page_number: usize,
    /// Index of the line within its page.
    pub line_index: usize,
}

/// Find every line whose text contains a match for `pattern`, in document
/// order.
///
/// Matching is per line; patterns never span lines. Returns an empty vector
/// if the pattern is empty or not a valid regex.
pub fn find_lines(document: &Document, pattern: &str, options: &SearchOptions) -> Vec<LineMatch> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let regex_pattern = if options.regex {
        if options.case_sensitive {
            pattern.to_string()
        } else {
            format!("(?i){pattern}")
        }
    } else {
        let escaped = regex::escape(pattern);
        if options.case_sensitive {
            escaped
        } else {
            format!("(?i){escaped}")
        }
    };

    let re = match Regex::new(&regex_pattern) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut results = Vec::new();
    for (page_number, page) in document.pages.iter().enumerate() {
        for (line_index, line) in page.lines.iter().enumerate() {
            if re.is_match(&line.text) {
                results.push(LineMatch {
                    text: line.text.clone(),
                    bounding_polygon: line.bounding_polygon,
                    page_number,
                    line_index,
                });
            }
        }
    }
    results
}
