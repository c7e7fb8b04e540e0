//! Anchor occurrence index: normalized line text to document positions.

use std::collections::HashMap;

use crate::document::Document;

/// Normalize text for anchor comparison: strip surrounding whitespace and
/// lowercase the remainder.
///
/// Applied to every document line at index build and to every query anchor
/// at lookup, so the two sides always compare under the same rules.
pub fn normalize_anchor(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Position of one anchor occurrence: indices into the document's pages and
/// into that page's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorEntry {
    pub page: usize,
    pub line: usize,
}

/// Index from normalized line text to every occurrence in one document.
///
/// Built in a single pass; the entries for a given text keep document order
/// (page, then line within the page). Entries index into the document the
/// index was built from and are only meaningful against it.
#[derive(Debug, Clone, Default)]
pub struct AnchorIndex {
    entries: HashMap<String, Vec<AnchorEntry>>,
}

impl AnchorIndex {
    /// Build the index over every line of `document`.
    pub fn build(document: &Document) -> Self {
        let mut entries: HashMap<String, Vec<AnchorEntry>> = HashMap::new();
        for (page, p) in document.pages.iter().enumerate() {
            for (line, l) in p.lines.iter().enumerate() {
                entries
                    .entry(normalize_anchor(&l.text))
                    .or_default()
                    .push(AnchorEntry { page, line });
            }
        }
        Self { entries }
    }

    /// Every occurrence of `anchor` in document order, or an empty slice
    /// when the text appears nowhere.
    pub fn lookup(&self, anchor: &str) -> &[AnchorEntry] {
        self.entries
            .get(&normalize_anchor(anchor))
            .map(|occurrences| occurrences.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct normalized texts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(normalized_text, occurrence_count)` pairs, in
    /// arbitrary order.
    pub fn anchors(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(text, occurrences)| (text.as_str(), occurrences.len()))
    }
}
