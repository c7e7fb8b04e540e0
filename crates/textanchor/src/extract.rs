//! The extraction engine: owns a document and its anchor index, answers
//! label and row queries.

use crate::document::{Document, Line};
use crate::error::ExtractError;
use crate::index::AnchorIndex;
use crate::query::{LabelQuery, Query, RawQuery, RowQuery, Tiebreaker};
use crate::select::rank_candidates;

/// One extracted value: the anchor occurrence that produced it and the line
/// selected as its value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedValue {
    pub anchor: Line,
    pub value: Line,
}

/// Extraction engine over one standardized document.
///
/// Construction walks the document once to build the anchor index. Queries
/// take `&self` and mutate nothing, so one extractor can serve any number
/// of threads at once.
pub struct ValueExtractor {
    document: Document,
    index: AnchorIndex,
}

impl ValueExtractor {
    /// Build an extractor over `document`, indexing every line.
    pub fn new(document: Document) -> Self {
        let index = AnchorIndex::build(&document);
        Self { document, index }
    }

    /// The document this extractor answers queries about.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The anchor index built at construction.
    pub fn index(&self) -> &AnchorIndex {
        &self.index
    }

    /// Validate `raw` and run the resulting query.
    pub fn extract_value(&self, raw: &RawQuery) -> Result<Vec<ExtractedValue>, ExtractError> {
        self.extract(&raw.validate()?)
    }

    /// Run a validated query.
    ///
    /// Every occurrence of the anchor is scanned independently against its
    /// own page; an occurrence whose ranking has no candidate at the
    /// requested rank contributes nothing. Results keep occurrence order
    /// (page, then line within the page). An unknown anchor raises
    /// [`ExtractError::AnchorNotFound`]; occurrences that all come up empty
    /// raise [`ExtractError::NoMatchFound`].
    pub fn extract(&self, query: &Query) -> Result<Vec<ExtractedValue>, ExtractError> {
        let occurrences = self.index.lookup(query.anchor());
        if occurrences.is_empty() {
            return Err(ExtractError::AnchorNotFound);
        }

        // Labels name the line adjacent to the anchor; only rows rank deeper.
        let tiebreaker = match query {
            Query::Label(_) => Tiebreaker::First,
            Query::Row(row) => row.tiebreaker,
        };

        let mut values = Vec::new();
        for entry in occurrences {
            let page = &self.document.pages[entry.page];
            let anchor = &page.lines[entry.line];
            let ranking = rank_candidates(&page.lines, anchor, query);
            if let Some(line) = ranking.pick(tiebreaker) {
                values.push(ExtractedValue {
                    anchor: anchor.clone(),
                    value: line.clone(),
                });
            }
        }

        if values.is_empty() {
            return Err(ExtractError::NoMatchFound);
        }
        Ok(values)
    }

    /// Run a label query.
    pub fn extract_label(&self, query: &LabelQuery) -> Result<Vec<ExtractedValue>, ExtractError> {
        self.extract(&Query::Label(query.clone()))
    }

    /// Run a row query.
    pub fn extract_row(&self, query: &RowQuery) -> Result<Vec<ExtractedValue>, ExtractError> {
        self.extract(&Query::Row(query.clone()))
    }
}
