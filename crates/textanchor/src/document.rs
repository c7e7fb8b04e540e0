//! The standardized document model produced by OCR post-processing.

use crate::geometry::Polygon;

/// A single recognized line: its text and the quadrilateral bounding it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Line {
    pub text: String,
    pub bounding_polygon: Polygon,
}

/// One page of recognized lines, in reading order as emitted by the OCR step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub lines: Vec<Line>,
}

/// A standardized document: ordered pages of lines.
///
/// Documents are read-only inputs to extraction; nothing in this crate
/// mutates one after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub pages: Vec<Page>,
}
