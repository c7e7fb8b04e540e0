//! Error type for query validation and extraction.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Display strings are
//! part of the wire contract with callers and existing stored queries, so
//! they must not be reworded.

use thiserror::Error;

/// Errors produced while validating or running a query.
///
/// Every variant is terminal for the call that raised it; extraction never
/// returns partial results alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No line in the document equals the query anchor after normalization.
    #[error("Anchor text not found")]
    AnchorNotFound,

    /// Every anchor occurrence was scanned and none held a candidate at the
    /// requested rank.
    #[error("No match found for the requested anchor and position")]
    NoMatchFound,

    /// The query `id` named neither of the two query kinds.
    #[error("ID must be of type 'label' or 'row'")]
    UnsupportedId,

    /// A label query carried a position outside the four directions.
    #[error("Position for label type must be 'above', 'below', 'left', or 'right'")]
    UnsupportedLabelPosition,

    /// A row query carried a position outside the two horizontal directions.
    #[error("Position for row type must be 'left' or 'right'")]
    UnsupportedRowPosition,

    /// A label query carried an alignment other than left or right.
    #[error("Text alignment must be 'left', or 'right'")]
    UnsupportedTextAlignment,

    /// A row query carried a tiebreaker outside first, second, and last.
    #[error("Tiebreaker must be 'first', 'second', or 'last'")]
    UnsupportedTiebreaker,
}
