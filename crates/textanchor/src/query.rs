//! Query model: the raw wire shape and its validated, typed form.
//!
//! Queries arrive as loosely-typed JSON ([`RawQuery`]); validation turns
//! them into a [`Query`] or reports exactly which rule broke. Validation
//! order is fixed so a query with several problems always reports the same
//! error.

use crate::error::ExtractError;
use crate::geometry::{Direction, HorizontalDirection};

/// Which ranked candidate a row query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tiebreaker {
    /// The candidate nearest the anchor.
    First,
    /// The second nearest.
    Second,
    /// The farthest.
    Last,
}

/// A validated label query: the value sits adjacent to the anchor in one of
/// four directions, lined up with the anchor's left or right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelQuery {
    /// Whole-line anchor text, matched after normalization.
    pub anchor: String,
    pub position: Direction,
    /// Which anchor edge the value lines up under or over. Only consulted
    /// for `Above` and `Below` positions.
    pub text_alignment: HorizontalDirection,
    /// Accepted on the wire for existing stored queries; not yet interpreted.
    pub multiline: bool,
}

/// A validated row query: the value shares a row with the anchor, picked by
/// rank among the candidates on one side.
#[derive(Debug, Clone, PartialEq)]
pub struct RowQuery {
    /// Whole-line anchor text, matched after normalization.
    pub anchor: String,
    pub position: HorizontalDirection,
    pub tiebreaker: Tiebreaker,
}

/// A validated query of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Label(LabelQuery),
    Row(RowQuery),
}

impl Query {
    /// The anchor text the query searches for.
    pub fn anchor(&self) -> &str {
        match self {
            Query::Label(query) => &query.anchor,
            Query::Row(query) => &query.anchor,
        }
    }
}

/// The unvalidated wire form of a query.
///
/// Every kind-specific field is optional here; [`validate`](Self::validate)
/// decides which ones the named kind requires. Unknown `id` values are
/// reported before any other field is looked at.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RawQuery {
    pub id: String,
    pub anchor: String,
    pub position: Option<String>,
    pub text_alignment: Option<String>,
    pub tiebreaker: Option<String>,
    pub multiline: Option<bool>,
}

impl RawQuery {
    /// Check the raw fields in a fixed order and produce a typed [`Query`].
    ///
    /// Order: `id` first; for labels, `position` then `text_alignment`; for
    /// rows, `position` then `tiebreaker`. A missing field fails the same
    /// rule as an unrecognized value. Values are matched exactly, so
    /// `"Above"` is rejected where `"above"` is accepted.
    pub fn validate(&self) -> Result<Query, ExtractError> {
        match self.id.as_str() {
            "label" => {
                let position = match self.position.as_deref() {
                    Some("above") => Direction::Above,
                    Some("below") => Direction::Below,
                    Some("left") => Direction::Left,
                    Some("right") => Direction::Right,
                    _ => return Err(ExtractError::UnsupportedLabelPosition),
                };
                let text_alignment = match self.text_alignment.as_deref() {
                    Some("left") => HorizontalDirection::Left,
                    Some("right") => HorizontalDirection::Right,
                    _ => return Err(ExtractError::UnsupportedTextAlignment),
                };
                Ok(Query::Label(LabelQuery {
                    anchor: self.anchor.clone(),
                    position,
                    text_alignment,
                    multiline: self.multiline.unwrap_or(false),
                }))
            }
            "row" => {
                let position = match self.position.as_deref() {
                    Some("left") => HorizontalDirection::Left,
                    Some("right") => HorizontalDirection::Right,
                    _ => return Err(ExtractError::UnsupportedRowPosition),
                };
                let tiebreaker = match self.tiebreaker.as_deref() {
                    Some("first") => Tiebreaker::First,
                    Some("second") => Tiebreaker::Second,
                    Some("last") => Tiebreaker::Last,
                    _ => return Err(ExtractError::UnsupportedTiebreaker),
                };
                Ok(Query::Row(RowQuery {
                    anchor: self.anchor.clone(),
                    position,
                    tiebreaker,
                }))
            }
            _ => Err(ExtractError::UnsupportedId),
        }
    }
}
