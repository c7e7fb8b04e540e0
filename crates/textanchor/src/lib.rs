//! textanchor: extract field values from standardized OCR documents by
//! their geometric relationship to anchor lines.
//!
//! A standardized document is pages of recognized lines, each bounded by a
//! four-corner quadrilateral. A query names an anchor (the exact text of
//! some line, matched case-insensitively) and a spatial relationship; the
//! extractor returns the line standing in that relationship to each
//! occurrence of the anchor.
//!
//! Two query kinds cover the common form layouts:
//! - **label**: the value sits above, below, left, or right of the anchor,
//!   lined up with one of its edges (`Weight` over `19,748lbs`).
//! - **row**: the value shares a row with the anchor, picked by rank among
//!   the candidates on one side (`Line Haul ... $1770.00`).
//!
//! # Example
//!
//! ```
//! use textanchor::{
//!     Direction, Document, HorizontalDirection, LabelQuery, Line, Page, Point, Polygon,
//!     ValueExtractor,
//! };
//!
//! fn line(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> Line {
//!     Line {
//!         text: text.to_string(),
//!         bounding_polygon: Polygon([
//!             Point { x: x0, y: top },
//!             Point { x: x1, y: top },
//!             Point { x: x1, y: bottom },
//!             Point { x: x0, y: bottom },
//!         ]),
//!     }
//! }
//!
//! let document = Document {
//!     pages: vec![Page {
//!         lines: vec![
//!             line("Total", 1.0, 1.0, 1.6, 1.2),
//!             line("$42.00", 1.0, 1.4, 1.7, 1.6),
//!         ],
//!     }],
//! };
//!
//! let extractor = ValueExtractor::new(document);
//! let values = extractor.extract_label(&LabelQuery {
//!     anchor: "total".to_string(),
//!     position: Direction::Below,
//!     text_alignment: HorizontalDirection::Left,
//!     multiline: false,
//! })?;
//! assert_eq!(values[0].value.text, "$42.00");
//! # Ok::<(), textanchor::ExtractError>(())
//! ```
//!
//! With the `serde` feature enabled, [`Document`] deserializes directly
//! from the standardized OCR JSON shape and [`RawQuery`] from the query
//! wire shape.

pub mod document;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod index;
pub mod query;
pub mod search;
pub mod select;

pub use document::{Document, Line, Page};
pub use error::ExtractError;
pub use extract::{ExtractedValue, ValueExtractor};
pub use geometry::{Direction, HorizontalDirection, Point, Polygon};
pub use index::{AnchorEntry, AnchorIndex, normalize_anchor};
pub use query::{LabelQuery, Query, RawQuery, RowQuery, Tiebreaker};
pub use search::{LineMatch, SearchOptions, find_lines};
pub use select::{CandidateRanking, rank_candidates};
