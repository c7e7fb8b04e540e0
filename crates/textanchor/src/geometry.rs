//! Quadrilateral geometry for OCR line boundaries.
//!
//! Coordinates use document space: `x` grows rightward, `y` grows downward,
//! so a smaller `y` is higher on the page.

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The four-corner boundary of a recognized line.
///
/// Corners arrive in fixed winding order:
/// - `0`: top-left
/// - `1`: top-right
/// - `2`: bottom-right
/// - `3`: bottom-left
///
/// The winding order is a precondition on every constructed value; it is
/// never re-derived from the coordinates. OCR quadrilaterals are often
/// slightly skewed, so each edge accessor takes the min or max of the two
/// corners on that side rather than trusting a single corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon(pub [Point; 4]);

impl Polygon {
    /// Leftmost extent: the smaller `x` of the top-left and bottom-left corners.
    pub fn left(&self) -> f64 {
        self.0[0].x.min(self.0[3].x)
    }

    /// Rightmost extent: the larger `x` of the top-right and bottom-right corners.
    pub fn right(&self) -> f64 {
        self.0[1].x.max(self.0[2].x)
    }

    /// Topmost extent: the smaller `y` of the two top corners.
    pub fn top(&self) -> f64 {
        self.0[0].y.min(self.0[1].y)
    }

    /// Bottommost extent: the larger `y` of the two bottom corners.
    pub fn bottom(&self) -> f64 {
        self.0[2].y.max(self.0[3].y)
    }

    /// The anchor-side edge the relationship is measured from.
    ///
    /// Looking for a value below the anchor measures from the anchor's
    /// bottom; to the right of it, from the anchor's right, and so on.
    pub fn anchor_edge(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Above => self.top(),
            Direction::Below => self.bottom(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// The candidate-side edge facing the anchor: the opposite sense of
    /// [`anchor_edge`](Self::anchor_edge).
    ///
    /// A candidate below the anchor faces it with its top; a candidate to
    /// the right faces it with its left, and so on.
    pub fn adjacent_edge(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Above => self.bottom(),
            Direction::Below => self.top(),
            Direction::Left => self.right(),
            Direction::Right => self.left(),
        }
    }

    /// Whether `x` falls within the horizontal extent, boundaries included.
    pub fn contains_x(&self, x: f64) -> bool {
        self.left() <= x && x <= self.right()
    }
}

/// The four directions a value can sit in relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

/// Horizontal subset of [`Direction`], used for row positions and label
/// text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl From<HorizontalDirection> for Direction {
    fn from(direction: HorizontalDirection) -> Self {
        match direction {
            HorizontalDirection::Left => Direction::Left,
            HorizontalDirection::Right => Direction::Right,
        }
    }
}

/// Whether a candidate edge lies on the query's side of the anchor edge.
///
/// Boundary inclusive: a candidate whose facing edge touches the anchor's
/// edge exactly is on the target side.
pub fn is_on_target_side(candidate_edge: f64, anchor_edge: f64, direction: Direction) -> bool {
    match direction {
        Direction::Below | Direction::Right => candidate_edge >= anchor_edge,
        Direction::Above | Direction::Left => candidate_edge <= anchor_edge,
    }
}

/// Whether `edge` is strictly nearer the anchor than `than`, both taken from
/// the candidate side.
///
/// Below and right of the anchor, smaller coordinates are nearer; above and
/// left, larger ones are. Equal edges are never "closer", so ties leave an
/// existing rank holder in place.
pub fn is_closer(edge: f64, than: f64, direction: Direction) -> bool {
    match direction {
        Direction::Below | Direction::Right => edge < than,
        Direction::Above | Direction::Left => edge > than,
    }
}

/// Whether a candidate shares a row with the anchor.
///
/// Matches when the candidate's top or bottom edge falls inside the anchor's
/// vertical span, boundaries included. The test is edge-based, not
/// interval-overlap: a candidate strictly taller than the anchor, with both
/// edges clear of the span, does not match.
pub fn edge_in_vertical_span(candidate: &Polygon, anchor: &Polygon) -> bool {
    let top = anchor.top();
    let bottom = anchor.bottom();
    let candidate_top = candidate.top();
    let candidate_bottom = candidate.bottom();
    (candidate_top >= top && candidate_top <= bottom)
        || (candidate_bottom >= top && candidate_bottom <= bottom)
}
