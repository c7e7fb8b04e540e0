//! Bounded candidate selection: one pass over a page, three tracked ranks.

use crate::document::Line;
use crate::geometry::{
    Direction, HorizontalDirection, edge_in_vertical_span, is_closer, is_on_target_side,
};
use crate::query::{Query, Tiebreaker};

/// One candidate under consideration: the line and its facing edge.
#[derive(Debug, Clone, Copy)]
struct Candidate<'d> {
    line: &'d Line,
    edge: f64,
}

/// Partial ranking of candidate lines by distance from the anchor.
///
/// Only three ranks are observable through [`Tiebreaker`], so only three are
/// stored; folding in a candidate is O(1) and no full ordering is ever
/// built. With one candidate tracked, nearest and farthest are that
/// candidate and second is unset. The outcome for distinct distances does
/// not depend on the order candidates arrive in; equal distances never
/// displace the nearest or second holder but do take over the farthest
/// slot.
#[derive(Debug, Default)]
pub struct CandidateRanking<'d> {
    nearest: Option<Candidate<'d>>,
    second: Option<Candidate<'d>>,
    farthest: Option<Candidate<'d>>,
}

impl<'d> CandidateRanking<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one candidate into the tracked ranks.
    pub fn push(&mut self, line: &'d Line, edge: f64, direction: Direction) {
        let candidate = Candidate { line, edge };

        let (Some(nearest), Some(farthest)) = (self.nearest, self.farthest) else {
            self.nearest = Some(candidate);
            self.farthest = Some(candidate);
            return;
        };

        if is_closer(edge, nearest.edge, direction) {
            self.second = Some(nearest);
            self.nearest = Some(candidate);
        } else if !is_closer(edge, farthest.edge, direction) {
            if self.second.is_none() {
                self.second = Some(candidate);
            }
            self.farthest = Some(candidate);
        } else {
            // Strictly between nearest and farthest.
            match self.second {
                Some(second) if !is_closer(edge, second.edge, direction) => {}
                _ => self.second = Some(candidate),
            }
        }
    }

    /// The line at the requested rank, or `None` when fewer candidates were
    /// seen than the rank requires.
    pub fn pick(&self, tiebreaker: Tiebreaker) -> Option<&'d Line> {
        match tiebreaker {
            Tiebreaker::First => self.nearest.map(|candidate| candidate.line),
            Tiebreaker::Second => self.second.map(|candidate| candidate.line),
            Tiebreaker::Last => self.farthest.map(|candidate| candidate.line),
        }
    }
}

/// Scan `lines` and rank every candidate on the query's side of `anchor`.
///
/// A line qualifies when its facing edge lies on the target side of the
/// anchor's edge (boundary inclusive) and it aligns with the anchor under
/// the query's rules: label queries above or below the anchor require the
/// anchor's alignment point inside the candidate's horizontal extent; every
/// horizontal position requires the candidate's top or bottom edge inside
/// the anchor's vertical span. The anchor line is not special-cased; it
/// fails the side test itself whenever its quadrilateral has positive
/// extent.
pub fn rank_candidates<'d>(lines: &'d [Line], anchor: &Line, query: &Query) -> CandidateRanking<'d> {
    let anchor_quad = &anchor.bounding_polygon;
    let direction = match query {
        Query::Label(label) => label.position,
        Query::Row(row) => row.position.into(),
    };
    let anchor_edge = anchor_quad.anchor_edge(direction);

    let mut ranking = CandidateRanking::new();
    for line in lines {
        let quad = &line.bounding_polygon;
        let edge = quad.adjacent_edge(direction);
        if !is_on_target_side(edge, anchor_edge, direction) {
            continue;
        }

        let aligned = match query {
            Query::Label(label) => match label.position {
                Direction::Above | Direction::Below => {
                    let alignment_x = match label.text_alignment {
                        HorizontalDirection::Left => anchor_quad.left(),
                        HorizontalDirection::Right => anchor_quad.right(),
                    };
                    quad.contains_x(alignment_x)
                }
                Direction::Left | Direction::Right => edge_in_vertical_span(quad, anchor_quad),
            },
            Query::Row(_) => edge_in_vertical_span(quad, anchor_quad),
        };

        if aligned {
            ranking.push(line, edge, direction);
        }
    }
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Polygon};
    use crate::query::{LabelQuery, RowQuery};

    fn make_line(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> Line {
        Line {
            text: text.to_string(),
            bounding_polygon: Polygon([
                Point { x: x0, y: top },
                Point { x: x1, y: top },
                Point { x: x1, y: bottom },
                Point { x: x0, y: bottom },
            ]),
        }
    }

    fn row_query(position: HorizontalDirection, tiebreaker: Tiebreaker) -> Query {
        Query::Row(RowQuery {
            anchor: "anchor".to_string(),
            position,
            tiebreaker,
        })
    }

    fn label_query(position: Direction, text_alignment: HorizontalDirection) -> Query {
        Query::Label(LabelQuery {
            anchor: "anchor".to_string(),
            position,
            text_alignment,
            multiline: false,
        })
    }

    // --- ranking slot tests ---

    /// Push candidates with the given facing edges (direction Below, so a
    /// smaller edge is nearer) and report the picked texts per rank.
    fn ranked(edges: &[f64]) -> (Option<String>, Option<String>, Option<String>) {
        let lines: Vec<Line> = edges
            .iter()
            .map(|&edge| make_line(&format!("at {edge}"), 0.0, edge, 1.0, edge + 0.1))
            .collect();
        let mut ranking = CandidateRanking::new();
        for (line, &edge) in lines.iter().zip(edges) {
            ranking.push(line, edge, Direction::Below);
        }
        let text = |line: Option<&Line>| line.map(|l| l.text.clone());
        (
            text(ranking.pick(Tiebreaker::First)),
            text(ranking.pick(Tiebreaker::Second)),
            text(ranking.pick(Tiebreaker::Last)),
        )
    }

    #[test]
    fn empty_ranking_picks_nothing() {
        let ranking = CandidateRanking::new();
        assert_eq!(ranking.pick(Tiebreaker::First), None);
        assert_eq!(ranking.pick(Tiebreaker::Second), None);
        assert_eq!(ranking.pick(Tiebreaker::Last), None);
    }

    #[test]
    fn single_candidate_is_both_first_and_last() {
        let (first, second, last) = ranked(&[2.0]);
        assert_eq!(first.as_deref(), Some("at 2"));
        assert_eq!(second, None);
        assert_eq!(last.as_deref(), Some("at 2"));
    }

    #[test]
    fn two_candidates_fill_every_rank() {
        let (first, second, last) = ranked(&[3.0, 1.0]);
        assert_eq!(first.as_deref(), Some("at 1"));
        assert_eq!(second.as_deref(), Some("at 3"));
        assert_eq!(last.as_deref(), Some("at 3"));
    }

    #[test]
    fn ranks_are_insensitive_to_arrival_order() {
        for edges in [
            [1.0, 3.0, 5.0],
            [1.0, 5.0, 3.0],
            [3.0, 1.0, 5.0],
            [3.0, 5.0, 1.0],
            [5.0, 1.0, 3.0],
            [5.0, 3.0, 1.0],
        ] {
            let (first, second, last) = ranked(&edges);
            assert_eq!(first.as_deref(), Some("at 1"), "order {edges:?}");
            assert_eq!(second.as_deref(), Some("at 3"), "order {edges:?}");
            assert_eq!(last.as_deref(), Some("at 5"), "order {edges:?}");
        }
    }

    #[test]
    fn mid_distance_candidate_replaces_second_only_when_nearer() {
        // 4 sits between second (2) and farthest (5): discarded.
        let (first, second, last) = ranked(&[1.0, 2.0, 5.0, 4.0]);
        assert_eq!(first.as_deref(), Some("at 1"));
        assert_eq!(second.as_deref(), Some("at 2"));
        assert_eq!(last.as_deref(), Some("at 5"));

        // 2 sits between nearest (1) and second (4): takes the second slot.
        let (first, second, last) = ranked(&[1.0, 4.0, 2.0]);
        assert_eq!(first.as_deref(), Some("at 1"));
        assert_eq!(second.as_deref(), Some("at 2"));
        assert_eq!(last.as_deref(), Some("at 4"));
    }

    #[test]
    fn equal_distances_keep_the_incumbent_nearest() {
        let lines = [
            make_line("first seen", 0.0, 2.0, 1.0, 2.1),
            make_line("second seen", 2.0, 2.0, 3.0, 2.1),
        ];
        let mut ranking = CandidateRanking::new();
        ranking.push(&lines[0], 2.0, Direction::Below);
        ranking.push(&lines[1], 2.0, Direction::Below);
        assert_eq!(ranking.pick(Tiebreaker::First).map(|l| &l.text[..]), Some("first seen"));
        assert_eq!(ranking.pick(Tiebreaker::Second).map(|l| &l.text[..]), Some("second seen"));
        assert_eq!(ranking.pick(Tiebreaker::Last).map(|l| &l.text[..]), Some("second seen"));
    }

    #[test]
    fn ranking_respects_direction_sense() {
        // Left of the anchor, a larger facing edge is nearer.
        let lines = [
            make_line("far", 0.5, 2.0, 1.0, 2.1),
            make_line("near", 2.0, 2.0, 2.5, 2.1),
        ];
        let mut ranking = CandidateRanking::new();
        ranking.push(&lines[0], 1.0, Direction::Left);
        ranking.push(&lines[1], 2.5, Direction::Left);
        assert_eq!(ranking.pick(Tiebreaker::First).map(|l| &l.text[..]), Some("near"));
        assert_eq!(ranking.pick(Tiebreaker::Last).map(|l| &l.text[..]), Some("far"));
    }

    // --- page scan tests ---

    #[test]
    fn scan_keeps_only_the_target_side() {
        let lines = vec![
            make_line("anchor", 2.0, 5.0, 3.0, 5.2),
            make_line("right of anchor", 3.5, 5.0, 4.5, 5.2),
            make_line("left of anchor", 0.5, 5.0, 1.5, 5.2),
        ];
        let query = row_query(HorizontalDirection::Right, Tiebreaker::First);
        let ranking = rank_candidates(&lines, &lines[0], &query);
        assert_eq!(
            ranking.pick(Tiebreaker::First).map(|l| &l.text[..]),
            Some("right of anchor")
        );
        assert_eq!(
            ranking.pick(Tiebreaker::Last).map(|l| &l.text[..]),
            Some("right of anchor")
        );
        assert_eq!(ranking.pick(Tiebreaker::Second), None);
    }

    #[test]
    fn scan_never_ranks_the_anchor_line() {
        let lines = vec![make_line("anchor", 2.0, 5.0, 3.0, 5.2)];
        for query in [
            label_query(Direction::Above, HorizontalDirection::Left),
            label_query(Direction::Below, HorizontalDirection::Left),
            label_query(Direction::Left, HorizontalDirection::Left),
            label_query(Direction::Right, HorizontalDirection::Left),
        ] {
            let ranking = rank_candidates(&lines, &lines[0], &query);
            assert_eq!(ranking.pick(Tiebreaker::First), None);
        }
    }

    #[test]
    fn touching_edges_count_as_the_target_side() {
        // Candidate's top sits exactly on the anchor's bottom.
        let lines = vec![
            make_line("anchor", 1.0, 5.0, 2.0, 5.2),
            make_line("touching", 1.0, 5.2, 2.0, 5.4),
        ];
        let query = label_query(Direction::Below, HorizontalDirection::Left);
        let ranking = rank_candidates(&lines, &lines[0], &query);
        assert_eq!(ranking.pick(Tiebreaker::First).map(|l| &l.text[..]), Some("touching"));
    }

    #[test]
    fn label_alignment_point_switches_the_column() {
        let lines = vec![
            make_line("anchor", 2.0, 5.0, 3.0, 5.2),
            make_line("left column", 1.8, 1.0, 2.4, 1.2),
            make_line("right column", 2.6, 2.0, 3.2, 2.2),
        ];
        let left_aligned = label_query(Direction::Above, HorizontalDirection::Left);
        let ranking = rank_candidates(&lines, &lines[0], &left_aligned);
        assert_eq!(
            ranking.pick(Tiebreaker::First).map(|l| &l.text[..]),
            Some("left column")
        );

        let right_aligned = label_query(Direction::Above, HorizontalDirection::Right);
        let ranking = rank_candidates(&lines, &lines[0], &right_aligned);
        assert_eq!(
            ranking.pick(Tiebreaker::First).map(|l| &l.text[..]),
            Some("right column")
        );
    }

    #[test]
    fn horizontal_label_uses_the_row_alignment_rule() {
        let lines = vec![
            make_line("anchor", 4.0, 5.0, 5.0, 5.2),
            make_line("same row", 1.0, 5.05, 2.0, 5.25),
            make_line("row above", 1.0, 4.0, 2.0, 4.2),
        ];
        let query = label_query(Direction::Left, HorizontalDirection::Left);
        let ranking = rank_candidates(&lines, &lines[0], &query);
        assert_eq!(ranking.pick(Tiebreaker::First).map(|l| &l.text[..]), Some("same row"));
        assert_eq!(ranking.pick(Tiebreaker::Last).map(|l| &l.text[..]), Some("same row"));
    }

    #[test]
    fn row_scan_ranks_by_distance_not_page_order() {
        let lines = vec![
            make_line("far", 6.0, 5.0, 7.0, 5.2),
            make_line("anchor", 1.0, 5.0, 2.0, 5.2),
            make_line("near", 2.5, 5.0, 3.5, 5.2),
            make_line("mid", 4.0, 5.0, 5.0, 5.2),
        ];
        let query = row_query(HorizontalDirection::Right, Tiebreaker::First);
        let ranking = rank_candidates(&lines, &lines[1], &query);
        assert_eq!(ranking.pick(Tiebreaker::First).map(|l| &l.text[..]), Some("near"));
        assert_eq!(ranking.pick(Tiebreaker::Second).map(|l| &l.text[..]), Some("mid"));
        assert_eq!(ranking.pick(Tiebreaker::Last).map(|l| &l.text[..]), Some("far"));
    }

    #[test]
    fn skewed_candidate_is_measured_by_extreme_corners() {
        // The candidate's bottom-left corner dips into the anchor's span
        // even though its top-left corner is above it.
        let anchor = make_line("anchor", 4.0, 5.0, 5.0, 5.2);
        let skewed = Line {
            text: "skewed".to_string(),
            bounding_polygon: Polygon([
                Point { x: 1.0, y: 4.80 },
                Point { x: 2.0, y: 4.85 },
                Point { x: 2.0, y: 5.00 },
                Point { x: 1.0, y: 5.05 },
            ]),
        };
        let lines = vec![anchor.clone(), skewed];
        let query = row_query(HorizontalDirection::Left, Tiebreaker::First);
        let ranking = rank_candidates(&lines, &lines[0], &query);
        assert_eq!(ranking.pick(Tiebreaker::First).map(|l| &l.text[..]), Some("skewed"));
    }
}
