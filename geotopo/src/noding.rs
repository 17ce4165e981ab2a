//! Splitting of two sets of segments at their mutual intersection points.

use geotopo_types::cartesian::Point2d;

use crate::intersection::{segment_intersection, IntersectionPoint, SegmentIntersection};
use crate::Tolerance;

/// Pieces of two segment sets split at the points where they meet.
///
/// Pieces keep the direction of the segment they were cut from. Piece endpoints created by the split are the
/// intersection points themselves, so a piece shared by both sets has the same endpoints in both of them.
#[derive(Debug, Default)]
pub(crate) struct Noding {
    pub pieces_a: Vec<(Point2d, Point2d)>,
    pub pieces_b: Vec<(Point2d, Point2d)>,
    pub nodes: Vec<Point2d>,
}

impl Noding {
    pub fn new(
        segments_a: &[(Point2d, Point2d)],
        segments_b: &[(Point2d, Point2d)],
        tolerance: &Tolerance,
    ) -> Self {
        let mut splits_a: Vec<Vec<(f64, Point2d)>> = vec![vec![]; segments_a.len()];
        let mut splits_b: Vec<Vec<(f64, Point2d)>> = vec![vec![]; segments_b.len()];
        let mut nodes = vec![];

        let mut add = |i: usize, j: usize, ip: IntersectionPoint| {
            splits_a[i].push((ip.ta, ip.point));
            splits_b[j].push((ip.tb, ip.point));
            nodes.push(ip.point);
        };

        for (i, (a0, a1)) in segments_a.iter().enumerate() {
            for (j, (b0, b1)) in segments_b.iter().enumerate() {
                match segment_intersection(a0, a1, b0, b1, tolerance) {
                    SegmentIntersection::Disjoint => {}
                    SegmentIntersection::Point(ip) => add(i, j, ip),
                    SegmentIntersection::Overlap(first, last) => {
                        add(i, j, first);
                        add(i, j, last);
                    }
                }
            }
        }

        log::trace!(
            "Noded {} and {} segments at {} points",
            segments_a.len(),
            segments_b.len(),
            nodes.len()
        );

        Self {
            pieces_a: split(segments_a, splits_a, tolerance),
            pieces_b: split(segments_b, splits_b, tolerance),
            nodes,
        }
    }
}

fn split(
    segments: &[(Point2d, Point2d)],
    splits: Vec<Vec<(f64, Point2d)>>,
    tolerance: &Tolerance,
) -> Vec<(Point2d, Point2d)> {
    let mut pieces = vec![];
    for ((start, end), mut points) in segments.iter().zip(splits) {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut prev = *start;
        for point in points.into_iter().map(|(_, p)| p).chain(std::iter::once(*end)) {
            if !tolerance.points_equal(&prev, &point) {
                pieces.push((prev, point));
                prev = point;
            }
        }

        // the last split point may be snapped onto the end of the segment
        if let Some(last) = pieces.last_mut() {
            if tolerance.points_equal(&last.1, end) {
                last.1 = *end;
            }
        }
    }

    pieces
}

/// Middle point of a segment.
pub(crate) fn midpoint(a: &Point2d, b: &Point2d) -> Point2d {
    Point2d::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    #[test]
    fn crossing_segments_are_split() {
        let tolerance = Tolerance::default();
        let noding = Noding::new(
            &[(p(0.0, 0.0), p(2.0, 2.0))],
            &[(p(0.0, 2.0), p(2.0, 0.0))],
            &tolerance,
        );

        assert_eq!(noding.nodes, vec![p(1.0, 1.0)]);
        assert_eq!(
            noding.pieces_a,
            vec![(p(0.0, 0.0), p(1.0, 1.0)), (p(1.0, 1.0), p(2.0, 2.0))]
        );
        assert_eq!(
            noding.pieces_b,
            vec![(p(0.0, 2.0), p(1.0, 1.0)), (p(1.0, 1.0), p(2.0, 0.0))]
        );
    }

    #[test]
    fn overlap_produces_shared_pieces() {
        let tolerance = Tolerance::default();
        let noding = Noding::new(
            &[(p(0.0, 0.0), p(2.0, 0.0))],
            &[(p(3.0, 0.0), p(1.0, 0.0))],
            &tolerance,
        );

        assert_eq!(
            noding.pieces_a,
            vec![(p(0.0, 0.0), p(1.0, 0.0)), (p(1.0, 0.0), p(2.0, 0.0))]
        );
        assert_eq!(
            noding.pieces_b,
            vec![(p(3.0, 0.0), p(2.0, 0.0)), (p(2.0, 0.0), p(1.0, 0.0))]
        );
    }

    #[test]
    fn touching_at_endpoints_is_not_split() {
        let tolerance = Tolerance::default();
        let noding = Noding::new(
            &[(p(0.0, 0.0), p(1.0, 0.0))],
            &[(p(1.0, 0.0), p(1.0, 1.0))],
            &tolerance,
        );

        assert_eq!(noding.pieces_a.len(), 1);
        assert_eq!(noding.pieces_b.len(), 1);
        assert_eq!(noding.nodes, vec![p(1.0, 0.0)]);
    }
}
