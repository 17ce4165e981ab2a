//! Intersection of two straight segments.

use geotopo_types::cartesian::{Orientation, Point2d, Rect};

use crate::tolerance::scale;
use crate::Tolerance;

/// A point where two segments meet, with fractions along both of them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct IntersectionPoint {
    pub point: Point2d,
    /// Position along the first segment, `0` at its start and `1` at its end.
    pub ta: f64,
    /// Position along the second segment.
    pub tb: f64,
}

/// Result of [`segment_intersection`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum SegmentIntersection {
    Disjoint,
    Point(IntersectionPoint),
    /// Collinear segments sharing a piece. The points are ordered along the first segment.
    Overlap(IntersectionPoint, IntersectionPoint),
}

/// Intersects segment `a0`-`a1` with segment `b0`-`b1`.
///
/// Intersection points that coincide with an endpoint of a segment (within the tolerance) are snapped to that
/// endpoint, and the corresponding fraction is exactly `0` or `1`.
pub(crate) fn segment_intersection(
    a0: &Point2d,
    a1: &Point2d,
    b0: &Point2d,
    b1: &Point2d,
    tolerance: &Tolerance,
) -> SegmentIntersection {
    let envelope_a = Rect::new(a0.x, a0.y, a1.x, a1.y);
    let envelope_b = Rect::new(b0.x, b0.y, b1.x, b1.y);
    let margin = tolerance.margin(scale(&[*a0, *a1, *b0, *b1]));
    if !envelope_a.expand(margin).intersects(&envelope_b) {
        return SegmentIntersection::Disjoint;
    }

    let side_b0 = tolerance.side(a0, a1, b0);
    let side_b1 = tolerance.side(a0, a1, b1);
    let side_a0 = tolerance.side(b0, b1, a0);
    let side_a1 = tolerance.side(b0, b1, a1);

    let collinear = |s: Orientation| s == Orientation::Collinear;
    if (collinear(side_b0) && collinear(side_b1)) || (collinear(side_a0) && collinear(side_a1)) {
        return collinear_intersection(a0, a1, b0, b1, tolerance);
    }

    let endpoint_candidates = [
        (side_a0, *a0, true, 0.0),
        (side_a1, *a1, true, 1.0),
        (side_b0, *b0, false, 0.0),
        (side_b1, *b1, false, 1.0),
    ];
    for (side, point, is_a, t) in endpoint_candidates {
        if !collinear(side) {
            continue;
        }

        if is_a && tolerance.is_point_on_segment(&point, b0, b1) {
            return SegmentIntersection::Point(IntersectionPoint {
                point,
                ta: t,
                tb: fraction(&point, b0, b1, tolerance),
            });
        }

        if !is_a && tolerance.is_point_on_segment(&point, a0, a1) {
            return SegmentIntersection::Point(IntersectionPoint {
                point,
                ta: fraction(&point, a0, a1, tolerance),
                tb: t,
            });
        }
    }

    if !side_b0.is_opposite(side_b1) || !side_a0.is_opposite(side_a1) {
        return SegmentIntersection::Disjoint;
    }

    let r = a1 - a0;
    let s = b1 - b0;
    let denominator = r.perp(&s);
    if denominator == 0.0 {
        return SegmentIntersection::Disjoint;
    }

    let d = b0 - a0;
    let ta = (d.perp(&s) / denominator).clamp(0.0, 1.0);
    let tb = (d.perp(&r) / denominator).clamp(0.0, 1.0);
    let point = a0 + r * ta;

    SegmentIntersection::Point(snap(
        IntersectionPoint { point, ta, tb },
        a0,
        a1,
        b0,
        b1,
        tolerance,
    ))
}

fn collinear_intersection(
    a0: &Point2d,
    a1: &Point2d,
    b0: &Point2d,
    b1: &Point2d,
    tolerance: &Tolerance,
) -> SegmentIntersection {
    let mut candidates: Vec<IntersectionPoint> = Vec::with_capacity(4);
    let mut push = |candidate: IntersectionPoint| {
        if !candidates
            .iter()
            .any(|c| tolerance.points_equal(&c.point, &candidate.point))
        {
            candidates.push(candidate);
        }
    };

    for (point, ta) in [(a0, 0.0), (a1, 1.0)] {
        if tolerance.is_point_on_segment(point, b0, b1) {
            push(IntersectionPoint {
                point: *point,
                ta,
                tb: fraction(point, b0, b1, tolerance),
            });
        }
    }
    for (point, tb) in [(b0, 0.0), (b1, 1.0)] {
        if tolerance.is_point_on_segment(point, a0, a1) {
            push(IntersectionPoint {
                point: *point,
                ta: fraction(point, a0, a1, tolerance),
                tb,
            });
        }
    }

    candidates.sort_by(|a, b| a.ta.total_cmp(&b.ta));
    match candidates.as_slice() {
        [] => SegmentIntersection::Disjoint,
        [single] => SegmentIntersection::Point(*single),
        [first, .., last] => SegmentIntersection::Overlap(*first, *last),
    }
}

/// Position of a point lying on a segment, snapped to `0` and `1` at the endpoints.
pub(crate) fn fraction(p: &Point2d, a: &Point2d, b: &Point2d, tolerance: &Tolerance) -> f64 {
    if tolerance.points_equal(p, a) {
        return 0.0;
    }
    if tolerance.points_equal(p, b) {
        return 1.0;
    }

    let ab = b - a;
    let length_sq = ab.norm_squared();
    if length_sq == 0.0 {
        return 0.0;
    }

    ((p - a).dot(&ab) / length_sq).clamp(0.0, 1.0)
}

fn snap(
    mut ip: IntersectionPoint,
    a0: &Point2d,
    a1: &Point2d,
    b0: &Point2d,
    b1: &Point2d,
    tolerance: &Tolerance,
) -> IntersectionPoint {
    for (endpoint, ta, tb) in [
        (a0, Some(0.0), None),
        (a1, Some(1.0), None),
        (b0, None, Some(0.0)),
        (b1, None, Some(1.0)),
    ] {
        if tolerance.points_equal(&ip.point, endpoint) {
            ip.point = *endpoint;
            if let Some(ta) = ta {
                ip.ta = ta;
            }
            if let Some(tb) = tb {
                ip.tb = tb;
            }
        }
    }

    ip
}
