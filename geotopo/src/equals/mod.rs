//! Geometric equality.
//!
//! Two geometries are equal if they cover the same set of points. Point sets are compared directly. Linear and
//! areal geometries are converted into collections of unit vectors (one per straight run of segments, see
//! [`CollectedVector`]) that do not depend on the starting point of the rings, their orientation, or redundant
//! collinear vertices. The geometries are equal if the sorted collections are equal. A cheap area (length) check
//! is done before collecting the vectors. Non-simple linear geometries count their overlapping parts more than once
//! in the length, so if only their lengths differ the equality is decided by the relate engine.

mod collect;
mod collected_vector;
mod segments_info;

use geotopo_types::cartesian::{CartesianClosedContour, CartesianPoint2d, Point2d, Rect};
use geotopo_types::Geom;

use crate::relate::{relate_views, Mask, MaskMatcher};
use crate::view::{GeometryView, Shape};
use crate::Tolerance;

use collect::{collect_areal, collect_linear};
use collected_vector::CollectedVector;
use segments_info::SegmentsInfo;

const EQUALS: Mask = Mask::from_bytes(b"T*F**FFF*");

/// Whether two geometries are geometrically equal.
pub(crate) fn equals<P, Q>(
    a: &Geom<P>,
    b: &Geom<Q>,
    tolerance: &Tolerance,
    non_simple: bool,
) -> bool
where
    P: CartesianPoint2d,
    Q: CartesianPoint2d,
{
    if let (Geom::Rect { min: min_a, max: max_a }, Geom::Rect { min: min_b, max: max_b }) = (a, b) {
        let rect = |min: Point2d, max: Point2d| Rect::new(min.x, min.y, max.x, max.y);
        return rects_equal(
            &rect(min_a.to_point2d(), max_a.to_point2d()),
            &rect(min_b.to_point2d(), max_b.to_point2d()),
            tolerance,
        );
    }

    let a = GeometryView::new(a, tolerance);
    let b = GeometryView::new(b, tolerance);
    equals_views(&a, &b, tolerance, non_simple)
}

/// Whether two normalised geometries are geometrically equal.
pub(crate) fn equals_views(
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
    non_simple: bool,
) -> bool {
    match (a.envelope(), b.envelope()) {
        (Some(envelope_a), Some(envelope_b)) => {
            if !rects_equal(&envelope_a, &envelope_b, tolerance) {
                return false;
            }
        }
        (None, None) => {}
        _ => return false,
    }

    let result = match (a.shape(), b.shape()) {
        (Shape::Puntal(points_a), Shape::Puntal(points_b)) => {
            let contains = |points: &[_], p| points.iter().any(|q| tolerance.points_equal(p, q));
            points_a.iter().all(|p| contains(points_b, p))
                && points_b.iter().all(|p| contains(points_a, p))
        }
        (Shape::Linear(_), Shape::Linear(_)) => {
            let same_length = tolerance.equals(length(a), length(b));
            if !same_length && !non_simple {
                return false;
            }

            let collect = |view: &GeometryView| {
                if non_simple {
                    let mut info = SegmentsInfo::new(view, tolerance);
                    collect_linear(view, Some(&mut info), tolerance)
                } else {
                    collect_linear(view, None, tolerance)
                }
            };
            if !vectors_equal(collect(a), collect(b), tolerance) {
                return false;
            }

            // Overlapping parts of a non-simple geometry count more than once in its length, so the lengths
            // alone cannot tell the geometries apart.
            same_length || relate_equal(a, b, tolerance)
        }
        (Shape::Areal(_), Shape::Areal(_)) => {
            if !tolerance.equals(area(a), area(b)) {
                return false;
            }

            vectors_equal(
                collect_areal(a, tolerance),
                collect_areal(b, tolerance),
                tolerance,
            )
        }
        _ => false,
    };

    log::debug!(
        "Equality of {} and {}: {result}",
        a.kind(),
        b.kind()
    );
    result
}

fn relate_equal(a: &GeometryView, b: &GeometryView, tolerance: &Tolerance) -> bool {
    let mut matcher = MaskMatcher::new([EQUALS]);
    relate_views(a, b, tolerance, &mut matcher);
    matcher.result()
}

fn rects_equal(a: &Rect<f64>, b: &Rect<f64>, tolerance: &Tolerance) -> bool {
    tolerance.equals(a.x_min(), b.x_min())
        && tolerance.equals(a.y_min(), b.y_min())
        && tolerance.equals(a.x_max(), b.x_max())
        && tolerance.equals(a.y_max(), b.y_max())
}

fn vectors_equal(
    mut a: Vec<CollectedVector>,
    mut b: Vec<CollectedVector>,
    tolerance: &Tolerance,
) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.sort_by(CollectedVector::compare);
    b.sort_by(CollectedVector::compare);
    if a.iter().zip(&b).all(|(x, y)| x.equals(y, tolerance)) {
        return true;
    }

    // Vectors equal within the tolerance may still sort differently. Match them among the vectors with a close
    // origin `x`.
    let mut matched = vec![false; b.len()];
    for x in &a {
        let margin = 2.0 * tolerance.margin(x.origin.x);
        let start = b.partition_point(|y| y.origin.x < x.origin.x - margin);
        let found = (start..b.len())
            .take_while(|&i| b[i].origin.x <= x.origin.x + margin)
            .find(|&i| !matched[i] && x.equals(&b[i], tolerance));
        match found {
            Some(i) => matched[i] = true,
            None => return false,
        }
    }

    true
}

/// Area of an areal geometry, holes excluded.
fn area(view: &GeometryView) -> f64 {
    view.polygons()
        .iter()
        .map(|polygon| {
            let holes: f64 = polygon
                .inner_contours
                .iter()
                .map(|hole| hole.area_signed().abs())
                .sum();
            polygon.outer_contour.area_signed().abs() - holes
        })
        .sum()
}

/// Total length of a linear geometry.
fn length(view: &GeometryView) -> f64 {
    view.ranges()
        .flat_map(|(_, _, range)| range.segments())
        .map(|(a, b)| (b - a).norm())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotopo_types::impls::{ClosedContour, Contour, MultiContour, MultiPoint, Polygon};

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    fn line(coords: &[(f64, f64)]) -> Contour<Point2d> {
        Contour::open(coords.iter().map(|(x, y)| p(*x, *y)).collect())
    }

    fn ring(coords: &[(f64, f64)]) -> ClosedContour<Point2d> {
        ClosedContour::new(coords.iter().map(|(x, y)| p(*x, *y)).collect())
    }

    fn eq(a: Geom<Point2d>, b: Geom<Point2d>) -> bool {
        let tolerance = Tolerance::default();
        let forward = equals(&a, &b, &tolerance, true);
        assert_eq!(forward, equals(&b, &a, &tolerance, true), "equals is not symmetric");
        forward
    }

    #[test]
    fn points() {
        assert!(eq(Geom::Point(p(1.0, 1.0)), Geom::Point(p(1.0, 1.0))));
        assert!(!eq(Geom::Point(p(1.0, 1.0)), Geom::Point(p(1.0, 2.0))));
        assert!(eq(
            Geom::MultiPoint(MultiPoint::from(vec![p(3.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)])),
            Geom::MultiPoint(MultiPoint::from(vec![p(1.0, 0.0), p(3.0, 0.0), p(0.0, 0.0)])),
        ));
        assert!(!eq(
            Geom::MultiPoint(MultiPoint::from(vec![p(3.0, 0.0), p(0.0, 0.0), p(2.0, 0.0)])),
            Geom::MultiPoint(MultiPoint::from(vec![p(1.0, 0.0), p(3.0, 0.0), p(0.0, 0.0)])),
        ));
    }

    #[test]
    fn boxes() {
        let rect = |x1, y1, x2, y2| Geom::Rect {
            min: p(x1, y1),
            max: p(x2, y2),
        };
        assert!(!eq(rect(1.0, 1.0, 2.0, 2.0), rect(1.0, 2.0, 2.0, 2.0)));
        assert!(eq(rect(1.0, 2.0, 3.0, 4.0), rect(1.0, 2.0, 3.0, 4.0)));
        assert!(eq(
            rect(1.0, 1.0, 2.0, 2.0),
            Geom::Polygon(Polygon::from(ring(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)])))
        ));
        assert!(!eq(
            rect(1.0, 1.0, 2.0, 3.0),
            Geom::Polygon(Polygon::from(ring(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)])))
        ));
    }

    #[test]
    fn linestrings() {
        assert!(eq(
            Geom::Contour(line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)])),
            Geom::Contour(line(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (2.0, 5.0)])),
        ));
        assert!(!eq(
            Geom::Contour(line(&[(1.0, 0.0), (3.0, 3.0), (2.0, 5.0)])),
            Geom::Contour(line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)])),
        ));
        assert!(eq(
            Geom::Contour(line(&[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (6.0, 0.0)])),
            Geom::Contour(line(&[(0.0, 0.0), (6.0, 0.0)])),
        ));
        assert!(eq(
            Geom::Segment {
                start: p(0.0, 0.0),
                end: p(1.0, 1.0)
            },
            Geom::Segment {
                start: p(1.0, 1.0),
                end: p(0.0, 0.0)
            },
        ));
    }

    #[test]
    fn non_simple_linestrings() {
        let tolerance = Tolerance::default();
        let retraced = Geom::Contour(line(&[
            (0.0, 5.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (10.0, 10.0),
            (10.0, 5.0),
            (5.0, 5.0),
            (5.0, 0.0),
        ]));
        let simple = Geom::Contour(line(&[(0.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 0.0)]));

        assert!(equals(&retraced, &simple, &tolerance, true));
        assert!(!equals(&retraced, &simple, &tolerance, false));
    }

    #[test]
    fn overlapping_linestrings() {
        let overlapping = || {
            Geom::MultiContour(MultiContour::from(vec![
                line(&[(0.0, 0.0), (2.0, 0.0)]),
                line(&[(1.0, 0.0), (2.0, 0.0)]),
            ]))
        };
        assert!(eq(overlapping(), Geom::Contour(line(&[(0.0, 0.0), (2.0, 0.0)]))));
        assert!(!eq(overlapping(), Geom::Contour(line(&[(0.0, 0.0), (3.0, 0.0)]))));

        let tolerance = Tolerance::default();
        let simple = Geom::Contour(line(&[(0.0, 0.0), (2.0, 0.0)]));
        assert!(!equals(&overlapping(), &simple, &tolerance, false));
    }

    #[test]
    fn vectors_equal_within_tolerance_in_different_order() {
        let tolerance = Tolerance::default();
        let vector = |x, y| CollectedVector {
            origin: p(x, y),
            direction: geotopo_types::cartesian::Vector2::new(1.0, 0.0),
        };

        let a = vec![vector(1.0, 5.0), vector(1.0 + 1e-14, 0.0)];
        let b = vec![vector(1.0, 0.0), vector(1.0, 5.0)];
        assert!(vectors_equal(a.clone(), b.clone(), &tolerance));
        assert!(vectors_equal(b, a, &tolerance));

        let a = vec![vector(1.0, 5.0), vector(1.0, 5.0)];
        let b = vec![vector(1.0, 0.0), vector(1.0, 5.0)];
        assert!(!vectors_equal(a, b, &tolerance));
    }

    #[test]
    fn linestring_and_multilinestring() {
        assert!(eq(
            Geom::Contour(line(&[(1.0, 1.0), (3.0, 3.0), (4.0, 4.0)])),
            Geom::MultiContour(MultiContour::from(vec![
                line(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]),
                line(&[(3.0, 3.0), (4.0, 4.0)]),
            ])),
        ));
        assert!(!eq(
            Geom::Contour(line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)])),
            Geom::MultiContour(MultiContour::from(vec![
                line(&[(1.0, 1.0), (2.0, 2.0)]),
                line(&[(3.0, 3.0), (2.0, 5.0)]),
            ])),
        ));
    }

    #[test]
    fn polygons() {
        let case_p1 = || Geom::Polygon(Polygon::from(ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)])));
        assert!(eq(case_p1(), case_p1()));
        assert!(eq(
            Geom::ClosedContour(ring(&[(2.0, 2.0), (0.0, 0.0), (0.0, 2.0)])),
            case_p1()
        ));
        assert!(eq(
            case_p1(),
            Geom::Polygon(Polygon::from(ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (1.0, 1.0)])))
        ));
        assert!(eq(
            case_p1(),
            Geom::Polygon(Polygon::from(ring(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0)])))
        ));
        assert!(!eq(
            case_p1(),
            Geom::Polygon(Polygon::from(ring(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0)])))
        ));
    }

    #[test]
    fn different_dimensions() {
        assert!(!eq(
            Geom::Contour(Contour::closed(vec![p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0)])),
            Geom::Polygon(Polygon::from(ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]))),
        ));
        assert!(!eq(Geom::Point(p(0.0, 0.0)), Geom::Contour(line(&[(0.0, 0.0), (0.0, 0.0)]))));
    }
}
