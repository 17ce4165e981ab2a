//! Relate of two areal geometries.
//!
//! The boundary of each geometry is related with the other geometry by the linear/areal analyser. The boundary
//! rows and columns of the result are taken directly from these two matrices, and the interior/exterior cells are
//! derived from them.

use crate::relate::linear_areal::relate_linear_areal;
use crate::relate::matrix::{Dimension, IntersectionMatrix, Location, RelateResult};
use crate::view::GeometryView;
use crate::Tolerance;

use Location::{Boundary, Exterior, Interior};

/// Relates two areal geometries.
pub(crate) fn relate_areal_areal(
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    result.set(Exterior, Exterior, Dimension::Two);
    if result.interrupt() {
        return;
    }

    let (Some(boundary_a), Some(boundary_b)) = (a.boundary(), b.boundary()) else {
        return;
    };

    let mut boundary_a_in_b = IntersectionMatrix::new();
    relate_linear_areal(&boundary_a, b, tolerance, &mut boundary_a_in_b);
    let mut boundary_b_in_a = IntersectionMatrix::new();
    relate_linear_areal(&boundary_b, a, tolerance, &mut boundary_b_in_a);

    let m1 = |location| boundary_a_in_b.get(Interior, location);
    let m2 = |location| boundary_b_in_a.get(Interior, location);
    let is_set = |value: Dimension| value != Dimension::False;

    let interiors_intersect =
        is_set(m1(Interior)) || is_set(m2(Interior)) || (!is_set(m1(Exterior)) && !is_set(m2(Exterior)));

    let cells = [
        (Boundary, Interior, m1(Interior)),
        (Boundary, Boundary, m1(Boundary).max(m2(Boundary))),
        (Boundary, Exterior, m1(Exterior)),
        (Interior, Boundary, m2(Interior)),
        (Exterior, Boundary, m2(Exterior)),
        (Interior, Interior, area_if(interiors_intersect)),
        (
            Interior,
            Exterior,
            area_if(is_set(m1(Exterior)) || is_set(m2(Interior)) || !interiors_intersect),
        ),
        (
            Exterior,
            Interior,
            area_if(is_set(m2(Exterior)) || is_set(m1(Interior)) || !interiors_intersect),
        ),
    ];

    for (location_a, location_b, value) in cells {
        if value != Dimension::False {
            result.update(location_a, location_b, value);
        }
        if result.interrupt() {
            return;
        }
    }
}

fn area_if(condition: bool) -> Dimension {
    if condition {
        Dimension::Two
    } else {
        Dimension::False
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotopo_types::cartesian::Point2d;
    use geotopo_types::impls::{ClosedContour, Polygon};
    use geotopo_types::Geom;

    fn square(x: f64, y: f64, size: f64) -> Geom<Point2d> {
        Geom::Polygon(Polygon::from(vec![
            Point2d::new(x, y),
            Point2d::new(x, y + size),
            Point2d::new(x + size, y + size),
            Point2d::new(x + size, y),
        ]))
    }

    fn relate(a: Geom<Point2d>, b: Geom<Point2d>) -> String {
        let tolerance = Tolerance::default();
        let a = GeometryView::new(&a, &tolerance);
        let b = GeometryView::new(&b, &tolerance);
        let mut matrix = IntersectionMatrix::new();
        relate_areal_areal(&a, &b, &tolerance, &mut matrix);
        matrix.to_string()
    }

    #[test]
    fn equal_squares() {
        assert_eq!(relate(square(0.0, 0.0, 2.0), square(0.0, 0.0, 2.0)), "2FFF1FFF2");
    }

    #[test]
    fn squares_sharing_edge() {
        assert_eq!(relate(square(0.0, 0.0, 2.0), square(2.0, 0.0, 2.0)), "FF2F11212");
    }

    #[test]
    fn overlapping_squares() {
        assert_eq!(relate(square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)), "212101212");
    }

    #[test]
    fn containment() {
        assert_eq!(relate(square(0.0, 0.0, 4.0), square(1.0, 1.0, 1.0)), "212FF1FF2");
        assert_eq!(relate(square(1.0, 1.0, 1.0), square(0.0, 0.0, 4.0)), "2FF1FF212");
    }

    #[test]
    fn polygon_filling_a_hole() {
        let with_hole = Geom::Polygon(Polygon::new(
            ClosedContour::new(vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(0.0, 4.0),
                Point2d::new(4.0, 4.0),
                Point2d::new(4.0, 0.0),
            ]),
            vec![ClosedContour::new(vec![
                Point2d::new(1.0, 1.0),
                Point2d::new(3.0, 1.0),
                Point2d::new(3.0, 3.0),
                Point2d::new(1.0, 3.0),
            ])],
        ));
        assert_eq!(relate(with_hole, square(1.0, 1.0, 2.0)), "FF2F112F2");
    }

    #[test]
    fn nested_squares_sharing_a_corner() {
        let corners = [
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 2.0),
            Point2d::new(2.0, 2.0),
            Point2d::new(2.0, 0.0),
        ];
        for shift in 0..corners.len() {
            let mut rotated = corners.to_vec();
            rotated.rotate_left(shift);
            let inner = || Geom::Polygon(Polygon::from(rotated.clone()));

            assert_eq!(relate(square(0.0, 0.0, 4.0), inner()), "212F11FF2", "shift {shift}");
            assert_eq!(relate(inner(), square(0.0, 0.0, 4.0)), "2FF11F212", "shift {shift}");
        }
    }
}
