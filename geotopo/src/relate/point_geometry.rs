//! Relate of a puntal geometry with a geometry of any kind.

use geotopo_types::cartesian::Point2d;

use crate::relate::boundary::BoundaryChecker;
use crate::relate::locate::PointLocator;
use crate::relate::matrix::{Dimension, Location, RelateResult, Transposed};
use crate::view::{GeometryView, Shape};
use crate::Tolerance;

use Location::{Boundary, Exterior, Interior};

/// Relates the points of `puntal` with `other`.
pub(crate) fn relate_point_geometry(
    puntal: &GeometryView,
    other: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    result.set(Exterior, Exterior, Dimension::Two);
    if result.interrupt() {
        return;
    }

    let locator = PointLocator::new(other, tolerance);
    for point in puntal.points() {
        result.update(Interior, locator.locate(point), Dimension::Zero);
        if result.interrupt() {
            return;
        }
    }

    let is_covered = |point: &Point2d| {
        puntal
            .points()
            .iter()
            .any(|p| tolerance.points_equal(p, point))
    };
    match other.shape() {
        Shape::Puntal(points) => {
            if !points.iter().all(is_covered) {
                result.update(Exterior, Interior, Dimension::Zero);
            }
        }
        Shape::Linear(_) => {
            result.update(Exterior, Interior, Dimension::One);
            if result.interrupt() {
                return;
            }

            let boundary = BoundaryChecker::new(other, tolerance).boundary_points();
            if !boundary.iter().all(is_covered) {
                result.update(Exterior, Boundary, Dimension::Zero);
            }
        }
        Shape::Areal(_) => {
            result.update(Exterior, Interior, Dimension::Two);
            result.update(Exterior, Boundary, Dimension::One);
        }
    }
}

/// Relates `other` with the points of `puntal`.
pub(crate) fn relate_geometry_point(
    other: &GeometryView,
    puntal: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    relate_point_geometry(puntal, other, tolerance, &mut Transposed(result));
}
