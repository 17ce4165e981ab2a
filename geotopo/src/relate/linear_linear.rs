//! Relate of two linear geometries.
//!
//! Both geometries are split at their mutual intersection points. Every resulting piece lies either completely on
//! the other geometry or completely outside of it, so locating its middle point gives the location of the whole
//! piece. The intersection points and the endpoints of the linestrings are then located in both geometries to find
//! the point intersections.

use geotopo_types::cartesian::Point2d;

use crate::noding::{midpoint, Noding};
use crate::relate::boundary::BoundaryChecker;
use crate::relate::locate::PointLocator;
use crate::relate::matrix::{Dimension, Location, RelateResult};
use crate::view::GeometryView;
use crate::Tolerance;

use Location::{Boundary, Exterior, Interior};

/// Relates two linear geometries.
pub(crate) fn relate_linear_linear(
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    result.set(Exterior, Exterior, Dimension::Two);
    if result.interrupt() {
        return;
    }

    let noding = Noding::new(&segments(a), &segments(b), tolerance);
    let locator_a = PointLocator::new(a, tolerance);
    let locator_b = PointLocator::new(b, tolerance);

    for (start, end) in &noding.pieces_a {
        let middle = midpoint(start, end);
        match locator_b.locate(&middle) {
            Interior => result.update(Interior, Interior, Dimension::One),
            Boundary => result.update(Interior, Boundary, Dimension::Zero),
            Exterior => result.update(Interior, Exterior, Dimension::One),
        }
        if result.interrupt() {
            return;
        }
    }

    for (start, end) in &noding.pieces_b {
        let middle = midpoint(start, end);
        match locator_a.locate(&middle) {
            Interior => result.update(Interior, Interior, Dimension::One),
            Boundary => result.update(Boundary, Interior, Dimension::Zero),
            Exterior => result.update(Exterior, Interior, Dimension::One),
        }
        if result.interrupt() {
            return;
        }
    }

    let endpoints = BoundaryChecker::new(a, tolerance)
        .boundary_points()
        .into_iter()
        .chain(BoundaryChecker::new(b, tolerance).boundary_points());
    for node in noding.nodes.into_iter().chain(endpoints) {
        let location_a = locator_a.locate(&node);
        let location_b = locator_b.locate(&node);
        if location_a != Exterior || location_b != Exterior {
            result.update(location_a, location_b, Dimension::Zero);
        }
        if result.interrupt() {
            return;
        }
    }
}

fn segments(view: &GeometryView) -> Vec<(Point2d, Point2d)> {
    view.ranges().flat_map(|(_, _, range)| range.segments()).collect()
}
