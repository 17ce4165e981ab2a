//! Location of a point relative to a geometry.

use geotopo_types::cartesian::Point2d;
use geotopo_types::impls::Polygon;

use crate::relate::boundary::{BoundaryChecker, BoundaryQuery};
use crate::relate::matrix::Location;
use crate::view::{GeometryView, RangeRef, Shape};
use crate::Tolerance;

/// Locates points in a geometry. Reuses the boundary checker of linear geometries between queries.
pub(crate) struct PointLocator<'a> {
    view: &'a GeometryView,
    tolerance: Tolerance,
    boundary: BoundaryChecker<'a>,
}

impl<'a> PointLocator<'a> {
    pub fn new(view: &'a GeometryView, tolerance: &Tolerance) -> Self {
        Self {
            view,
            tolerance: *tolerance,
            boundary: BoundaryChecker::new(view, tolerance),
        }
    }

    pub fn locate(&self, point: &Point2d) -> Location {
        match self.view.shape() {
            Shape::Puntal(points) => {
                if points
                    .iter()
                    .any(|p| self.tolerance.points_equal(p, point))
                {
                    Location::Interior
                } else {
                    Location::Exterior
                }
            }
            Shape::Linear(_) => {
                if self
                    .boundary
                    .is_endpoint_boundary(point, BoundaryQuery::Any)
                {
                    return Location::Boundary;
                }

                let on_line = self.view.ranges().any(|(_, _, range)| {
                    range
                        .segments()
                        .any(|(a, b)| self.tolerance.is_point_on_segment(point, &a, &b))
                });
                if on_line {
                    Location::Interior
                } else {
                    Location::Exterior
                }
            }
            Shape::Areal(polygons) => {
                let mut location = Location::Exterior;
                for polygon in polygons {
                    match locate_in_polygon(point, polygon, &self.tolerance) {
                        Location::Interior => return Location::Interior,
                        Location::Boundary => location = Location::Boundary,
                        Location::Exterior => {}
                    }
                }

                location
            }
        }
    }
}

/// Location of a point in a geometry.
pub(crate) fn locate_point(point: &Point2d, view: &GeometryView, tolerance: &Tolerance) -> Location {
    PointLocator::new(view, tolerance).locate(point)
}

/// Location of a point in a single polygon with holes.
pub(crate) fn locate_in_polygon(
    point: &Point2d,
    polygon: &Polygon<Point2d>,
    tolerance: &Tolerance,
) -> Location {
    let rings = std::iter::once(&polygon.outer_contour).chain(polygon.inner_contours.iter());
    for ring in rings {
        let range = RangeRef {
            points: &ring.points,
            is_closed: true,
        };
        if range
            .segments()
            .any(|(a, b)| tolerance.is_point_on_segment(point, &a, &b))
        {
            return Location::Boundary;
        }
    }

    if !ring_contains(point, &polygon.outer_contour.points) {
        return Location::Exterior;
    }

    if polygon
        .inner_contours
        .iter()
        .any(|hole| ring_contains(point, &hole.points))
    {
        return Location::Exterior;
    }

    Location::Interior
}

/// Even-odd test of a point strictly inside a ring. Points on the ring give unspecified results.
pub(crate) fn ring_contains(point: &Point2d, ring: &[Point2d]) -> bool {
    let Some(mut prev) = ring.last() else {
        return false;
    };

    let mut inside = false;
    for curr in ring {
        if (curr.y > point.y) != (prev.y > point.y) {
            let x = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < x {
                inside = !inside;
            }
        }
        prev = curr;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotopo_types::impls::{ClosedContour, Contour, MultiPoint};
    use geotopo_types::Geom;

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    #[test]
    fn polygon_with_hole() {
        let polygon = Polygon::new(
            ClosedContour::new(vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)]),
            vec![ClosedContour::new(vec![
                p(1.0, 1.0),
                p(3.0, 1.0),
                p(3.0, 3.0),
                p(1.0, 3.0),
            ])],
        );
        let view = GeometryView::new(&Geom::Polygon(polygon), &Tolerance::default());
        let tolerance = Tolerance::default();

        assert_eq!(locate_point(&p(0.5, 0.5), &view, &tolerance), Location::Interior);
        assert_eq!(locate_point(&p(2.0, 2.0), &view, &tolerance), Location::Exterior);
        assert_eq!(locate_point(&p(3.0, 2.0), &view, &tolerance), Location::Boundary);
        assert_eq!(locate_point(&p(4.0, 4.0), &view, &tolerance), Location::Boundary);
        assert_eq!(locate_point(&p(5.0, 1.0), &view, &tolerance), Location::Exterior);
    }

    #[test]
    fn linestring() {
        let view = GeometryView::new(
            &Geom::Contour(Contour::open(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)])),
            &Tolerance::default(),
        );
        let locator = PointLocator::new(&view, &Tolerance::default());

        assert_eq!(locator.locate(&p(0.0, 0.0)), Location::Boundary);
        assert_eq!(locator.locate(&p(2.0, 0.0)), Location::Interior);
        assert_eq!(locator.locate(&p(2.0, 1.0)), Location::Interior);
        assert_eq!(locator.locate(&p(1.0, 1.0)), Location::Exterior);
    }

    #[test]
    fn points() {
        let view = GeometryView::new(
            &Geom::MultiPoint(MultiPoint::from(vec![p(0.0, 0.0), p(1.0, 1.0)])),
            &Tolerance::default(),
        );
        let tolerance = Tolerance::default();
        assert_eq!(locate_point(&p(1.0, 1.0), &view, &tolerance), Location::Interior);
        assert_eq!(locate_point(&p(1.0, 0.0), &view, &tolerance), Location::Exterior);
    }
}
