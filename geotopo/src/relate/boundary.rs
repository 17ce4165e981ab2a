use std::cell::OnceCell;

use geotopo_types::cartesian::Point2d;

use crate::relate::turns::{Position, TurnOperation};
use crate::view::GeometryView;
use crate::Tolerance;

/// Which endpoint of a linestring is queried.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BoundaryQuery {
    Front,
    Back,
    Any,
}

/// Answers whether a point is on the boundary of a linear geometry.
///
/// The boundary of a linear geometry consists of the endpoints of its open linestrings that are shared by an odd
/// number of linestrings (mod-2 rule). Closed linestrings have no boundary. The sorted list of endpoints is built
/// lazily on the first query.
pub(crate) struct BoundaryChecker<'a> {
    view: &'a GeometryView,
    tolerance: Tolerance,
    endpoints: OnceCell<Vec<Point2d>>,
}

impl<'a> BoundaryChecker<'a> {
    pub fn new(view: &'a GeometryView, tolerance: &Tolerance) -> Self {
        Self {
            view,
            tolerance: *tolerance,
            endpoints: OnceCell::new(),
        }
    }

    fn endpoints(&self) -> &[Point2d] {
        self.endpoints.get_or_init(|| {
            let mut endpoints: Vec<Point2d> = self
                .view
                .ranges()
                .filter(|(_, _, range)| !range.is_closed)
                .flat_map(|(_, _, range)| [range.front(), range.back()])
                .collect();
            endpoints.sort_by(|a, b| a.x.total_cmp(&b.x));
            endpoints
        })
    }

    /// Whether the geometry has any boundary points.
    pub fn has_boundary(&self) -> bool {
        self.endpoints()
            .iter()
            .any(|p| self.is_endpoint_boundary(p, BoundaryQuery::Any))
    }

    /// Whether the given endpoint of a linestring is a boundary point of the whole geometry.
    ///
    /// The result does not depend on the query for points that are linestring endpoints.
    pub fn is_endpoint_boundary(&self, point: &Point2d, _query: BoundaryQuery) -> bool {
        let endpoints = self.endpoints();
        let margin = self.tolerance.margin(point.x);
        let start = endpoints.partition_point(|p| p.x < point.x - margin);
        let count = endpoints[start..]
            .iter()
            .take_while(|p| p.x <= point.x + margin)
            .filter(|p| self.tolerance.points_equal(p, point))
            .count();

        count % 2 == 1
    }

    /// Whether a turn point is a boundary point. Only turns at the front or at the back of a linestring can be
    /// on the boundary.
    pub fn is_on_boundary(
        &self,
        point: &Point2d,
        operation: &TurnOperation,
        query: BoundaryQuery,
    ) -> bool {
        let matches_back = matches!(query, BoundaryQuery::Back | BoundaryQuery::Any)
            && operation.position == Position::Back;
        let matches_front = matches!(query, BoundaryQuery::Front | BoundaryQuery::Any)
            && operation.position == Position::Front;

        (matches_back || matches_front) && self.is_endpoint_boundary(point, query)
    }

    /// Distinct boundary points of the geometry.
    pub fn boundary_points(&self) -> Vec<Point2d> {
        let mut points: Vec<Point2d> = vec![];
        for p in self.endpoints() {
            if self.is_endpoint_boundary(p, BoundaryQuery::Any)
                && !points.iter().any(|b| self.tolerance.points_equal(b, p))
            {
                points.push(*p);
            }
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relate::turns::{Operation, SegmentId};
    use geotopo_types::impls::{Contour, MultiContour};
    use geotopo_types::Geom;

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    #[test]
    fn mod_2_rule() {
        let geom = Geom::MultiContour(MultiContour::from(vec![
            Contour::open(vec![p(0.0, 0.0), p(1.0, 0.0)]),
            Contour::open(vec![p(1.0, 0.0), p(2.0, 0.0)]),
            Contour::open(vec![p(1.0, 0.0), p(1.0, 1.0)]),
            Contour::closed(vec![p(5.0, 5.0), p(6.0, 5.0), p(6.0, 6.0)]),
        ]));
        let view = GeometryView::new(&geom, &Tolerance::default());
        let checker = BoundaryChecker::new(&view, &Tolerance::default());

        assert!(checker.has_boundary());
        assert!(checker.is_endpoint_boundary(&p(0.0, 0.0), BoundaryQuery::Front));
        assert!(checker.is_endpoint_boundary(&p(1.0, 0.0), BoundaryQuery::Any));
        assert!(!checker.is_endpoint_boundary(&p(5.0, 5.0), BoundaryQuery::Any));
        assert_eq!(checker.boundary_points().len(), 4);
    }

    #[test]
    fn closed_linestring_has_no_boundary() {
        let geom = Geom::Contour(Contour::open(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
        ]));
        let view = GeometryView::new(&geom, &Tolerance::default());
        let checker = BoundaryChecker::new(&view, &Tolerance::default());
        assert!(!checker.has_boundary());
        assert!(checker.boundary_points().is_empty());
    }

    #[test]
    fn turn_on_boundary() {
        let geom = Geom::Contour(Contour::open(vec![p(0.0, 0.0), p(2.0, 0.0)]));
        let view = GeometryView::new(&geom, &Tolerance::default());
        let checker = BoundaryChecker::new(&view, &Tolerance::default());
        let operation = TurnOperation {
            seg_id: SegmentId {
                multi_index: 0,
                ring_index: None,
                segment_index: 0,
            },
            operation: Operation::Blocked,
            position: Position::Back,
            is_collinear: false,
            fraction: 1.0,
        };

        assert!(checker.is_on_boundary(&p(2.0, 0.0), &operation, BoundaryQuery::Any));
        assert!(checker.is_on_boundary(&p(2.0, 0.0), &operation, BoundaryQuery::Back));
        assert!(!checker.is_on_boundary(&p(2.0, 0.0), &operation, BoundaryQuery::Front));
    }
}
