use crate::cartesian::{CartesianPoint2d, Point2d, Rect};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Bounding rectangle of the segment.
    pub fn envelope(&self) -> Rect<P::Num> {
        Rect::new(self.0.x(), self.0.y(), self.1.x(), self.1.y())
    }

    /// Whether both endpoints of the segment are exactly equal.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Middle point of the segment in `f64` coordinates.
    pub fn midpoint(&self) -> Point2d {
        let a = self.0.to_point2d();
        let b = self.1.to_point2d();
        Point2d::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * otherwise the returned value is the squared distance to the closer endpoint
    pub fn distance_to_point_sq(&self, point: &impl CartesianPoint2d) -> f64 {
        let a = self.0.to_point2d();
        let b = self.1.to_point2d();
        let p = point.to_point2d();
        if a == b {
            return (p - a).norm_squared();
        }

        let ds = b - a;
        let dp = p - a;
        let r = dp.dot(&ds) / ds.norm_squared();
        if r <= 0.0 {
            dp.norm_squared()
        } else if r >= 1.0 {
            (p - b).norm_squared()
        } else {
            let s = dp.perp(&ds);
            s * s / ds.norm_squared()
        }
    }
}
