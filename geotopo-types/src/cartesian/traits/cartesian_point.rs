use nalgebra::{Point2, Scalar, Vector2};
use num_traits::{Bounded, FromPrimitive, Num, ToPrimitive};

/// Point in 2d cartesian coordinates.
///
/// Geometries can use any numeric type for their coordinates. The relate engine converts the coordinates into
/// `f64` with [`CartesianPoint2d::to_point2d`] before doing any computations.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive + ToPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Exact coordinate-wise equality.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }

    /// Converts the point into `f64` coordinates. Coordinates that cannot be represented become `NaN`.
    fn to_point2d(&self) -> Point2<f64> {
        Point2::new(
            self.x().to_f64().unwrap_or(f64::NAN),
            self.y().to_f64().unwrap_or(f64::NAN),
        )
    }
}

/// Point type that can be constructed from coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}
