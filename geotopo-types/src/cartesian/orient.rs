use crate::cartesian::CartesianPoint2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points, or the side of a point relative to a directed line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise, the third point is on the right side.
    Clockwise,
    /// Counterclockwise, the third point is on the left side.
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points with exact arithmetic of the coordinate type.
    ///
    /// Triplets with non-comparable values (`NaN` coordinates) are reported as collinear.
    pub fn triplet<Num: num_traits::Num + PartialOrd>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        let lhs = (q.y() - p.y()) * (r.x() - q.x());
        let rhs = (q.x() - p.x()) * (r.y() - q.y());
        Self::from_products(lhs, rhs)
    }

    /// Orientation given the two products of the orientation determinant: `(q.y - p.y) * (r.x - q.x)` and
    /// `(q.x - p.x) * (r.y - q.y)`.
    pub fn from_products<Num: PartialOrd>(lhs: Num, rhs: Num) -> Self {
        match lhs.partial_cmp(&rhs) {
            Some(std::cmp::Ordering::Greater) => Self::Clockwise,
            Some(std::cmp::Ordering::Less) => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }

    /// `1` for counterclockwise (left side), `-1` for clockwise (right side) and `0` for collinear points.
    pub fn sign(&self) -> i8 {
        match self {
            Orientation::Counterclockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }

    /// Whether the two orientations are strictly on the opposite sides.
    pub fn is_opposite(&self, other: Orientation) -> bool {
        self.sign() * other.sign() < 0
    }
}
