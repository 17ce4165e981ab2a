use std::cmp::Ordering;

use geotopo_types::cartesian::{Point2d, Vector2};

use crate::tolerance::lexicographic;
use crate::Tolerance;

/// Unit vector of a segment together with the point it starts at.
///
/// A directional vector starts at the first point of the segment. A non-directional vector starts at the
/// lexicographically smaller endpoint, so both traversal directions of the segment produce the same vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct CollectedVector {
    pub origin: Point2d,
    pub direction: Vector2<f64>,
}

impl CollectedVector {
    /// Creates a normalised vector of the segment. Returns `None` for segments of zero length.
    pub fn from_segment(
        p1: &Point2d,
        p2: &Point2d,
        directional: bool,
        tolerance: &Tolerance,
    ) -> Option<Self> {
        let (origin, end) =
            if directional || tolerance.cmp_points(p1, p2) != Ordering::Greater {
                (p1, p2)
            } else {
                (p2, p1)
            };

        let direction = end - origin;
        let length_sq = direction.norm_squared();
        if length_sq <= f64::EPSILON * f64::EPSILON {
            return None;
        }

        Some(Self {
            origin: *origin,
            direction: direction / length_sq.sqrt(),
        })
    }

    pub fn equal_direction(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.equals(self.direction.x, other.direction.x)
            && tolerance.equals(self.direction.y, other.direction.y)
    }

    pub fn equals(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.points_equal(&self.origin, &other.origin) && self.equal_direction(other, tolerance)
    }

    /// Exact order of vectors by origin, then by direction.
    pub fn compare(&self, other: &Self) -> Ordering {
        lexicographic(&self.origin, &other.origin).then_with(|| {
            lexicographic(
                &Point2d::from(self.direction),
                &Point2d::from(other.direction),
            )
        })
    }

    /// Moves the origin to `origin` if it is lexicographically smaller than the current one.
    pub fn merge_origin(&mut self, origin: &Point2d, tolerance: &Tolerance) {
        if tolerance.cmp_points(origin, &self.origin) == Ordering::Less {
            self.origin = *origin;
        }
    }
}
