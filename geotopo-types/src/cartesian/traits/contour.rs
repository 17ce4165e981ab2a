use crate::cartesian::CartesianPoint2d;
use crate::contour::{ClosedContour, Contour};
use num_traits::{One, Zero};

/// Ring in 2d cartesian coordinates. This trait is auto-implemented for all closed contours.
pub trait CartesianClosedContour {
    /// Point type of the ring.
    type Point: CartesianPoint2d;

    /// Signed area of the ring (shoelace formula). Positive for counterclockwise rings.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Direction in which the ring is traversed. Degenerate rings with zero area are reported as clockwise.
    fn winding(&self) -> Winding;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> P::Num {
        let mut iter = self.iter_points_closing();
        let Some(mut prev) = iter.next() else {
            return P::Num::zero();
        };

        let mut aggr = P::Num::zero();
        for p in iter {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (P::Num::one() + P::Num::one())
    }

    fn winding(&self) -> Winding {
        if self.area_signed() <= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// Traversal direction of a ring.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}
