use serde::{Deserialize, Serialize};

/// Owned [`Contour`](crate::Contour): a linestring, or a closed linestring if `is_closed` is set.
///
/// The first point of a closed contour is never repeated at the end.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> Contour<Point> {
    /// Creates a contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates an open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self::new(points, false)
    }

    /// Creates a closed contour.
    pub fn closed(points: Vec<Point>) -> Self {
        Self::new(points, true)
    }

    /// Stored points, without the closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Owned [`ClosedContour`](crate::ClosedContour), used as a polygon ring.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClosedContour<Point> {
    /// Points of the ring without the closing point.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a ring.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Self
    where
        Point: Clone,
    {
        Self::new(self.points.iter().rev().cloned().collect())
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(ring: ClosedContour<P>) -> Self {
        Self::closed(ring.points)
    }
}

impl<P> crate::contour::ClosedContour for ClosedContour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

impl<P> crate::contour::Contour for Contour<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}
