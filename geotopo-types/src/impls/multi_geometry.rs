use serde::{Deserialize, Serialize};

use crate::impls::contour::Contour;
use crate::impls::polygon::Polygon;
use crate::multi_geometry;

/// Owned [`MultiPoint`](multi_geometry::MultiPoint).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint<P>(Vec<P>);

/// Owned [`MultiContour`](multi_geometry::MultiContour).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

/// Owned [`MultiPolygon`](multi_geometry::MultiPolygon).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon<P> {
    /// Polygons of the set.
    pub parts: Vec<Polygon<P>>,
}

impl<P> MultiPoint<P> {
    /// Points of the set.
    pub fn points(&self) -> &[P] {
        &self.0
    }
}

impl<P> MultiContour<P> {
    /// Contours of the set.
    pub fn parts(&self) -> &[Contour<P>] {
        &self.0
    }
}

impl<P> MultiPolygon<P> {
    /// Polygons of the set.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }
}

impl<P> multi_geometry::MultiPoint for MultiPoint<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.0.iter()
    }
}

impl<P> multi_geometry::MultiContour for MultiContour<P> {
    type Contour = Contour<P>;

    fn contours(&self) -> impl Iterator<Item = &Self::Contour> {
        self.0.iter()
    }
}

impl<P> multi_geometry::MultiPolygon for MultiPolygon<P> {
    type Polygon = Polygon<P>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.parts.iter()
    }
}

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(points: Vec<P>) -> Self {
        Self(points)
    }
}

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(contours: Vec<Contour<P>>) -> Self {
        Self(contours)
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::ClosedContour;
    use crate::multi_geometry::{MultiContour as _, MultiPoint as _, MultiPolygon as _};

    #[test]
    fn parts_are_iterated_in_order() {
        let points = MultiPoint::from(vec![1, 2, 3]);
        assert_eq!(points.iter_points().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let contours = MultiContour::from(vec![Contour::open(vec![1, 2]), Contour::closed(vec![3, 4, 5])]);
        assert_eq!(contours.contours().count(), 2);
        assert_eq!(contours.parts()[1].points(), &[3, 4, 5]);

        let polygons = MultiPolygon::from(vec![Polygon::from(ClosedContour::new(vec![1, 2, 3]))]);
        assert_eq!(polygons.polygons().count(), 1);
    }
}
