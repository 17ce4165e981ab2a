use serde::{Deserialize, Serialize};

use crate::impls::contour::ClosedContour;

/// Owned [`Polygon`](crate::Polygon): exterior ring and holes, none of them repeating the first point at the end.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Exterior ring.
    pub outer_contour: ClosedContour<P>,
    /// Holes.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon from its exterior ring and holes.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = ClosedContour<P>;

    fn outer_contour(&self) -> &ClosedContour<P> {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ ClosedContour<P>> {
        self.inner_contours.iter()
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(outer_contour: ClosedContour<P>) -> Self {
        Self::new(outer_contour, vec![])
    }
}

/// Polygon without holes with the given exterior points.
impl<P> From<Vec<P>> for Polygon<P> {
    fn from(points: Vec<P>) -> Self {
        ClosedContour::new(points).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon as _;

    #[test]
    fn rings_start_with_exterior() {
        let polygon = Polygon::new(
            ClosedContour::new(vec![0, 1, 2, 3]),
            vec![ClosedContour::new(vec![4, 5, 6])],
        );

        let sizes: Vec<_> = polygon.iter_contours().map(|ring| ring.points.len()).collect();
        assert_eq!(sizes, vec![4, 3]);
        assert!(polygon.has_holes());
        assert_eq!(polygon.iter_segments().count(), 7);
        assert!(!Polygon::from(vec![0, 1, 2]).has_holes());
    }
}
