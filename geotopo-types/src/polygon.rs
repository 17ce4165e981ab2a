use crate::contour::Contour;
use crate::segment::Segment;

/// Polygon geometry: one outer ring and zero or more holes.
///
/// Rings are closed contours. The relate engine does not require any particular ring orientation, it derives the
/// side of the interior from the signed area of every ring.
pub trait Polygon {
    /// Ring type.
    type Contour: Contour;

    /// Outer ring of the polygon.
    fn outer_contour(&self) -> &Self::Contour;
    /// Iterates over the holes.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all rings of the polygon starting with the outer one.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Iterates over all segments of all rings.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = Segment<'_, <Self::Contour as Contour>::Point>> {
        self.iter_contours().flat_map(Self::Contour::iter_segments)
    }

    /// Whether the polygon has at least one hole.
    fn has_holes(&self) -> bool {
        self.inner_contours().next().is_some()
    }
}
