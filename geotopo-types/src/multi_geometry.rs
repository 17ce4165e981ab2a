//! Traits of the geometries made of several parts of the same kind.
//!
//! Parts are not required to be disjoint. The relate engine treats a multi-geometry as the union of its parts,
//! with the exception of the boundary of linear geometries, which follows the mod-2 rule: an endpoint shared by an
//! even number of parts is in the interior.

use crate::contour::Contour;
use crate::polygon::Polygon;

/// Set of points. Duplicated points do not change the set.
pub trait MultiPoint {
    /// Point type.
    type Point;

    /// Iterates over the points of the set.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

/// Several contours, the multi-linestring of OGC.
pub trait MultiContour {
    /// Contour type.
    type Contour: Contour;

    /// Iterates over the contours.
    fn contours(&self) -> impl Iterator<Item = &Self::Contour>;
}

/// Several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over the polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;
}
