//! See documentation for [`GeometryKind`].
use serde::{Deserialize, Serialize};

/// Kind tag of a [`Geom`](crate::Geom).
///
/// Relate and equals select their algorithm by the pair of kinds of the compared geometries. Most algorithms only
/// care about the [dimension group](GeometryKind::dimension) of a kind, but some (box equality, for example) look at
/// the exact kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// Single point.
    Point,
    /// Set of points.
    MultiPoint,
    /// Open or closed line.
    Linestring,
    /// Closed ring treated as an areal geometry.
    Ring,
    /// Set of lines.
    MultiLinestring,
    /// Polygon with holes.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Axis aligned rectangle.
    Box,
    /// Single straight segment.
    Segment,
}

impl GeometryKind {
    /// Topological dimension of the kind: `0` for points, `1` for lines and `2` for areas.
    pub fn dimension(&self) -> u8 {
        match self {
            GeometryKind::Point | GeometryKind::MultiPoint => 0,
            GeometryKind::Linestring | GeometryKind::MultiLinestring | GeometryKind::Segment => 1,
            GeometryKind::Ring
            | GeometryKind::Polygon
            | GeometryKind::MultiPolygon
            | GeometryKind::Box => 2,
        }
    }

    /// Whether the kind is one of the `Multi*` collections.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint | GeometryKind::MultiLinestring | GeometryKind::MultiPolygon
        )
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryKind::Point => "point",
            GeometryKind::MultiPoint => "multipoint",
            GeometryKind::Linestring => "linestring",
            GeometryKind::Ring => "ring",
            GeometryKind::MultiLinestring => "multilinestring",
            GeometryKind::Polygon => "polygon",
            GeometryKind::MultiPolygon => "multipolygon",
            GeometryKind::Box => "box",
            GeometryKind::Segment => "segment",
        };
        f.write_str(name)
    }
}
