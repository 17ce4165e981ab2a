use serde::{Deserialize, Serialize};

use crate::geometry_type::GeometryKind;
use crate::impls::{ClosedContour, Contour, MultiContour, MultiPoint, MultiPolygon, Polygon};

/// Any geometry supported by the relate and equals engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<P> {
    /// Point geometry.
    Point(P),
    /// MultiPoint geometry.
    MultiPoint(MultiPoint<P>),
    /// Linestring. A closed contour here is still a line (without boundary), not an area.
    Contour(Contour<P>),
    /// Ring, an areal geometry bounded by a single closed contour.
    ClosedContour(ClosedContour<P>),
    /// MultiLinestring geometry.
    MultiContour(MultiContour<P>),
    /// Polygon geometry.
    Polygon(Polygon<P>),
    /// MultiPolygon geometry.
    MultiPolygon(MultiPolygon<P>),
    /// Axis aligned box given by its minimum and maximum corners.
    Rect {
        /// Corner with the smallest coordinates.
        min: P,
        /// Corner with the largest coordinates.
        max: P,
    },
    /// Straight segment.
    Segment {
        /// First point of the segment.
        start: P,
        /// Second point of the segment.
        end: P,
    },
}

impl<P> Geom<P> {
    /// Kind tag of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::Contour(_) => GeometryKind::Linestring,
            Geom::ClosedContour(_) => GeometryKind::Ring,
            Geom::MultiContour(_) => GeometryKind::MultiLinestring,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geom::Rect { .. } => GeometryKind::Box,
            Geom::Segment { .. } => GeometryKind::Segment,
        }
    }

    /// Topological dimension of the geometry kind.
    pub fn dimension(&self) -> u8 {
        self.kind().dimension()
    }
}

impl<P> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Self::Point(value)
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<ClosedContour<P>> for Geom<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self::ClosedContour(value)
    }
}

impl<P> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}
