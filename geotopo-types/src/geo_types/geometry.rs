use ::geo_types::{Coord, CoordNum, Geometry};

use crate::error::GeoTopoTypesError;
use crate::Geom;

impl<T: CoordNum> TryFrom<Geometry<T>> for Geom<Coord<T>> {
    type Error = GeoTopoTypesError;

    fn try_from(value: Geometry<T>) -> Result<Self, Self::Error> {
        Ok(match value {
            Geometry::Point(v) => v.into(),
            Geometry::Line(v) => v.into(),
            Geometry::LineString(v) => v.into(),
            Geometry::Polygon(v) => v.into(),
            Geometry::MultiPoint(v) => v.into(),
            Geometry::MultiLineString(v) => v.into(),
            Geometry::MultiPolygon(v) => v.into(),
            Geometry::Rect(v) => v.into(),
            Geometry::Triangle(v) => v.into(),
            Geometry::GeometryCollection(_) => {
                return Err(GeoTopoTypesError::Conversion(
                    "geometry collections are not supported".into(),
                ))
            }
        })
    }
}
