use ::geo_types::{Coord, CoordNum, MultiLineString, MultiPoint, MultiPolygon};

use crate::impls;
use crate::Geom;

impl<T: CoordNum> From<MultiPoint<T>> for impls::MultiPoint<Coord<T>> {
    fn from(value: MultiPoint<T>) -> Self {
        value.0.into_iter().map(|p| p.0).collect::<Vec<_>>().into()
    }
}

impl<T: CoordNum> From<MultiLineString<T>> for impls::MultiContour<Coord<T>> {
    fn from(value: MultiLineString<T>) -> Self {
        value
            .0
            .into_iter()
            .map(impls::Contour::from)
            .collect::<Vec<_>>()
            .into()
    }
}

impl<T: CoordNum> From<MultiPolygon<T>> for impls::MultiPolygon<Coord<T>> {
    fn from(value: MultiPolygon<T>) -> Self {
        value
            .0
            .into_iter()
            .map(impls::Polygon::from)
            .collect::<Vec<_>>()
            .into()
    }
}

impl<T: CoordNum> From<MultiPoint<T>> for Geom<Coord<T>> {
    fn from(value: MultiPoint<T>) -> Self {
        Geom::MultiPoint(value.into())
    }
}

impl<T: CoordNum> From<MultiLineString<T>> for Geom<Coord<T>> {
    fn from(value: MultiLineString<T>) -> Self {
        Geom::MultiContour(value.into())
    }
}

impl<T: CoordNum> From<MultiPolygon<T>> for Geom<Coord<T>> {
    fn from(value: MultiPolygon<T>) -> Self {
        Geom::MultiPolygon(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::geo_types::{line_string, polygon};

    #[test]
    fn multi_linestring_keeps_closed_parts() {
        let lines = MultiLineString::new(vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)],
        ]);
        let contours = impls::MultiContour::from(lines);

        assert_eq!(contours.parts().len(), 2);
        assert_eq!(contours.parts()[1].points().len(), 3);
    }

    #[test]
    fn multi_polygon_rings() {
        let polygons = MultiPolygon::new(vec![
            polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0), (x: 1.0, y: 1.0)],
            polygon![(x: 5.0, y: 5.0), (x: 5.0, y: 6.0), (x: 6.0, y: 6.0)],
        ]);
        let Geom::MultiPolygon(converted) = Geom::<Coord<f64>>::from(polygons) else {
            panic!("expected a multipolygon");
        };

        assert_eq!(converted.parts().len(), 2);
        assert_eq!(converted.parts()[0].outer_contour.points.len(), 3);
    }
}
