use ::geo_types::{Coord, CoordNum, Rect, Triangle};

use crate::impls::{ClosedContour, Polygon};
use crate::Geom;

impl<T: CoordNum> From<::geo_types::Polygon<T>> for Polygon<Coord<T>> {
    fn from(value: ::geo_types::Polygon<T>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(ClosedContour::from).collect(),
        )
    }
}

impl<T: CoordNum> From<::geo_types::Polygon<T>> for Geom<Coord<T>> {
    fn from(value: ::geo_types::Polygon<T>) -> Self {
        Geom::Polygon(value.into())
    }
}

impl<T: CoordNum> From<Rect<T>> for Geom<Coord<T>> {
    fn from(value: Rect<T>) -> Self {
        Geom::Rect {
            min: value.min(),
            max: value.max(),
        }
    }
}

impl<T: CoordNum> From<Triangle<T>> for Geom<Coord<T>> {
    fn from(value: Triangle<T>) -> Self {
        Geom::ClosedContour(ClosedContour::new(value.to_array().to_vec()))
    }
}
