use ::geo_types::{coord, Coord, CoordNum, Point};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::Geom;

/// Numeric types `geo-types` coordinates can be used with in the engine.
pub trait GeoTypesNum: CoordNum + Bounded + Scalar + FromPrimitive {}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> GeoTypesNum for T {}

impl<T: GeoTypesNum> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: GeoTypesNum> NewCartesianPoint2d<T> for Coord<T> {
    fn new(x: T, y: T) -> Self {
        coord!(x: x, y: y)
    }
}

impl<T: GeoTypesNum> CartesianPoint2d for Point<T> {
    type Num = T;

    fn x(&self) -> T {
        self.0.x
    }

    fn y(&self) -> T {
        self.0.y
    }
}

impl<T: GeoTypesNum> NewCartesianPoint2d<T> for Point<T> {
    fn new(x: T, y: T) -> Self {
        Point::new(x, y)
    }
}

impl<T: CoordNum> From<Point<T>> for Geom<Coord<T>> {
    fn from(value: Point<T>) -> Self {
        Geom::Point(value.0)
    }
}
