use ::geo_types::{Coord, CoordNum, Line, LineString};

use crate::impls::{ClosedContour, Contour};
use crate::Geom;

/// Points of a `LineString` without the duplicated closing point.
pub(crate) fn ring_points<T: CoordNum>(line: &LineString<T>) -> Vec<Coord<T>> {
    let mut points = line.0.clone();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

impl<T: CoordNum> From<LineString<T>> for Contour<Coord<T>> {
    fn from(value: LineString<T>) -> Self {
        if value.is_closed() && value.0.len() > 2 {
            Contour::closed(ring_points(&value))
        } else {
            Contour::open(value.0)
        }
    }
}

impl<T: CoordNum> From<LineString<T>> for ClosedContour<Coord<T>> {
    fn from(value: LineString<T>) -> Self {
        ClosedContour::new(ring_points(&value))
    }
}

impl<T: CoordNum> From<LineString<T>> for Geom<Coord<T>> {
    fn from(value: LineString<T>) -> Self {
        Geom::Contour(value.into())
    }
}

impl<T: CoordNum> From<Line<T>> for Geom<Coord<T>> {
    fn from(value: Line<T>) -> Self {
        Geom::Segment {
            start: value.start,
            end: value.end,
        }
    }
}
