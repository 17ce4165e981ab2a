//! Conversions from the `geo-types` geometries.
//!
//! `geo_types::Coord` and `geo_types::Point` implement [`CartesianPoint2d`](crate::cartesian::CartesianPoint2d), and
//! every `geo-types` geometry except `GeometryCollection` converts into a [`Geom`](crate::Geom).
//! Closed `LineString`s used as polygon rings lose their duplicated closing point in the conversion.

mod geometry;
mod linestring;
mod multi;
mod point;
mod polygon;

pub use point::GeoTypesNum;
