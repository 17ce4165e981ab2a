//! Geometry model of the `geotopo` engine.
//!
//! The crate defines trait based geometries ([`Contour`], [`Polygon`], [`MultiContour`], [`MultiPolygon`],
//! [`MultiPoint`]), simple owned implementations of those traits in the [`impls`] module, and the closed set of
//! geometry kinds [`Geom`] that the relate and equals engines dispatch over.
//!
//! With the `geo-types` feature (enabled by default) the `geo-types` geometries can be converted into [`Geom`].

pub mod cartesian;
pub mod contour;
mod error;
pub mod geometry;
pub mod geometry_type;
pub mod impls;
pub mod multi_geometry;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geo-types")]
pub mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use error::GeoTopoTypesError;
pub use geometry::Geom;
pub use geometry_type::GeometryKind;
pub use multi_geometry::{MultiContour, MultiPoint, MultiPolygon};
pub use polygon::Polygon;
