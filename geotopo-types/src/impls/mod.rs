//! Owned geometries used as the input and output of the engine.

mod contour;
mod multi_geometry;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use multi_geometry::{MultiContour, MultiPoint, MultiPolygon};
pub use polygon::Polygon;
