//! Planar geometry: points with `x`/`y` coordinates, orientation of point triplets, envelopes and ring winding.
//!
//! The relate engine converts every input point into [`Point2d`] and works with `f64` coordinates only.

mod impls;
mod orient;
mod rect;
mod traits;

pub use impls::{Point2, Point2d, Vector2};
pub use orient::Orientation;
pub use rect::Rect;
pub use traits::{
    CartesianClosedContour, CartesianPoint2d, NewCartesianPoint2d, Winding,
};
