mod point;

pub use nalgebra::Vector2;
pub use point::{Point2, Point2d};
