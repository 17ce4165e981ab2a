use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
pub use nalgebra::Point2;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, ToPrimitive};

/// 2d point with `f64` coordinates. All computations of the relate engine are done with this type.
pub type Point2d = Point2<f64>;

impl<Num> CartesianPoint2d for Point2<Num>
where
    Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive + ToPrimitive,
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num> NewCartesianPoint2d<Num> for Point2<Num>
where
    Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive + ToPrimitive,
{
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}
