use geotopo_types::cartesian::{Orientation, Point2d, Rect};
use serde::{Deserialize, Serialize};

/// Numeric tolerance used by every comparison of the engine.
///
/// Two values `a` and `b` are considered equal if `|a - b| <= epsilon * max(1, |a|, |b|)`. The orientation
/// determinant in [`Tolerance::side`] is compared with the product of the lengths of the two segments instead, so
/// the side predicate does not depend on the scale of the coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    epsilon: f64,
}

const CARTESIAN_EPSILON: f64 = 1e-12;
const GEOGRAPHIC_EPSILON: f64 = 1e-9;

impl Default for Tolerance {
    fn default() -> Self {
        Self::cartesian()
    }
}

impl Tolerance {
    /// Creates a tolerance with the given relative epsilon. Negative values are treated as zero.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
        }
    }

    /// Tolerance for projected (cartesian) coordinates.
    pub fn cartesian() -> Self {
        Self::new(CARTESIAN_EPSILON)
    }

    /// Coarser tolerance for angular (longitude/latitude) coordinates.
    pub fn geographic() -> Self {
        Self::new(GEOGRAPHIC_EPSILON)
    }

    /// Exact comparison, no tolerance at all.
    pub fn exact() -> Self {
        Self::new(0.0)
    }

    /// Relative epsilon of the tolerance.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Whether two values are equal within the tolerance.
    pub fn equals(&self, a: f64, b: f64) -> bool {
        a == b || approx::relative_eq!(a, b, epsilon = self.epsilon, max_relative = self.epsilon)
    }

    /// Whether two points are equal within the tolerance.
    pub fn points_equal(&self, a: &Point2d, b: &Point2d) -> bool {
        self.equals(a.x, b.x) && self.equals(a.y, b.y)
    }

    /// Absolute margin corresponding to the tolerance around the given value.
    pub fn margin(&self, value: f64) -> f64 {
        self.epsilon * value.abs().max(1.0)
    }

    /// Side of the point `r` relative to the directed line from `p` to `q`.
    pub fn side(&self, p: &Point2d, q: &Point2d, r: &Point2d) -> Orientation {
        let lhs = (q.y - p.y) * (r.x - q.x);
        let rhs = (q.x - p.x) * (r.y - q.y);
        let magnitude = (q.x - p.x).abs().max((q.y - p.y).abs())
            * (r.x - q.x).abs().max((r.y - q.y).abs());
        if (lhs - rhs).abs() <= self.epsilon * magnitude {
            Orientation::Collinear
        } else {
            Orientation::from_products(lhs, rhs)
        }
    }

    /// Whether the point `p` lies on the segment `a`-`b`, endpoints included.
    pub fn is_point_on_segment(&self, p: &Point2d, a: &Point2d, b: &Point2d) -> bool {
        if self.points_equal(p, a) || self.points_equal(p, b) {
            return true;
        }

        let envelope = Rect::new(a.x, a.y, b.x, b.y);
        let margin = self.margin(scale(&[*a, *b]));
        envelope.expand(margin).contains(p) && self.side(a, b, p) == Orientation::Collinear
    }

    /// Lexicographic comparison of points, equal points (within the tolerance) compare as equal.
    ///
    /// The ordering is not transitive, so it must not be used for sorting. Sort with [`lexicographic`] and apply the
    /// tolerance to neighbouring items instead.
    pub fn cmp_points(&self, a: &Point2d, b: &Point2d) -> std::cmp::Ordering {
        if self.points_equal(a, b) {
            return std::cmp::Ordering::Equal;
        }

        if self.equals(a.x, b.x) {
            a.y.total_cmp(&b.y)
        } else {
            a.x.total_cmp(&b.x)
        }
    }
}

/// Exact lexicographic order of points, by `x` and then by `y`.
pub(crate) fn lexicographic(a: &Point2d, b: &Point2d) -> std::cmp::Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Largest absolute coordinate of the points.
pub(crate) fn scale(points: &[Point2d]) -> f64 {
    points
        .iter()
        .fold(0.0, |acc: f64, p| acc.max(p.x.abs()).max(p.y.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_equality() {
        let tolerance = Tolerance::cartesian();
        assert!(tolerance.equals(1.0, 1.0 + 1e-14));
        assert!(!tolerance.equals(1.0, 1.0 + 1e-9));
        assert!(tolerance.equals(1e6, 1e6 + 1e-7));
        assert!(Tolerance::geographic().equals(1.0, 1.0 + 1e-10));
        assert!(!Tolerance::exact().equals(1.0, 1.0 + 1e-15));
    }

    #[test]
    fn side_is_scale_independent() {
        let tolerance = Tolerance::cartesian();
        let p = Point2d::new(0.0, 0.0);
        let q = Point2d::new(1e8, 1e8);
        assert_eq!(
            tolerance.side(&p, &q, &Point2d::new(2e8, 2e8 + 1e-6)),
            Orientation::Collinear
        );
        assert_eq!(
            tolerance.side(&p, &q, &Point2d::new(0.0, 1.0)),
            Orientation::Counterclockwise
        );
        assert_eq!(
            tolerance.side(&p, &q, &Point2d::new(1.0, 0.0)),
            Orientation::Clockwise
        );
    }

    #[test]
    fn side_at_small_scale() {
        let tolerance = Tolerance::cartesian();
        for scale in [1.0, 1e-4, 1e-7, 1e-10] {
            let p = Point2d::new(-scale, 2.0 * scale);
            let q = Point2d::new(2.0 * scale, 2.0 * scale);
            assert_eq!(
                tolerance.side(&p, &q, &Point2d::new(0.0, 4.0 * scale)),
                Orientation::Counterclockwise,
                "scale {scale}"
            );
            assert_eq!(
                tolerance.side(&p, &q, &Point2d::new(0.0, 0.0)),
                Orientation::Clockwise,
                "scale {scale}"
            );
            assert_eq!(
                tolerance.side(&p, &q, &Point2d::new(4.0 * scale, 2.0 * scale)),
                Orientation::Collinear,
                "scale {scale}"
            );
        }
    }

    #[test]
    fn point_on_segment() {
        let tolerance = Tolerance::cartesian();
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 2.0);
        assert!(tolerance.is_point_on_segment(&Point2d::new(1.0, 1.0), &a, &b));
        assert!(tolerance.is_point_on_segment(&b, &a, &b));
        assert!(!tolerance.is_point_on_segment(&Point2d::new(3.0, 3.0), &a, &b));
        assert!(!tolerance.is_point_on_segment(&Point2d::new(1.0, 1.5), &a, &b));
    }

    #[test]
    fn point_ordering() {
        let tolerance = Tolerance::cartesian();
        let a = Point2d::new(1.0, 5.0);
        let b = Point2d::new(2.0, 0.0);
        assert_eq!(tolerance.cmp_points(&a, &b), std::cmp::Ordering::Less);
        assert_eq!(
            tolerance.cmp_points(&a, &Point2d::new(1.0, 5.0 + 1e-15)),
            std::cmp::Ordering::Equal
        );
        assert_eq!(
            tolerance.cmp_points(&a, &Point2d::new(1.0, 4.0)),
            std::cmp::Ordering::Greater
        );
    }
}
