//! Geotopo is a topological relationship engine for 2d geometries.
//!
//! It answers how two geometries relate to each other: it computes their
//! [DE-9IM](https://en.wikipedia.org/wiki/DE-9IM) [`IntersectionMatrix`](relate::IntersectionMatrix), checks the
//! named OGC predicates (`intersects`, `touches`, `within` etc.), decides whether two geometries are geometrically
//! equal, and computes the union of areal geometries.
//!
//! # Quick start
//!
//! ```
//! use geotopo::types::Geom;
//! use geotopo::types::cartesian::Point2d;
//! use geotopo::types::impls::Polygon;
//!
//! let square = |x: f64, y: f64| -> Geom<Point2d> {
//!     Polygon::from(vec![
//!         Point2d::new(x, y),
//!         Point2d::new(x, y + 1.0),
//!         Point2d::new(x + 1.0, y + 1.0),
//!         Point2d::new(x + 1.0, y),
//!     ])
//!     .into()
//! };
//!
//! let a = square(0.0, 0.0);
//! let b = square(1.0, 0.0);
//!
//! assert!(geotopo::touches(&a, &b));
//! assert_eq!(geotopo::relate(&a, &b).to_string(), "FF2F11212");
//!
//! let union = geotopo::union(&a, &b).unwrap();
//! assert_eq!(union.parts().len(), 1);
//! ```
//!
//! # Geometries
//!
//! All operations take geometries as [`Geom`](types::Geom), the closed set of supported geometry kinds. Any point
//! type that implements [`CartesianPoint2d`](types::cartesian::CartesianPoint2d) can be used. With the `geo-types`
//! feature (enabled by default) `geo_types` geometries can be converted into `Geom` with `TryFrom`.
//!
//! Before any computation the geometry is normalised: consecutive duplicate points are removed and degenerate parts
//! (linestrings with less than 2 distinct points, rings with less than 3) are skipped. Malformed geometries are not
//! reported as errors, the result is computed for what is left of them.
//!
//! # Configuration
//!
//! The free functions of this crate use the default [`Topology`]. To change the numeric [`Tolerance`] or to switch
//! off the non-simple equality check, create a `Topology` and call the same operations on it.

mod equals;
mod error;
mod intersection;
mod noding;
mod overlay;
pub mod relate;
mod tolerance;
mod topology;
mod view;

pub use error::TopologyError;
pub use geotopo_types as types;
pub use tolerance::Tolerance;
pub use topology::Topology;
pub use view::{GeometryView, Shape};

use geotopo_types::cartesian::{CartesianPoint2d, Point2d};
use geotopo_types::impls::MultiPolygon;
use geotopo_types::Geom;
use relate::IntersectionMatrix;

/// DE-9IM matrix of two geometries. See [`Topology::relate`].
pub fn relate<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> IntersectionMatrix {
    Topology::default().relate(a, b)
}

/// Whether the DE-9IM matrix of two geometries matches the pattern. See [`Topology::relate_pattern`].
pub fn relate_pattern<P: CartesianPoint2d, Q: CartesianPoint2d>(
    a: &Geom<P>,
    b: &Geom<Q>,
    pattern: &str,
) -> Result<bool, TopologyError> {
    Topology::default().relate_pattern(a, b, pattern)
}

/// Whether the geometries are geometrically equal. See [`Topology::equals`].
pub fn equals<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().equals(a, b)
}

/// Union of two areal geometries. See [`Topology::union`].
pub fn union<P: CartesianPoint2d, Q: CartesianPoint2d>(
    a: &Geom<P>,
    b: &Geom<Q>,
) -> Result<MultiPolygon<Point2d>, TopologyError> {
    Topology::default().union(a, b)
}

/// See [`Topology::disjoint`].
pub fn disjoint<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().disjoint(a, b)
}

/// See [`Topology::intersects`].
pub fn intersects<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().intersects(a, b)
}

/// See [`Topology::touches`].
pub fn touches<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().touches(a, b)
}

/// See [`Topology::within`].
pub fn within<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().within(a, b)
}

/// See [`Topology::contains`].
pub fn contains<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().contains(a, b)
}

/// See [`Topology::covers`].
pub fn covers<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().covers(a, b)
}

/// See [`Topology::covered_by`].
pub fn covered_by<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().covered_by(a, b)
}

/// See [`Topology::crosses`].
pub fn crosses<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().crosses(a, b)
}

/// See [`Topology::overlaps`].
pub fn overlaps<P: CartesianPoint2d, Q: CartesianPoint2d>(a: &Geom<P>, b: &Geom<Q>) -> bool {
    Topology::default().overlaps(a, b)
}
