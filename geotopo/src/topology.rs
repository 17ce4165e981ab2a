use geotopo_types::cartesian::{CartesianPoint2d, Point2d};
use geotopo_types::impls::MultiPolygon;
use geotopo_types::Geom;
use serde::{Deserialize, Serialize};

use crate::relate::{relate_views, IntersectionMatrix, Mask, MaskMatcher, RelateResult};
use crate::view::GeometryView;
use crate::{overlay, Tolerance, TopologyError};

const DISJOINT: [Mask; 1] = [Mask::from_bytes(b"FF*FF****")];
const INTERSECTS: [Mask; 4] = [
    Mask::from_bytes(b"T********"),
    Mask::from_bytes(b"*T*******"),
    Mask::from_bytes(b"***T*****"),
    Mask::from_bytes(b"****T****"),
];
const TOUCHES: [Mask; 3] = [
    Mask::from_bytes(b"FT*******"),
    Mask::from_bytes(b"F**T*****"),
    Mask::from_bytes(b"F***T****"),
];
const WITHIN: [Mask; 1] = [Mask::from_bytes(b"T*F**F***")];
const CONTAINS: [Mask; 1] = [Mask::from_bytes(b"T*****FF*")];
const COVERS: [Mask; 4] = [
    Mask::from_bytes(b"T*****FF*"),
    Mask::from_bytes(b"*T****FF*"),
    Mask::from_bytes(b"***T**FF*"),
    Mask::from_bytes(b"****T*FF*"),
];
const COVERED_BY: [Mask; 4] = [
    Mask::from_bytes(b"T*F**F***"),
    Mask::from_bytes(b"*TF**F***"),
    Mask::from_bytes(b"**FT*F***"),
    Mask::from_bytes(b"**F*TF***"),
];
const CROSSES_LOWER_DIMENSION: Mask = Mask::from_bytes(b"T*T******");
const CROSSES_HIGHER_DIMENSION: Mask = Mask::from_bytes(b"T*****T**");
const CROSSES_LINES: Mask = Mask::from_bytes(b"0********");
const OVERLAPS: Mask = Mask::from_bytes(b"T*T***T**");
const OVERLAPS_LINES: Mask = Mask::from_bytes(b"1*T***T**");

/// Entry point of the engine: relate, named predicates, equality and union of two geometries.
///
/// `Topology` only holds the configuration of the computations, so it is cheap to copy and can be shared between
/// threads.
///
/// ```
/// use geotopo::Topology;
/// use geotopo::types::Geom;
/// use geotopo::types::cartesian::Point2d;
/// use geotopo::types::impls::Contour;
///
/// let a: Geom<Point2d> = Contour::open(vec![Point2d::new(1.0, 1.0), Point2d::new(3.0, 3.0)]).into();
/// let b: Geom<Point2d> = Contour::open(vec![Point2d::new(3.0, 3.0), Point2d::new(1.0, 1.0)]).into();
///
/// let topology = Topology::default();
/// assert!(topology.equals(&a, &b));
/// assert_eq!(topology.relate(&a, &b).to_string(), "1FFF0FFF2");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    tolerance: Tolerance,
    non_simple_equals: bool,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            non_simple_equals: true,
        }
    }
}

impl Topology {
    /// Returns a copy with the given tolerance.
    pub fn with_tolerance(&self, tolerance: Tolerance) -> Self {
        Self { tolerance, ..*self }
    }

    /// Returns a copy with the non-simple equality check switched on or off.
    ///
    /// With the check on, linear geometries that pass the same segments several times (retraced or overlapping
    /// linestrings) are compared by the set of points they cover. With the check off such geometries are compared
    /// segment by segment, which is faster but reports them as not equal to their simple counterparts.
    pub fn with_non_simple_equals(&self, non_simple_equals: bool) -> Self {
        Self {
            non_simple_equals,
            ..*self
        }
    }

    /// Sets the tolerance.
    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        self.tolerance = tolerance;
    }

    /// Sets the non-simple equality check. See [`Topology::with_non_simple_equals`].
    pub fn set_non_simple_equals(&mut self, non_simple_equals: bool) {
        self.non_simple_equals = non_simple_equals;
    }

    /// Tolerance of the comparisons.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Whether the non-simple equality check is on.
    pub fn non_simple_equals(&self) -> bool {
        self.non_simple_equals
    }

    /// DE-9IM matrix of two geometries.
    pub fn relate<P, Q>(&self, a: &Geom<P>, b: &Geom<Q>) -> IntersectionMatrix
    where
        P: CartesianPoint2d,
        Q: CartesianPoint2d,
    {
        let mut matrix = IntersectionMatrix::new();
        self.relate_into(a, b, &mut matrix);
        log::debug!("Relate {} with {}: {matrix}", a.kind(), b.kind());
        matrix
    }

    /// Relates two geometries, writing the result into a custom [`RelateResult`].
    ///
    /// The computation stops as soon as the result reports [`RelateResult::interrupt`].
    pub fn relate_into<P, Q>(&self, a: &Geom<P>, b: &Geom<Q>, result: &mut impl RelateResult)
    where
        P: CartesianPoint2d,
        Q: CartesianPoint2d,
    {
        let a = GeometryView::new(a, &self.tolerance);
        let b = GeometryView::new(b, &self.tolerance);
        relate_views(&a, &b, &self.tolerance, result);
    }

    /// Whether the DE-9IM matrix of two geometries matches the pattern, e.g. `T*F**F***`.
    pub fn relate_pattern<P, Q>(
        &self,
        a: &Geom<P>,
        b: &Geom<Q>,
        pattern: &str,
    ) -> Result<bool, TopologyError>
    where
        P: CartesianPoint2d,
        Q: CartesianPoint2d,
    {
        let mask: Mask = pattern.parse()?;
        Ok(self.matches(a, b, [mask]))
    }

    /// Whether the geometries cover the same set of points.
    ///
    /// Rings with different start points or orientation, and linestrings with additional collinear vertices are
    /// equal.
    pub fn equals<P, Q>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool
    where
        P: CartesianPoint2d,
        Q: CartesianPoint2d,
    {
        crate::equals::equals(a, b, &self.tolerance, self.non_simple_equals)
    }

    /// Union of two areal geometries.
    ///
    /// Returns [`TopologyError::UnsupportedGeometry`] if any of the geometries is not areal.
    pub fn union<P, Q>(&self, a: &Geom<P>, b: &Geom<Q>) -> Result<MultiPolygon<Point2d>, TopologyError>
    where
        P: CartesianPoint2d,
        Q: CartesianPoint2d,
    {
        let a = GeometryView::new(a, &self.tolerance);
        let b = GeometryView::new(b, &self.tolerance);
        overlay::union(&a, &b, &self.tolerance)
    }

    /// The geometries have no point in common.
    pub fn disjoint<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, DISJOINT)
    }

    /// The geometries have at least one point in common.
    pub fn intersects<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, INTERSECTS)
    }

    /// The geometries have common points, but their interiors do not intersect.
    pub fn touches<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, TOUCHES)
    }

    /// `a` lies in `b` and the interiors intersect.
    pub fn within<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, WITHIN)
    }

    /// `b` lies in `a` and the interiors intersect.
    pub fn contains<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, CONTAINS)
    }

    /// No point of `b` is in the exterior of `a`.
    pub fn covers<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, COVERS)
    }

    /// No point of `a` is in the exterior of `b`.
    pub fn covered_by<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        self.matches(a, b, COVERED_BY)
    }

    /// The interiors intersect in a geometry of lower dimension than the maximum dimension of the inputs, and
    /// neither geometry contains the other one.
    pub fn crosses<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        let mask = match (a.dimension(), b.dimension()) {
            (0, 1) | (0, 2) | (1, 2) => CROSSES_LOWER_DIMENSION,
            (1, 0) | (2, 0) | (2, 1) => CROSSES_HIGHER_DIMENSION,
            (1, 1) => CROSSES_LINES,
            _ => return false,
        };
        self.matches(a, b, [mask])
    }

    /// The geometries have the same dimension, their interiors intersect in a geometry of that dimension, and
    /// neither geometry contains the other one.
    pub fn overlaps<P: CartesianPoint2d, Q: CartesianPoint2d>(&self, a: &Geom<P>, b: &Geom<Q>) -> bool {
        let mask = match (a.dimension(), b.dimension()) {
            (0, 0) | (2, 2) => OVERLAPS,
            (1, 1) => OVERLAPS_LINES,
            _ => return false,
        };
        self.matches(a, b, [mask])
    }

    fn matches<P, Q>(&self, a: &Geom<P>, b: &Geom<Q>, masks: impl IntoIterator<Item = Mask>) -> bool
    where
        P: CartesianPoint2d,
        Q: CartesianPoint2d,
    {
        let mut matcher = MaskMatcher::new(masks);
        self.relate_into(a, b, &mut matcher);
        matcher.result()
    }
}
