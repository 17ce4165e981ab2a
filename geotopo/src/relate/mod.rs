//! DE-9IM relate engine.
//!
//! The result of relating two geometries is accumulated in a [`RelateResult`]. The full
//! [`IntersectionMatrix`] is one of the results, [`MaskMatcher`] is another one that only checks whether the
//! matrix matches some [`Mask`]s and stops the computation as soon as the answer is known.
//!
//! The algorithm is selected by the dimensions of the two geometries:
//!
//! * a puntal geometry with anything: every point is located in the other geometry,
//! * two linear geometries: both are split at their intersection points and the pieces are classified,
//! * linear and areal geometries: turns between the linestrings and the polygon boundaries are analysed along
//!   the linestrings,
//! * two areal geometries: the boundary of each one is related with the other one.

mod areal_areal;
mod boundary;
mod linear_areal;
mod linear_linear;
mod locate;
mod matrix;
mod point_geometry;
mod turns;

pub(crate) use locate::{locate_point, ring_contains};
pub use matrix::{
    Dimension, IntersectionMatrix, Location, Mask, MaskCell, MaskMatcher, RelateResult, Transposed,
};

use crate::view::{GeometryView, Shape};
use crate::Tolerance;

use areal_areal::relate_areal_areal;
use boundary::BoundaryChecker;
use linear_areal::{relate_areal_linear, relate_linear_areal};
use linear_linear::relate_linear_linear;
use point_geometry::{relate_geometry_point, relate_point_geometry};

/// Relates two normalised geometries, writing the result into `result`.
pub(crate) fn relate_views(
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    if a.is_empty() || b.is_empty() {
        relate_empty(a, b, tolerance, result);
        return;
    }

    match (a.dimension(), b.dimension()) {
        (0, _) => relate_point_geometry(a, b, tolerance, result),
        (_, 0) => relate_geometry_point(a, b, tolerance, result),
        (1, 1) => relate_linear_linear(a, b, tolerance, result),
        (1, _) => relate_linear_areal(a, b, tolerance, result),
        (_, 1) => relate_areal_linear(a, b, tolerance, result),
        _ => relate_areal_areal(a, b, tolerance, result),
    }
}

/// If one of the geometries is empty, the other one lies completely in its exterior.
fn relate_empty(
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    result.set(Location::Exterior, Location::Exterior, Dimension::Two);

    if let Some((interior, boundary)) = exterior_cells(a, tolerance) {
        result.set(Location::Interior, Location::Exterior, interior);
        if let Some(boundary) = boundary {
            result.set(Location::Boundary, Location::Exterior, boundary);
        }
    }

    if let Some((interior, boundary)) = exterior_cells(b, tolerance) {
        result.set(Location::Exterior, Location::Interior, interior);
        if let Some(boundary) = boundary {
            result.set(Location::Exterior, Location::Boundary, boundary);
        }
    }
}

/// Dimensions of the interior and the boundary of a non-empty geometry.
fn exterior_cells(
    view: &GeometryView,
    tolerance: &Tolerance,
) -> Option<(Dimension, Option<Dimension>)> {
    if view.is_empty() {
        return None;
    }

    let boundary = match view.shape() {
        Shape::Puntal(_) => None,
        Shape::Linear(_) => BoundaryChecker::new(view, tolerance)
            .has_boundary()
            .then_some(Dimension::Zero),
        Shape::Areal(_) => Some(Dimension::One),
    };

    Some((Dimension::from_dimension(view.dimension()), boundary))
}
