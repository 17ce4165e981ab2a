//! Error type used by the crate.

use geotopo_types::{GeoTopoTypesError, GeometryKind};
use thiserror::Error;

/// Errors returned by the topology operations.
///
/// Malformed geometries (rings with less than 3 points, zero length segments) are not errors: such parts are
/// skipped and the result is computed from the rest of the geometry.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// DE-9IM pattern is not 9 characters of `T`, `F`, `*`, `0`, `1`, `2`.
    #[error("invalid DE-9IM mask: {0}")]
    InvalidMask(String),

    /// DE-9IM matrix string is not 9 characters of `F`, `0`, `1`, `2`, `T`.
    #[error("invalid DE-9IM matrix: {0}")]
    InvalidMatrix(String),

    /// The operation is not defined for the given geometry kind.
    #[error("{operation} is not supported for {kind} geometries")]
    UnsupportedGeometry {
        /// Name of the operation.
        operation: &'static str,
        /// Kind of the offending geometry.
        kind: GeometryKind,
    },

    /// Error converting an input geometry.
    #[error(transparent)]
    Types(#[from] GeoTopoTypesError),
}
