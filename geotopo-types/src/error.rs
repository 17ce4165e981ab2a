//! Errors of the geometry model.

use thiserror::Error;

/// Errors returned when building a [`Geom`](crate::Geom) from foreign geometry types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoTopoTypesError {
    /// The input geometry has no counterpart among the supported geometry kinds.
    #[error("cannot convert geometry: {0}")]
    Conversion(String),
}
