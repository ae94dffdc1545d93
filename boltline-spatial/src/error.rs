//! Error type used by the crate.

use thiserror::Error;

use crate::crs::Srid;

/// Errors produced when constructing point values from wire data.
///
/// Both variants are deterministic input validation failures. They are never
/// retried internally and should be surfaced to the caller, where they
/// typically show up as a protocol deserialization failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpatialError {
    /// No point variant is registered for the given SRID.
    #[error("SRID {0} is not supported")]
    UnsupportedSrid(Srid),
    /// The coordinate count is not 2 or 3.
    #[error("{0}-dimensional point values are not supported")]
    UnsupportedDimension(usize),
}
