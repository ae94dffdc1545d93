//! Spatial value types for the Boltline graph database driver.
//!
//! The server represents spatial values as a list of 2 or 3 coordinates
//! tagged with the integer code of a coordinate reference system (SRID).
//! This crate provides the immutable value types those wire values decode
//! into, one per registered SRID:
//!
//! | SRID | Variant              | Axes                        |
//! |------|----------------------|-----------------------------|
//! | 7203 | [`CartesianPoint2d`] | x, y                        |
//! | 9157 | [`CartesianPoint3d`] | x, y, z                     |
//! | 4326 | [`GeoPoint2d`]       | longitude, latitude         |
//! | 4979 | [`GeoPoint3d`]       | longitude, latitude, height |
//!
//! The protocol layer builds points with [`Point::hydrate`]:
//!
//! ```
//! use boltline_spatial::{Point, Srid};
//!
//! let point = Point::hydrate(Srid::WGS84_2D, &[12.9716, 55.6761])?;
//! let geo = point.as_geo_2d().unwrap();
//! assert_eq!(geo.longitude(), 12.9716);
//! assert_eq!(geo.latitude(), 55.6761);
//! assert_eq!(point.to_string(), "POINT(12.9716 55.6761)");
//! # Ok::<(), boltline_spatial::SpatialError>(())
//! ```
//!
//! Points are plain values: they compare by SRID plus coordinates, hash
//! consistently with equality, and serialize with `serde`. No coordinate
//! transformation, projection or distance math lives here; the optional
//! `geo-types` and `nalgebra` features provide conversions into the crates
//! that do.

pub mod cartesian;
pub mod crs;
pub mod error;
pub mod geo;
mod point;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "nalgebra")]
mod nalgebra;

pub use cartesian::{CartesianPoint2d, CartesianPoint3d};
pub use crs::{PointVariant, Srid};
pub use error::SpatialError;
pub use geo::{GeoPoint2d, GeoPoint3d};
pub use point::{Coordinates, GenericPoint, Point};
