//! Geographic (WGS84) point variants.

use std::fmt;
use std::hash::{Hash, Hasher};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::crs::Srid;
use crate::error::SpatialError;
use crate::point::{hash_point, write_point, Coordinates, Point};

/// A 2-dimensional point on the surface of the WGS84 ellipsoid.
///
/// Coordinates are stored in wire order: longitude first, then latitude,
/// both in degrees. No range validation is performed; a longitude of 200°
/// is stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoPoint2d {
    coords: Coordinates,
}

impl GeoPoint2d {
    /// SRID under which this variant is registered.
    pub const SRID: Srid = Srid::WGS84_2D;

    /// Creates a new point from longitude and latitude (in degrees).
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            coords: Coordinates::Two([longitude, latitude]),
        }
    }

    /// Creates a new point from latitude and longitude (in degrees).
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }

    pub(crate) fn from_coordinates(coords: Coordinates) -> Self {
        Self { coords }
    }

    /// Longitude of the point, in degrees.
    pub fn longitude(&self) -> f64 {
        self.coords.as_slice()[0]
    }

    /// Latitude of the point, in degrees.
    pub fn latitude(&self) -> f64 {
        self.coords.as_slice()[1]
    }

    /// SRID of the point.
    pub fn srid(&self) -> Srid {
        Self::SRID
    }

    /// Coordinates of the point, in declared order.
    pub fn coordinates(&self) -> &[f64] {
        self.coords.as_slice()
    }
}

impl fmt::Display for GeoPoint2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates())
    }
}

impl Hash for GeoPoint2d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_point(self.srid(), self.coordinates(), state);
    }
}

impl Eq for GeoPoint2d {}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl From<GeoPoint2d> for Point {
    fn from(point: GeoPoint2d) -> Self {
        Point::Geo2d(point)
    }
}

impl TryFrom<Point> for GeoPoint2d {
    type Error = SpatialError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        match point {
            Point::Geo2d(point) => Ok(point),
            Point::Generic(generic) if generic.srid() == Self::SRID => {
                Ok(Self::from_coordinates(generic.coords()))
            }
            other => Err(SpatialError::UnsupportedSrid(other.srid())),
        }
    }
}

impl PartialEq<Point> for GeoPoint2d {
    fn eq(&self, other: &Point) -> bool {
        self.srid() == other.srid() && self.coordinates() == other.coordinates()
    }
}

impl PartialEq<GeoPoint2d> for Point {
    fn eq(&self, other: &GeoPoint2d) -> bool {
        other == self
    }
}

/// A 3-dimensional point on the WGS84 ellipsoid: longitude, latitude and
/// height above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoPoint3d {
    coords: Coordinates,
}

impl GeoPoint3d {
    /// SRID under which this variant is registered.
    pub const SRID: Srid = Srid::WGS84_3D;

    /// Creates a new point from longitude, latitude (in degrees) and height
    /// above the ellipsoid (in meters).
    pub const fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            coords: Coordinates::Three([longitude, latitude, height]),
        }
    }

    pub(crate) fn from_coordinates(coords: Coordinates) -> Self {
        Self { coords }
    }

    /// Longitude of the point, in degrees.
    pub fn longitude(&self) -> f64 {
        self.coords.as_slice()[0]
    }

    /// Latitude of the point, in degrees.
    pub fn latitude(&self) -> f64 {
        self.coords.as_slice()[1]
    }

    /// Height of the point above the ellipsoid, in meters.
    ///
    /// A point hydrated from 2-dimensional wire data has no height; `None`
    /// is returned in that case.
    pub fn height(&self) -> Option<f64> {
        self.coords.as_slice().get(2).copied()
    }

    /// SRID of the point.
    pub fn srid(&self) -> Srid {
        Self::SRID
    }

    /// Coordinates of the point, in declared order.
    pub fn coordinates(&self) -> &[f64] {
        self.coords.as_slice()
    }
}

impl fmt::Display for GeoPoint3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates())
    }
}

impl Hash for GeoPoint3d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_point(self.srid(), self.coordinates(), state);
    }
}

impl Eq for GeoPoint3d {}

impl AbsDiffEq for GeoPoint3d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl From<GeoPoint3d> for Point {
    fn from(point: GeoPoint3d) -> Self {
        Point::Geo3d(point)
    }
}

impl TryFrom<Point> for GeoPoint3d {
    type Error = SpatialError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        match point {
            Point::Geo3d(point) => Ok(point),
            Point::Generic(generic) if generic.srid() == Self::SRID => {
                Ok(Self::from_coordinates(generic.coords()))
            }
            other => Err(SpatialError::UnsupportedSrid(other.srid())),
        }
    }
}

impl PartialEq<Point> for GeoPoint3d {
    fn eq(&self, other: &Point) -> bool {
        self.srid() == other.srid() && self.coordinates() == other.coordinates()
    }
}

impl PartialEq<GeoPoint3d> for Point {
    fn eq(&self, other: &GeoPoint3d) -> bool {
        other == self
    }
}
