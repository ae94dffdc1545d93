//! SRID codes and the static registry of point variants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, CartesianPoint3d};
use crate::geo::{GeoPoint2d, GeoPoint3d};
use crate::point::{Coordinates, Point};

/// Identifier of a coordinate reference system, as carried on the wire.
///
/// The four SRIDs the server assigns to point values are available as
/// constants. Other codes can be wrapped with [`Srid::new`] and carried by a
/// [`GenericPoint`](crate::GenericPoint), but are rejected by
/// [`Point::hydrate`](crate::Point::hydrate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srid(u32);

impl Srid {
    /// SRID of 2-dimensional cartesian points.
    pub const CARTESIAN_2D: Srid = Srid(7203);
    /// SRID of 3-dimensional cartesian points.
    pub const CARTESIAN_3D: Srid = Srid(9157);
    /// SRID of 2-dimensional geographic points on the WGS84 datum.
    pub const WGS84_2D: Srid = Srid(4326);
    /// SRID of 3-dimensional geographic points on the WGS84 datum.
    pub const WGS84_3D: Srid = Srid(4979);

    /// Wraps a raw CRS code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw CRS code.
    pub const fn code(&self) -> u32 {
        self.0
    }

    /// Looks up the point variant registered for this SRID.
    pub fn variant(self) -> Option<&'static PointVariant> {
        match self {
            Srid::CARTESIAN_2D => Some(&VARIANTS[0]),
            Srid::CARTESIAN_3D => Some(&VARIANTS[1]),
            Srid::WGS84_2D => Some(&VARIANTS[2]),
            Srid::WGS84_3D => Some(&VARIANTS[3]),
            _ => None,
        }
    }
}

impl From<u32> for Srid {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registry record describing one point variant.
///
/// The registry itself is a fixed table compiled into the library. A variant
/// cannot be added at runtime, so lookups are safe from any thread without
/// synchronization.
#[derive(Debug)]
pub struct PointVariant {
    srid: Srid,
    name: &'static str,
    axes: &'static [&'static str],
    construct: fn(Coordinates) -> Point,
}

impl PointVariant {
    /// SRID under which this variant is registered.
    pub fn srid(&self) -> Srid {
        self.srid
    }

    /// Canonical name of the variant, as the server reports it.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Axis labels, in coordinate order.
    pub fn axes(&self) -> &'static [&'static str] {
        self.axes
    }

    /// Number of axes the variant declares.
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    pub(crate) fn build(&self, coords: Coordinates) -> Point {
        (self.construct)(coords)
    }
}

static VARIANTS: [PointVariant; 4] = [
    PointVariant {
        srid: Srid::CARTESIAN_2D,
        name: "CartesianPoint",
        axes: &["x", "y"],
        construct: |coords| Point::Cartesian2d(CartesianPoint2d::from_coordinates(coords)),
    },
    PointVariant {
        srid: Srid::CARTESIAN_3D,
        name: "CartesianPoint3D",
        axes: &["x", "y", "z"],
        construct: |coords| Point::Cartesian3d(CartesianPoint3d::from_coordinates(coords)),
    },
    PointVariant {
        srid: Srid::WGS84_2D,
        name: "WGS84Point",
        axes: &["longitude", "latitude"],
        construct: |coords| Point::Geo2d(GeoPoint2d::from_coordinates(coords)),
    },
    PointVariant {
        srid: Srid::WGS84_3D,
        name: "WGS84Point3D",
        axes: &["longitude", "latitude", "height"],
        construct: |coords| Point::Geo3d(GeoPoint3d::from_coordinates(coords)),
    },
];
