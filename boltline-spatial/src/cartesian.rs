//! Cartesian point variants.

use std::fmt;
use std::hash::{Hash, Hasher};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::crs::Srid;
use crate::error::SpatialError;
use crate::point::{hash_point, write_point, Coordinates, Point};

/// A point in 2-dimensional cartesian coordinate space.
///
/// Equality, hashing and display behave exactly as for [`Point`]; the
/// variant only adds the `x`/`y` accessors. The accessors project the first
/// two positions of the underlying coordinate sequence, which may hold a
/// third value when the point was hydrated from 3-dimensional wire data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartesianPoint2d {
    coords: Coordinates,
}

impl CartesianPoint2d {
    /// SRID under which this variant is registered.
    pub const SRID: Srid = Srid::CARTESIAN_2D;

    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Coordinates::Two([x, y]),
        }
    }

    pub(crate) fn from_coordinates(coords: Coordinates) -> Self {
        Self { coords }
    }

    /// X coordinate of the point.
    pub fn x(&self) -> f64 {
        self.coords.as_slice()[0]
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> f64 {
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

impl fmt::Display for CartesianPoint2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates())
    }
}

impl Hash for CartesianPoint2d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_point(self.srid(), self.coordinates(), state);
    }
}

impl Eq for CartesianPoint2d {}

impl AbsDiffEq for CartesianPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl From<CartesianPoint2d> for Point {
    fn from(point: CartesianPoint2d) -> Self {
        Point::Cartesian2d(point)
    }
}

impl TryFrom<Point> for CartesianPoint2d {
    type Error = SpatialError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        match point {
            Point::Cartesian2d(point) => Ok(point),
            Point::Generic(generic) if generic.srid() == Self::SRID => {
                Ok(Self::from_coordinates(generic.coords()))
            }
            other => Err(SpatialError::UnsupportedSrid(other.srid())),
        }
    }
}

impl PartialEq<Point> for CartesianPoint2d {
    fn eq(&self, other: &Point) -> bool {
        self.srid() == other.srid() && self.coordinates() == other.coordinates()
    }
}

impl PartialEq<CartesianPoint2d> for Point {
    fn eq(&self, other: &CartesianPoint2d) -> bool {
        other == self
    }
}

/// A point in 3-dimensional cartesian coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartesianPoint3d {
    coords: Coordinates,
}

impl CartesianPoint3d {
    /// SRID under which this variant is registered.
    pub const SRID: Srid = Srid::CARTESIAN_3D;

    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Coordinates::Three([x, y, z]),
        }
    }

    pub(crate) fn from_coordinates(coords: Coordinates) -> Self {
        Self { coords }
    }

    /// X coordinate of the point.
    pub fn x(&self) -> f64 {
        self.coords.as_slice()[0]
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> f64 {
        self.coords.as_slice()[1]
    }

    /// Z coordinate of the point.
    ///
    /// A point hydrated from 2-dimensional wire data has no third
    /// coordinate; `None` is returned in that case.
    pub fn z(&self) -> Option<f64> {
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

impl fmt::Display for CartesianPoint3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates())
    }
}

impl Hash for CartesianPoint3d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_point(self.srid(), self.coordinates(), state);
    }
}

impl Eq for CartesianPoint3d {}

impl AbsDiffEq for CartesianPoint3d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl From<CartesianPoint3d> for Point {
    fn from(point: CartesianPoint3d) -> Self {
        Point::Cartesian3d(point)
    }
}

impl TryFrom<Point> for CartesianPoint3d {
    type Error = SpatialError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        match point {
            Point::Cartesian3d(point) => Ok(point),
            Point::Generic(generic) if generic.srid() == Self::SRID => {
                Ok(Self::from_coordinates(generic.coords()))
            }
            other => Err(SpatialError::UnsupportedSrid(other.srid())),
        }
    }
}

impl PartialEq<Point> for CartesianPoint3d {
    fn eq(&self, other: &Point) -> bool {
        self.srid() == other.srid() && self.coordinates() == other.coordinates()
    }
}

impl PartialEq<CartesianPoint3d> for Point {
    fn eq(&self, other: &CartesianPoint3d) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::GenericPoint;

    #[test]
    fn accessors_project_coordinates() {
        let point = CartesianPoint2d::new(3.0, 4.0);
        assert_eq!(point.x(), 3.0);
        assert_eq!(point.y(), 4.0);
        assert_eq!(point.srid(), Srid::CARTESIAN_2D);

        let point = CartesianPoint3d::new(3.0, 4.0, 5.0);
        assert_eq!(point.x(), 3.0);
        assert_eq!(point.y(), 4.0);
        assert_eq!(point.z(), Some(5.0));
        assert_eq!(point.srid(), Srid::CARTESIAN_3D);
    }

    #[test]
    fn display_matches_base_point_form() {
        assert_eq!(CartesianPoint2d::new(1.0, 2.0).to_string(), "POINT(1 2)");
        assert_eq!(
            CartesianPoint3d::new(1.0, 2.0, 3.0).to_string(),
            "POINT(1 2 3)"
        );
    }

    #[test]
    fn converts_to_and_from_point() {
        let point = Point::from(CartesianPoint2d::new(1.0, 2.0));
        assert_eq!(point.srid(), Srid::CARTESIAN_2D);

        let back = CartesianPoint2d::try_from(point).unwrap();
        assert_eq!(back, CartesianPoint2d::new(1.0, 2.0));
    }

    #[test]
    fn conversion_accepts_generic_with_matching_srid() {
        let generic = Point::from(GenericPoint::new(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap());
        let typed = CartesianPoint2d::try_from(generic).unwrap();
        assert_eq!(typed.x(), 1.0);
        assert_eq!(typed.y(), 2.0);
    }

    #[test]
    fn conversion_rejects_other_variants() {
        let point = Point::hydrate(Srid::WGS84_2D, &[1.0, 2.0]).unwrap();
        assert_eq!(
            CartesianPoint2d::try_from(point),
            Err(SpatialError::UnsupportedSrid(Srid::WGS84_2D))
        );
    }

    #[test]
    fn variant_equals_base_point() {
        let variant = CartesianPoint2d::new(1.0, 2.0);
        let base = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap();
        assert!(variant == base);
        assert!(base == variant);

        let other = Point::hydrate(Srid::WGS84_2D, &[1.0, 2.0]).unwrap();
        assert!(variant != other);
    }

    #[test]
    fn hydrated_two_dimensional_point_has_no_z() {
        let point = Point::hydrate(Srid::CARTESIAN_3D, &[1.0, 2.0]).unwrap();
        let cartesian = point.as_cartesian_3d().unwrap();
        assert_eq!(cartesian.z(), None);
    }
}
