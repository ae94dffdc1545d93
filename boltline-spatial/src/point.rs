//! The base point value and the factory that builds points from wire data.

use std::fmt;
use std::hash::{Hash, Hasher};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, CartesianPoint3d};
use crate::crs::{PointVariant, Srid};
use crate::error::SpatialError;
use crate::geo::{GeoPoint2d, GeoPoint3d};

/// An immutable sequence of two or three coordinates.
///
/// The length bound is part of the type, so a value with an unsupported
/// dimension cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// Two coordinates.
    Two([f64; 2]),
    /// Three coordinates.
    Three([f64; 3]),
}

impl Coordinates {
    /// Coordinate values in declared order.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Coordinates::Two(coords) => coords,
            Coordinates::Three(coords) => coords,
        }
    }

    /// Number of coordinates in the sequence.
    pub fn dimension(&self) -> usize {
        self.as_slice().len()
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from(coords: [f64; 2]) -> Self {
        Coordinates::Two(coords)
    }
}

impl From<[f64; 3]> for Coordinates {
    fn from(coords: [f64; 3]) -> Self {
        Coordinates::Three(coords)
    }
}

impl TryFrom<&[f64]> for Coordinates {
    type Error = SpatialError;

    fn try_from(coordinates: &[f64]) -> Result<Self, Self::Error> {
        match *coordinates {
            [x, y] => Ok(Coordinates::Two([x, y])),
            [x, y, z] => Ok(Coordinates::Three([x, y, z])),
            _ => Err(SpatialError::UnsupportedDimension(coordinates.len())),
        }
    }
}

impl AbsDiffEq for Coordinates {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimension() == other.dimension()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

/// Point value carrying an SRID without a registered variant.
///
/// This is the fallback representation for CRS codes the library does not
/// know: the SRID tag and the coordinates are preserved, but no named axis
/// accessors are available. [`Point::hydrate`] never produces this type; it
/// exists for values constructed locally via [`Point::new`] or
/// [`GenericPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenericPoint {
    srid: Srid,
    coords: Coordinates,
}

impl GenericPoint {
    /// Creates a point with an arbitrary SRID from 2 or 3 coordinates.
    pub fn new(srid: Srid, coordinates: &[f64]) -> Result<Self, SpatialError> {
        Ok(Self {
            srid,
            coords: Coordinates::try_from(coordinates)?,
        })
    }

    /// SRID of the point.
    pub fn srid(&self) -> Srid {
        self.srid
    }

    /// Coordinates of the point, in declared order.
    pub fn coordinates(&self) -> &[f64] {
        self.coords.as_slice()
    }

    pub(crate) fn coords(&self) -> Coordinates {
        self.coords
    }
}

impl fmt::Display for GenericPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates())
    }
}

impl Hash for GenericPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_point(self.srid, self.coordinates(), state);
    }
}

impl Eq for GenericPoint {}

/// A point within a geometric space.
///
/// Every point carries an SRID tag and 2 or 3 coordinates. The tag selects
/// the variant: cartesian or geographic, 2- or 3-dimensional, or
/// [`Generic`](Point::Generic) for codes outside the registry. Values
/// received from the server are built with [`Point::hydrate`]; values built
/// locally can use the variant constructors directly.
///
/// Two points are equal iff their SRIDs are equal and their coordinate
/// sequences are equal element-wise, regardless of which variant holds them.
/// Equality and hashing follow IEEE semantics for the coordinates: `0.0`
/// and `-0.0` are equal (and hash identically), while a point containing a
/// `NaN` coordinate is not equal to itself and must not be used as a map
/// key.
///
/// ```
/// use boltline_spatial::{Point, Srid};
///
/// let point = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0])?;
/// assert_eq!(point.srid(), Srid::CARTESIAN_2D);
/// assert_eq!(point.to_string(), "POINT(1 2)");
/// # Ok::<(), boltline_spatial::SpatialError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Point {
    /// 2-dimensional cartesian point.
    Cartesian2d(CartesianPoint2d),
    /// 3-dimensional cartesian point.
    Cartesian3d(CartesianPoint3d),
    /// 2-dimensional geographic point.
    Geo2d(GeoPoint2d),
    /// 3-dimensional geographic point.
    Geo3d(GeoPoint3d),
    /// Point with an SRID outside the registry.
    Generic(GenericPoint),
}

impl Point {
    /// Creates a point from a raw SRID and coordinate list received from the
    /// wire.
    ///
    /// The SRID must belong to one of the registered variants; any other
    /// code fails with [`SpatialError::UnsupportedSrid`]. The coordinate
    /// count must be 2 or 3, otherwise the call fails with
    /// [`SpatialError::UnsupportedDimension`]. The count is not required to
    /// match the axis count the variant declares: a third coordinate behind
    /// a 2-axis variant is kept in the coordinate sequence, and the named
    /// accessors keep projecting the leading positions.
    ///
    /// ```
    /// use boltline_spatial::{Point, SpatialError, Srid};
    ///
    /// let point = Point::hydrate(Srid::WGS84_2D, &[12.9716, 55.6761])?;
    /// assert_eq!(point.to_string(), "POINT(12.9716 55.6761)");
    ///
    /// assert_eq!(
    ///     Point::hydrate(Srid::new(1234), &[1.0, 2.0]),
    ///     Err(SpatialError::UnsupportedSrid(Srid::new(1234))),
    /// );
    /// # Ok::<(), boltline_spatial::SpatialError>(())
    /// ```
    pub fn hydrate(srid: Srid, coordinates: &[f64]) -> Result<Self, SpatialError> {
        let variant = srid.variant().ok_or(SpatialError::UnsupportedSrid(srid))?;
        let coords = Coordinates::try_from(coordinates)?;
        Ok(variant.build(coords))
    }

    /// Creates a point from an SRID and coordinate list, falling back to the
    /// generic variant when no registered variant matches the SRID.
    ///
    /// Unlike [`Point::hydrate`], this never rejects an SRID; the coordinate
    /// count must still be 2 or 3.
    pub fn new(srid: Srid, coordinates: &[f64]) -> Result<Self, SpatialError> {
        match srid.variant() {
            Some(variant) => Ok(variant.build(Coordinates::try_from(coordinates)?)),
            None => Ok(Point::Generic(GenericPoint::new(srid, coordinates)?)),
        }
    }

    /// SRID of the point.
    pub fn srid(&self) -> Srid {
        match self {
            Point::Cartesian2d(point) => point.srid(),
            Point::Cartesian3d(point) => point.srid(),
            Point::Geo2d(point) => point.srid(),
            Point::Geo3d(point) => point.srid(),
            Point::Generic(point) => point.srid(),
        }
    }

    /// Coordinates of the point, in declared order.
    pub fn coordinates(&self) -> &[f64] {
        match self {
            Point::Cartesian2d(point) => point.coordinates(),
            Point::Cartesian3d(point) => point.coordinates(),
            Point::Geo2d(point) => point.coordinates(),
            Point::Geo3d(point) => point.coordinates(),
            Point::Generic(point) => point.coordinates(),
        }
    }

    /// Number of coordinates in the point.
    pub fn dimension(&self) -> usize {
        self.coordinates().len()
    }

    /// Registry metadata for the point's SRID, if it has a registered
    /// variant.
    pub fn variant(&self) -> Option<&'static PointVariant> {
        self.srid().variant()
    }

    /// Returns the 2-dimensional cartesian point, if that is the variant.
    pub fn as_cartesian_2d(&self) -> Option<&CartesianPoint2d> {
        match self {
            Point::Cartesian2d(point) => Some(point),
            _ => None,
        }
    }

    /// Returns the 3-dimensional cartesian point, if that is the variant.
    pub fn as_cartesian_3d(&self) -> Option<&CartesianPoint3d> {
        match self {
            Point::Cartesian3d(point) => Some(point),
            _ => None,
        }
    }

    /// Returns the 2-dimensional geographic point, if that is the variant.
    pub fn as_geo_2d(&self) -> Option<&GeoPoint2d> {
        match self {
            Point::Geo2d(point) => Some(point),
            _ => None,
        }
    }

    /// Returns the 3-dimensional geographic point, if that is the variant.
    pub fn as_geo_3d(&self) -> Option<&GeoPoint3d> {
        match self {
            Point::Geo3d(point) => Some(point),
            _ => None,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.srid() == other.srid() && self.coordinates() == other.coordinates()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_point(self.srid(), self.coordinates(), state);
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.srid() == other.srid()
            && self.dimension() == other.dimension()
            && self
                .coordinates()
                .iter()
                .zip(other.coordinates())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl From<GenericPoint> for Point {
    fn from(point: GenericPoint) -> Self {
        Point::Generic(point)
    }
}

/// Writes the canonical `POINT(…)` form of a coordinate sequence.
pub(crate) fn write_point(f: &mut fmt::Formatter<'_>, coordinates: &[f64]) -> fmt::Result {
    write!(f, "POINT(")?;
    for (index, coordinate) in coordinates.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{coordinate}")?;
    }
    write!(f, ")")
}

/// Hashes an SRID plus coordinate sequence so that equal points hash
/// equally. `-0.0` is canonicalized to `0.0` because the two compare equal.
pub(crate) fn hash_point<H: Hasher>(srid: Srid, coordinates: &[f64], state: &mut H) {
    srid.hash(state);
    state.write_usize(coordinates.len());
    for coordinate in coordinates {
        let canonical = if *coordinate == 0.0 { 0.0 } else { *coordinate };
        state.write_u64(canonical.to_bits());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use assert_matches::assert_matches;

    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn hydrate_preserves_srid_and_coordinates() {
        let inputs: &[(Srid, &[f64])] = &[
            (Srid::CARTESIAN_2D, &[3.0, 4.0]),
            (Srid::CARTESIAN_3D, &[3.0, 4.0, 5.0]),
            (Srid::WGS84_2D, &[12.9716, 55.6761]),
            (Srid::WGS84_3D, &[12.9716, 55.6761, 7.5]),
        ];
        for (srid, coordinates) in inputs {
            let point = Point::hydrate(*srid, coordinates).unwrap();
            assert_eq!(point.srid(), *srid);
            assert_eq!(point.coordinates(), *coordinates);
        }
    }

    #[test]
    fn hydrate_rejects_unknown_srid() {
        assert_matches!(
            Point::hydrate(Srid::new(1234), &[1.0, 2.0]),
            Err(SpatialError::UnsupportedSrid(srid)) if srid == Srid::new(1234)
        );
    }

    #[test]
    fn hydrate_rejects_bad_dimension() {
        for coordinates in [vec![], vec![1.0], vec![1.0, 2.0, 3.0, 4.0]] {
            assert_matches!(
                Point::hydrate(Srid::WGS84_2D, &coordinates),
                Err(SpatialError::UnsupportedDimension(dimension))
                    if dimension == coordinates.len()
            );
        }
    }

    #[test]
    fn hydrate_checks_srid_before_dimension() {
        assert_matches!(
            Point::hydrate(Srid::new(1234), &[1.0]),
            Err(SpatialError::UnsupportedSrid(_))
        );
    }

    #[test]
    fn trailing_coordinate_is_stored_behind_two_axis_variant() {
        let point = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(point.coordinates(), [1.0, 2.0, 3.0]);
        assert_eq!(point.to_string(), "POINT(1 2 3)");

        let cartesian = point.as_cartesian_2d().unwrap();
        assert_eq!(cartesian.x(), 1.0);
        assert_eq!(cartesian.y(), 2.0);
    }

    #[test]
    fn new_falls_back_to_generic_for_unknown_srid() {
        let point = Point::new(Srid::new(1234), &[1.0, 2.0]).unwrap();
        assert_matches!(point, Point::Generic(_));
        assert_eq!(point.srid(), Srid::new(1234));
        assert_eq!(point.coordinates(), [1.0, 2.0]);
        assert!(point.variant().is_none());
    }

    #[test]
    fn new_still_rejects_bad_dimension() {
        assert_matches!(
            Point::new(Srid::new(1234), &[1.0, 2.0, 3.0, 4.0]),
            Err(SpatialError::UnsupportedDimension(4))
        );
    }

    #[test]
    fn new_dispatches_registered_srids() {
        let point = Point::new(Srid::WGS84_2D, &[1.0, 2.0]).unwrap();
        assert_matches!(point, Point::Geo2d(_));
    }

    #[test]
    fn equality_is_srid_and_coordinates() {
        let a = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap();
        let b = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, a);

        // Same coordinates under a different CRS are a different point.
        let c = Point::hydrate(Srid::WGS84_2D, &[1.0, 2.0]).unwrap();
        assert_ne!(a, c);

        let d = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.5]).unwrap();
        assert_ne!(a, d);

        let e = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0, 0.0]).unwrap();
        assert_ne!(a, e);
    }

    #[test]
    fn generic_point_equals_typed_variant() {
        let generic = Point::from(GenericPoint::new(Srid::WGS84_2D, &[1.0, 2.0]).unwrap());
        let typed = Point::hydrate(Srid::WGS84_2D, &[1.0, 2.0]).unwrap();
        assert_eq!(generic, typed);
        assert_eq!(hash_of(&generic), hash_of(&typed));
    }

    #[test]
    fn equal_points_hash_equally() {
        let a = Point::hydrate(Srid::WGS84_3D, &[1.0, 2.0, 3.0]).unwrap();
        let b = Point::hydrate(Srid::WGS84_3D, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn zero_signs_are_equal_and_hash_equally() {
        let positive = Point::hydrate(Srid::CARTESIAN_2D, &[0.0, 1.0]).unwrap();
        let negative = Point::hydrate(Srid::CARTESIAN_2D, &[-0.0, 1.0]).unwrap();
        assert_eq!(positive, negative);
        assert_eq!(hash_of(&positive), hash_of(&negative));
    }

    #[test]
    fn points_work_as_set_members() {
        let mut set = HashSet::new();
        set.insert(Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap());
        set.insert(Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap());
        set.insert(Point::hydrate(Srid::WGS84_2D, &[1.0, 2.0]).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_uses_natural_float_form() {
        let point = Point::hydrate(Srid::CARTESIAN_2D, &[1.0, 2.0]).unwrap();
        assert_eq!(point.to_string(), "POINT(1 2)");

        let point = Point::hydrate(Srid::CARTESIAN_3D, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(point.to_string(), "POINT(1 2 3)");

        let point = Point::hydrate(Srid::WGS84_2D, &[12.5, -7.25]).unwrap();
        assert_eq!(point.to_string(), "POINT(12.5 -7.25)");
    }

    #[test]
    fn generic_point_display_matches_base_form() {
        let generic = GenericPoint::new(Srid::new(9999), &[4.0, 5.0]).unwrap();
        assert_eq!(generic.to_string(), "POINT(4 5)");
    }

    #[test]
    fn coordinates_try_from_slice() {
        assert_eq!(
            Coordinates::try_from([1.0, 2.0].as_slice()).unwrap(),
            Coordinates::Two([1.0, 2.0])
        );
        assert_eq!(
            Coordinates::try_from([1.0, 2.0, 3.0].as_slice()).unwrap(),
            Coordinates::Three([1.0, 2.0, 3.0])
        );
        let empty: &[f64] = &[];
        assert_matches!(
            Coordinates::try_from(empty),
            Err(SpatialError::UnsupportedDimension(0))
        );
    }

    #[test]
    fn abs_diff_eq_tolerates_small_differences() {
        let a = Point::hydrate(Srid::WGS84_2D, &[12.9716, 55.6761]).unwrap();
        let b = Point::hydrate(Srid::WGS84_2D, &[12.9716 + 1e-12, 55.6761]).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);

        let c = Point::hydrate(Srid::CARTESIAN_2D, &[12.9716, 55.6761]).unwrap();
        assert!(!a.abs_diff_eq(&c, 1e-9));
    }

    #[test]
    fn serde_round_trip_preserves_value() {
        let points = [
            Point::hydrate(Srid::CARTESIAN_2D, &[1.5, 2.5]).unwrap(),
            Point::hydrate(Srid::WGS84_3D, &[1.0, 2.0, 3.0]).unwrap(),
            Point::new(Srid::new(1234), &[1.0, 2.0]).unwrap(),
        ];
        for point in points {
            let encoded = serde_json::to_string(&point).unwrap();
            let decoded: Point = serde_json::from_str(&encoded).unwrap();
            assert_eq!(point, decoded);
        }
    }

    #[test]
    fn error_messages_carry_the_input() {
        assert_eq!(
            SpatialError::UnsupportedSrid(Srid::new(1234)).to_string(),
            "SRID 1234 is not supported"
        );
        assert_eq!(
            SpatialError::UnsupportedDimension(4).to_string(),
            "4-dimensional point values are not supported"
        );
    }
}
