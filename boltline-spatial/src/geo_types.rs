//! Conversions between point variants and `geo-types` geometries.

use geo_types::{coord, point, Coord, Point};

use crate::cartesian::CartesianPoint2d;
use crate::geo::GeoPoint2d;

impl From<CartesianPoint2d> for Point<f64> {
    fn from(value: CartesianPoint2d) -> Self {
        point! { x: value.x(), y: value.y() }
    }
}

impl From<Point<f64>> for CartesianPoint2d {
    fn from(value: Point<f64>) -> Self {
        CartesianPoint2d::new(value.x(), value.y())
    }
}

impl From<CartesianPoint2d> for Coord<f64> {
    fn from(value: CartesianPoint2d) -> Self {
        coord! { x: value.x(), y: value.y() }
    }
}

impl From<Coord<f64>> for CartesianPoint2d {
    fn from(value: Coord<f64>) -> Self {
        CartesianPoint2d::new(value.x, value.y)
    }
}

// geo-types has no axis semantics of its own; the conventional mapping puts
// longitude on x and latitude on y.

impl From<GeoPoint2d> for Point<f64> {
    fn from(value: GeoPoint2d) -> Self {
        point! { x: value.longitude(), y: value.latitude() }
    }
}

impl From<Point<f64>> for GeoPoint2d {
    fn from(value: Point<f64>) -> Self {
        GeoPoint2d::new(value.x(), value.y())
    }
}

impl From<GeoPoint2d> for Coord<f64> {
    fn from(value: GeoPoint2d) -> Self {
        coord! { x: value.longitude(), y: value.latitude() }
    }
}

impl From<Coord<f64>> for GeoPoint2d {
    fn from(value: Coord<f64>) -> Self {
        GeoPoint2d::new(value.x, value.y)
    }
}
