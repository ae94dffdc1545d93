//! Conversions between cartesian point variants and `nalgebra` points.

use nalgebra::{Point2, Point3};

use crate::cartesian::{CartesianPoint2d, CartesianPoint3d};
use crate::error::SpatialError;

impl From<CartesianPoint2d> for Point2<f64> {
    fn from(value: CartesianPoint2d) -> Self {
        Point2::new(value.x(), value.y())
    }
}

impl From<Point2<f64>> for CartesianPoint2d {
    fn from(value: Point2<f64>) -> Self {
        CartesianPoint2d::new(value.x, value.y)
    }
}

impl From<Point3<f64>> for CartesianPoint3d {
    fn from(value: Point3<f64>) -> Self {
        CartesianPoint3d::new(value.x, value.y, value.z)
    }
}

// Fallible: a 3d variant hydrated from 2-dimensional wire data has no third
// coordinate to convert.
impl TryFrom<CartesianPoint3d> for Point3<f64> {
    type Error = SpatialError;

    fn try_from(value: CartesianPoint3d) -> Result<Self, Self::Error> {
        match value.z() {
            Some(z) => Ok(Point3::new(value.x(), value.y(), z)),
            None => Err(SpatialError::UnsupportedDimension(2)),
        }
    }
}
