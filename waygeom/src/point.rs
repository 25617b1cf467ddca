//! Point traits and the concrete point type used by geometry values.

use nalgebra::{Point2, Scalar};
use num_traits::{Bounded, Float, FromPrimitive};

/// The concrete 2d point type geometry values are built from in practice.
pub type Point2d = Point2<f64>;

/// Read access to the coordinates of a 2d point on a flat plane.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Exact coordinate-wise equality.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Squared euclidian distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }
}

/// Construction of a point from raw coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a point with the given coordinates.
    fn new(x: Num, y: Num) -> Self;
}

/// Operations on points with float coordinates.
pub trait CartesianPoint2dFloat<N: Float = f64>: CartesianPoint2d<Num = N> {
    /// Euclidian distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Float, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(3.0, 4.0);

        assert_eq!(a.distance_sq(&b), 25.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0, epsilon = 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn exact_equality() {
        let a = Point2d::new(1.5, -2.5);

        assert!(a.equal(&Point2d::new(1.5, -2.5)));
        assert!(!a.equal(&Point2d::new(1.5, -2.5 + 1e-15)));
    }
}
