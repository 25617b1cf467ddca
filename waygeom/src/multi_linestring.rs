//! Multilinestring geometry: an ordered collection of linestrings.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::linestring::Linestring;
use crate::point::{CartesianPoint2d, Point2d};

/// An ordered collection of linestrings.
///
/// When produced by [`segmentize`](crate::segmentize), the member order follows the arc length
/// of the source line.
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiLinestring<Point = Point2d>(Vec<Linestring<Point>>);

impl<Point> std::ops::Deref for MultiLinestring<Point> {
    type Target = Vec<Linestring<Point>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<Point> MultiLinestring<Point> {
    /// Creates a new multilinestring from the given members.
    pub fn new(lines: Vec<Linestring<Point>>) -> Self {
        Self(lines)
    }

    /// Number of member linestrings.
    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the member linestrings.
    pub fn lines(&self) -> impl Iterator<Item = &Linestring<Point>> {
        self.0.iter()
    }

    /// Returns a copy with the point order of every member reversed.
    ///
    /// The member order is retained.
    pub fn reversed(&self) -> Self
    where
        Point: Clone,
    {
        Self(self.0.iter().map(Linestring::reversed).collect())
    }
}

impl<N: Float, P: CartesianPoint2d<Num = N>> MultiLinestring<P> {
    /// Summed arc length of all member linestrings.
    pub fn length(&self) -> N {
        self.lines().fold(N::zero(), |acc, line| acc + line.length())
    }
}

impl<P> From<Vec<Linestring<P>>> for MultiLinestring<P> {
    fn from(lines: Vec<Linestring<P>>) -> Self {
        Self(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2d;

    fn lines() -> MultiLinestring {
        MultiLinestring::new(vec![
            Linestring::new(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0)]),
            Linestring::new(vec![Point2d::new(5.0, 0.0), Point2d::new(5.0, 2.0)]),
        ])
    }

    #[test]
    fn num_geometries() {
        assert_eq!(MultiLinestring::<Point2d>::default().num_geometries(), 0);
        assert_eq!(lines().num_geometries(), 2);
    }

    #[test]
    fn length() {
        assert_eq!(lines().length(), 3.0);
        assert_eq!(MultiLinestring::<Point2d>::default().length(), 0.0);
    }

    #[test]
    fn reversed() {
        let reversed = lines().reversed();

        assert_eq!(
            reversed[0],
            Linestring::new(vec![Point2d::new(1.0, 0.0), Point2d::new(0.0, 0.0)])
        );
        assert_eq!(
            reversed[1],
            Linestring::new(vec![Point2d::new(5.0, 2.0), Point2d::new(5.0, 0.0)])
        );
    }
}
