//! Linestring geometry: an ordered sequence of points forming a polyline.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::point::{CartesianPoint2d, Point2d};
use crate::segment::Segment;

/// An ordered sequence of points forming a polyline.
///
/// The insertion order of the points is the geometric order along the line. Consecutive
/// duplicate points are allowed; they form zero-length segments. A linestring is only
/// considered [valid](Linestring::is_valid) when it has at least 2 points, but shorter
/// sequences can be constructed and queried.
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Linestring<Point = Point2d> {
    points: Vec<Point>,
}

impl<Point> std::ops::Deref for Linestring<Point> {
    type Target = Vec<Point>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<Point> Linestring<Point> {
    /// Creates a new linestring from the given points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Whether the linestring has enough points to form a line.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    /// Iterates over the points of the linestring in line order.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Iterates over the segments between consecutive points.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Point>> {
        self.points.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
    }

    /// Returns a copy of the linestring with the point order reversed.
    pub fn reversed(&self) -> Self
    where
        Point: Clone,
    {
        Self {
            points: self.points.iter().rev().cloned().collect(),
        }
    }
}

impl<N: Float, P: CartesianPoint2d<Num = N>> Linestring<P> {
    /// Arc length of the linestring: the sum of the lengths of its segments.
    pub fn length(&self) -> N {
        self.iter_segments()
            .fold(N::zero(), |acc, segment| acc + segment.length())
    }
}

impl<P> From<Vec<P>> for Linestring<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2d;

    #[test]
    fn iter_points() {
        let line = Linestring::new(vec![Point2d::new(17.0, 42.0), Point2d::new(-3.0, 22.0)]);

        let mut iter = line.iter_points();
        assert_eq!(iter.next().map(|p| p.x), Some(17.0));
        assert_eq!(iter.next().map(|p| p.y), Some(22.0));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_segments() {
        let line: Linestring = Linestring::new(vec![Point2d::new(0.0, 0.0)]);
        assert_eq!(line.iter_segments().count(), 0);

        let line = Linestring::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(2.0, 1.0),
        ]);
        assert_eq!(line.iter_segments().count(), 2);
        assert_eq!(
            line.iter_segments().last(),
            Some(Segment(&Point2d::new(1.0, 1.0), &Point2d::new(2.0, 1.0)))
        );
    }

    #[test]
    fn validity() {
        assert!(!Linestring::<Point2d>::new(vec![]).is_valid());
        assert!(!Linestring::new(vec![Point2d::new(0.0, 0.0)]).is_valid());
        assert!(Linestring::new(vec![Point2d::new(0.0, 0.0), Point2d::new(0.0, 0.0)]).is_valid());
    }

    #[test]
    fn length() {
        let line = Linestring::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(3.0, 4.0),
            Point2d::new(3.0, 5.0),
        ]);
        assert_eq!(line.length(), 6.0);
    }

    #[test]
    fn length_with_duplicate_points() {
        let line = Linestring::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
        ]);
        assert_eq!(line.length(), 1.0);
    }

    #[test]
    fn reversed() {
        let line = Linestring::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(1.0, 2.0),
        ]);
        let reversed = line.reversed();

        assert_eq!(
            *reversed,
            vec![
                Point2d::new(1.0, 2.0),
                Point2d::new(1.0, 0.0),
                Point2d::new(0.0, 0.0),
            ]
        );
        assert_eq!(reversed.reversed(), line);
    }
}
