//! Straight line segment between two points.

use num_traits::Float;

use crate::point::{CartesianPoint2d, CartesianPoint2dFloat, NewCartesianPoint2d};

/// A straight line segment between two borrowed points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<N: Float, P: CartesianPoint2d<Num = N>> Segment<'_, P> {
    /// Euclidian length of the segment.
    pub fn length(&self) -> N {
        self.0.distance(self.1)
    }

    /// The point `frac` of the way from the start of the segment to its end.
    ///
    /// A `frac` of 0 gives the start point and 1 gives the end point. The caller must make sure
    /// the value is in the `[0.0, 1.0]` range.
    pub fn interpolate<Out: NewCartesianPoint2d<N>>(&self, frac: N) -> Out {
        Out::new(
            self.0.x() + (self.1.x() - self.0.x()) * frac,
            self.0.y() + (self.1.y() - self.0.y()) * frac,
        )
    }

    /// Midpoint of the segment.
    pub fn midpoint<Out: NewCartesianPoint2d<N>>(&self) -> Out {
        let two = N::one() + N::one();
        Out::new(
            (self.0.x() + self.1.x()) / two,
            (self.0.y() + self.1.y()) / two,
        )
    }
}
