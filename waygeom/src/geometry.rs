//! Geometry value: a tagged union over the shapes the crate supports.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::WaygeomError;
use crate::linestring::Linestring;
use crate::multi_linestring::MultiLinestring;
use crate::point::{CartesianPoint2d, NewCartesianPoint2d, Point2d};
use crate::segment::Segment;

/// A geometry value holding exactly one of the supported shapes, or nothing.
///
/// [`Geometry::Null`] is the sentinel for "could not be constructed" and is the default value.
/// Every operation dispatches on the active variant; operations that have no meaningful result
/// for a null geometry return a documented neutral value instead of panicking.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub enum Geometry<Point = Point2d> {
    /// No geometry; the result of a failed construction.
    #[default]
    Null,
    /// A single point.
    Point(Point),
    /// A polyline.
    Linestring(Linestring<Point>),
    /// An ordered collection of polylines.
    MultiLinestring(MultiLinestring<Point>),
}

impl<P> Geometry<P> {
    /// Whether this is the null geometry.
    pub fn is_null(&self) -> bool {
        matches!(self, Geometry::Null)
    }

    /// Whether this geometry holds a point.
    pub fn is_point(&self) -> bool {
        matches!(self, Geometry::Point(_))
    }

    /// Whether this geometry holds a linestring.
    pub fn is_linestring(&self) -> bool {
        matches!(self, Geometry::Linestring(_))
    }

    /// Whether this geometry holds a multilinestring.
    pub fn is_multilinestring(&self) -> bool {
        matches!(self, Geometry::MultiLinestring(_))
    }

    /// The point payload, if this geometry holds one.
    pub fn as_point(&self) -> Option<&P> {
        match self {
            Geometry::Point(point) => Some(point),
            _ => None,
        }
    }

    /// The linestring payload, if this geometry holds one.
    pub fn as_linestring(&self) -> Option<&Linestring<P>> {
        match self {
            Geometry::Linestring(line) => Some(line),
            _ => None,
        }
    }

    /// The multilinestring payload, if this geometry holds one.
    pub fn as_multilinestring(&self) -> Option<&MultiLinestring<P>> {
        match self {
            Geometry::MultiLinestring(lines) => Some(lines),
            _ => None,
        }
    }

    /// Number of geometries in the value: 0 for null, 1 for simple shapes, the member count for
    /// a multilinestring.
    pub fn num_geometries(&self) -> usize {
        match self {
            Geometry::Null => 0,
            Geometry::Point(_) | Geometry::Linestring(_) => 1,
            Geometry::MultiLinestring(lines) => lines.num_geometries(),
        }
    }

    /// Stable uppercase label of the active shape.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Null => "NULL",
            Geometry::Point(_) => "POINT",
            Geometry::Linestring(_) => "LINESTRING",
            Geometry::MultiLinestring(_) => "MULTILINESTRING",
        }
    }
}

impl<N: Float, P: CartesianPoint2d<Num = N>> Geometry<P> {
    /// Area covered by the geometry.
    ///
    /// None of the shapes the crate supports covers any area, so this is always 0. Callers must
    /// not rely on the value for null geometries.
    pub fn area(&self) -> N {
        match self {
            Geometry::Null
            | Geometry::Point(_)
            | Geometry::Linestring(_)
            | Geometry::MultiLinestring(_) => N::zero(),
        }
    }

    /// Arc length of the geometry: 0 for null and point values.
    pub fn length(&self) -> N {
        match self {
            Geometry::Null | Geometry::Point(_) => N::zero(),
            Geometry::Linestring(line) => line.length(),
            Geometry::MultiLinestring(lines) => lines.length(),
        }
    }
}

impl<N: Float, P: NewCartesianPoint2d<N> + CartesianPoint2d<Num = N> + Copy> Geometry<P> {
    /// Centroid of the geometry, as a point geometry.
    ///
    /// For line shapes this is the length-weighted centroid: the sum of every segment's
    /// midpoint weighted by the segment's length, divided by the total length. For a
    /// multilinestring all member segments are combined, so long members weigh more than short
    /// ones. A line whose points all coincide degenerates to its first point. The centroid of
    /// the null geometry (or of a multilinestring without points) is null.
    pub fn centroid(&self) -> Geometry<P> {
        match self {
            Geometry::Null => Geometry::Null,
            Geometry::Point(point) => Geometry::Point(*point),
            Geometry::Linestring(line) => {
                weighted_centroid(line.iter_segments(), line.first().copied())
            }
            Geometry::MultiLinestring(lines) => weighted_centroid(
                lines.lines().flat_map(Linestring::iter_segments),
                lines.lines().find_map(|line| line.first().copied()),
            ),
        }
    }

    /// Returns a copy of the geometry with the direction of all lines reversed.
    ///
    /// Point order is reversed for a linestring and for every member of a multilinestring;
    /// member order is retained. Point and null geometries are returned unchanged.
    pub fn reversed(&self) -> Geometry<P> {
        match self {
            Geometry::Null => Geometry::Null,
            Geometry::Point(point) => Geometry::Point(*point),
            Geometry::Linestring(line) => Geometry::Linestring(line.reversed()),
            Geometry::MultiLinestring(lines) => Geometry::MultiLinestring(lines.reversed()),
        }
    }
}

fn weighted_centroid<'a, N, P, I>(segments: I, fallback: Option<P>) -> Geometry<P>
where
    N: Float,
    P: NewCartesianPoint2d<N> + Copy + 'a,
    I: Iterator<Item = Segment<'a, P>>,
{
    let mut total = N::zero();
    let mut x = N::zero();
    let mut y = N::zero();

    for segment in segments {
        let length = segment.length();
        let midpoint: P = segment.midpoint();
        x = x + midpoint.x() * length;
        y = y + midpoint.y() * length;
        total = total + length;
    }

    if total > N::zero() {
        Geometry::Point(P::new(x / total, y / total))
    } else {
        // Zero-length input: all points coincide, or there are no points at all.
        match fallback {
            Some(point) => Geometry::Point(point),
            None => Geometry::Null,
        }
    }
}

impl<P> From<P> for Geometry<P> {
    fn from(value: P) -> Self {
        Self::Point(value)
    }
}

impl<P> From<Linestring<P>> for Geometry<P> {
    fn from(value: Linestring<P>) -> Self {
        Self::Linestring(value)
    }
}

impl<P> From<MultiLinestring<P>> for Geometry<P> {
    fn from(value: MultiLinestring<P>) -> Self {
        Self::MultiLinestring(value)
    }
}

impl<P> TryFrom<Geometry<P>> for Linestring<P> {
    type Error = WaygeomError;

    fn try_from(value: Geometry<P>) -> Result<Self, Self::Error> {
        match value {
            Geometry::Linestring(line) => Ok(line),
            other => Err(WaygeomError::Conversion(format!(
                "expected LINESTRING, got {}",
                other.geometry_type()
            ))),
        }
    }
}

impl<P> TryFrom<Geometry<P>> for MultiLinestring<P> {
    type Error = WaygeomError;

    fn try_from(value: Geometry<P>) -> Result<Self, Self::Error> {
        match value {
            Geometry::MultiLinestring(lines) => Ok(lines),
            other => Err(WaygeomError::Conversion(format!(
                "expected MULTILINESTRING, got {}",
                other.geometry_type()
            ))),
        }
    }
}
