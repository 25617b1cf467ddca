//! Arc-length re-noding of line geometries.

use num_traits::Float;

use crate::geometry::Geometry;
use crate::linestring::Linestring;
use crate::multi_linestring::MultiLinestring;
use crate::point::NewCartesianPoint2d;
use crate::segment::Segment;

/// Splits a line geometry into consecutive pieces no longer than `max_length`.
///
/// The result is always a multilinestring, even when no split happens. Walking the input
/// vertices in order, a cut is made every time the arc length traveled crosses the next
/// multiple of `max_length`; the cut point is interpolated exactly on the crossing edge, closes
/// the current piece and opens the next one. A cut that lands exactly on an input vertex reuses
/// that vertex, so no duplicate points and no zero-length pieces are produced. Members of a
/// multilinestring input are split independently, each starting its arc length at 0.
///
/// Threshold comparisons are exact, without an epsilon: inputs whose edge lengths are exactly
/// representable produce exact cuts, while rounding noise in the general case may only make the
/// final piece of a line shorter than the rest, never a piece meaningfully longer than
/// `max_length`.
///
/// # Panics
///
/// Panics if `geom` is not a linestring or multilinestring, or if `max_length` is not strictly
/// positive. Both indicate a contract violation in the calling code; data-dependent failures
/// are handled upstream by [`create_linestring`](crate::create_linestring) returning
/// [`Geometry::Null`].
pub fn segmentize<N, P>(geom: &Geometry<P>, max_length: N) -> Geometry<P>
where
    N: Float,
    P: NewCartesianPoint2d<N> + Copy,
{
    assert!(
        max_length > N::zero(),
        "segmentize requires a positive max_length"
    );

    let mut parts = Vec::new();
    match geom {
        Geometry::Linestring(line) => split_linestring(line, max_length, &mut parts),
        Geometry::MultiLinestring(lines) => {
            for line in lines.lines() {
                split_linestring(line, max_length, &mut parts);
            }
        }
        other => panic!("segmentize called on {} geometry", other.geometry_type()),
    }

    Geometry::MultiLinestring(MultiLinestring::new(parts))
}

fn split_linestring<N, P>(line: &Linestring<P>, max_length: N, parts: &mut Vec<Linestring<P>>)
where
    N: Float,
    P: NewCartesianPoint2d<N> + Copy,
{
    debug_assert!(line.is_valid(), "split input must have at least 2 points");

    let mut current = vec![line[0]];
    // Arc length traveled up to the start of the current edge, and the next multiple of
    // `max_length` at which to cut.
    let mut traveled = N::zero();
    let mut next_split = max_length;

    for pair in line.windows(2) {
        let segment = Segment(&pair[0], &pair[1]);
        let edge_length = segment.length();
        let mut cut_at_end = false;

        if edge_length > N::zero() {
            while next_split <= traveled + edge_length {
                let frac = (next_split - traveled) / edge_length;
                let cut: P = if frac >= N::one() {
                    // The threshold falls on the end vertex of the edge; reuse it instead of
                    // interpolating so the vertex is not duplicated.
                    cut_at_end = true;
                    pair[1]
                } else {
                    segment.interpolate(frac)
                };
                current.push(cut);
                parts.push(Linestring::new(std::mem::replace(&mut current, vec![cut])));
                next_split = next_split + max_length;
            }
        }

        if !cut_at_end {
            current.push(pair[1]);
        }
        traveled = traveled + edge_length;
    }

    // The remainder after the last cut, unless the total length was an exact multiple of
    // `max_length`.
    if current.len() > 1 {
        parts.push(Linestring::new(current));
    }
}
