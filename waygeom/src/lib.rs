//! Construction and arc-length re-noding of geographic line geometries.
//!
//! The crate covers three tightly coupled pieces:
//!
//! * a geometry value model — [`Geometry`] over points, linestrings and multilinestrings, plus
//!   a null sentinel, with shape-dispatched operations (part count, area, centroid, type label,
//!   equality);
//! * a linear feature builder — [`create_linestring`] assembles a validated [`Linestring`] from
//!   an ordered sequence of node references whose locations were resolved by an external
//!   collaborator, rejecting the whole way if any location is missing;
//! * a segmentation engine — [`segmentize`] splits a line into consecutive pieces no longer
//!   than a given maximum, interpolating the cut points exactly on the original edges.
//!
//! Coordinates are plain 2d cartesian values in double precision; the crate does not deal with
//! projections or geographic coordinate systems.
//!
//! ```
//! use waygeom::{create_linestring, segmentize, Point2d, WayNode, WayNodes};
//!
//! let way = WayNodes::new(
//!     1,
//!     vec![
//!         WayNode::new(1, Point2d::new(0.0, 0.0)),
//!         WayNode::new(2, Point2d::new(1.0, 0.0)),
//!     ],
//! );
//!
//! let geom = create_linestring(&way);
//! assert!(geom.is_linestring());
//!
//! let pieces = segmentize(&geom, 0.5);
//! assert_eq!(pieces.num_geometries(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod linestring;
pub mod multi_linestring;
pub mod point;
pub mod segment;
pub mod segmentize;

pub use builder::{create_linestring, NodeRef, Way, WayNode, WayNodes};
pub use error::WaygeomError;
pub use geometry::Geometry;
pub use linestring::Linestring;
pub use multi_linestring::MultiLinestring;
pub use point::{CartesianPoint2d, CartesianPoint2dFloat, NewCartesianPoint2d, Point2d};
pub use segment::Segment;
pub use segmentize::segmentize;
