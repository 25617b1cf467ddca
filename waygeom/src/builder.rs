//! Construction of line geometries from raw way data.

use log::debug;

use crate::geometry::Geometry;
use crate::linestring::Linestring;
use crate::point::Point2d;

/// A reference to a node of a way.
///
/// Node locations are resolved ahead of time by an external location store; a node whose
/// location the store could not provide reports `None`.
pub trait NodeRef {
    /// Type of the resolved location.
    type Point;

    /// Identity of the referenced node.
    fn id(&self) -> i64;

    /// Resolved location of the node, if there is one.
    fn location(&self) -> Option<Self::Point>;
}

/// An ordered line feature referencing nodes by identity.
///
/// The node order is semantically significant: it defines the direction of the line and the
/// order of its vertices.
pub trait Way {
    /// Type of the node references.
    type Node: NodeRef;

    /// Identity of the way.
    fn id(&self) -> i64;

    /// Iterates over the node references in line order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;
}

/// Creates a linestring geometry from the nodes of a way.
///
/// The construction is all-or-nothing: if the location of any referenced node is unresolved, or
/// if fewer than 2 locations are collected, the whole way is rejected and [`Geometry::Null`] is
/// returned. Consecutive duplicate locations are kept as they are.
pub fn create_linestring<W: Way>(way: &W) -> Geometry<<W::Node as NodeRef>::Point> {
    let mut points = Vec::new();
    for node in way.nodes() {
        let Some(location) = node.location() else {
            debug!(
                "rejecting way {}: node {} has no location",
                way.id(),
                node.id()
            );
            return Geometry::Null;
        };
        points.push(location);
    }

    if points.len() < 2 {
        debug!(
            "rejecting way {}: {} point(s) cannot form a line",
            way.id(),
            points.len()
        );
        return Geometry::Null;
    }

    Geometry::Linestring(Linestring::new(points))
}

/// Simple [`NodeRef`] implementation holding its location inline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WayNode<Point = Point2d> {
    id: i64,
    location: Option<Point>,
}

impl<Point> WayNode<Point> {
    /// Creates a node reference with a resolved location.
    pub fn new(id: i64, location: Point) -> Self {
        Self {
            id,
            location: Some(location),
        }
    }

    /// Creates a node reference whose location could not be resolved.
    pub fn unresolved(id: i64) -> Self {
        Self { id, location: None }
    }
}

impl<Point: Copy> NodeRef for WayNode<Point> {
    type Point = Point;

    fn id(&self) -> i64 {
        self.id
    }

    fn location(&self) -> Option<Point> {
        self.location
    }
}

/// Simple [`Way`] implementation backed by a vector of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct WayNodes<Point = Point2d> {
    id: i64,
    nodes: Vec<WayNode<Point>>,
}

impl<Point> WayNodes<Point> {
    /// Creates a way with the given id and node references.
    pub fn new(id: i64, nodes: Vec<WayNode<Point>>) -> Self {
        Self { id, nodes }
    }
}

impl<Point: Copy> Way for WayNodes<Point> {
    type Node = WayNode<Point>;

    fn id(&self) -> i64 {
        self.id
    }

    fn nodes(&self) -> impl Iterator<Item = &WayNode<Point>> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linestring::Linestring;
    use assert_matches::assert_matches;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn create_linestring_from_way() {
        init_logging();
        let way = WayNodes::new(
            20,
            vec![
                WayNode::new(1, Point2d::new(1.0, 1.0)),
                WayNode::new(2, Point2d::new(2.0, 2.0)),
            ],
        );

        let geom = create_linestring(&way);

        assert!(geom.is_linestring());
        assert_eq!(geom.geometry_type(), "LINESTRING");
        assert_eq!(geom.num_geometries(), 1);
        assert_eq!(geom.area(), 0.0);
        assert_eq!(
            geom.as_linestring(),
            Some(&Linestring::new(vec![
                Point2d::new(1.0, 1.0),
                Point2d::new(2.0, 2.0),
            ]))
        );
        assert_eq!(geom.centroid(), Geometry::Point(Point2d::new(1.5, 1.5)));
    }

    #[test]
    fn node_order_is_preserved() {
        init_logging();
        let way = WayNodes::new(
            21,
            vec![
                WayNode::new(1, Point2d::new(2.0, 2.0)),
                WayNode::new(2, Point2d::new(0.0, 0.0)),
                WayNode::new(3, Point2d::new(1.0, 1.0)),
            ],
        );

        let geom = create_linestring(&way);

        assert_eq!(
            geom.as_linestring().map(|line| (**line).clone()),
            Some(vec![
                Point2d::new(2.0, 2.0),
                Point2d::new(0.0, 0.0),
                Point2d::new(1.0, 1.0),
            ])
        );
    }

    #[test]
    fn duplicate_locations_are_kept() {
        init_logging();
        let way = WayNodes::new(
            22,
            vec![
                WayNode::new(1, Point2d::new(1.0, 1.0)),
                WayNode::new(2, Point2d::new(1.0, 1.0)),
                WayNode::new(3, Point2d::new(2.0, 2.0)),
            ],
        );

        let geom = create_linestring(&way);

        assert_eq!(geom.as_linestring().map(|line| line.len()), Some(3));
    }

    #[test]
    fn way_without_locations_is_rejected() {
        init_logging();
        let way =
            WayNodes::<Point2d>::new(20, vec![WayNode::unresolved(1), WayNode::unresolved(2)]);

        assert_matches!(create_linestring(&way), Geometry::Null);
    }

    #[test]
    fn way_with_partially_resolved_nodes_is_rejected() {
        init_logging();
        let way = WayNodes::new(
            20,
            vec![WayNode::new(1, Point2d::new(1.0, 1.0)), WayNode::unresolved(2)],
        );

        assert_matches!(create_linestring(&way), Geometry::Null);
    }

    #[test]
    fn way_with_single_node_is_rejected() {
        init_logging();
        let way = WayNodes::new(20, vec![WayNode::new(1, Point2d::new(1.0, 1.0))]);

        assert_matches!(create_linestring(&way), Geometry::Null);
    }

    #[test]
    fn empty_way_is_rejected() {
        init_logging();
        let way = WayNodes::<Point2d>::new(20, vec![]);

        assert_matches!(create_linestring(&way), Geometry::Null);
    }
}
