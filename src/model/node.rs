use crate::math::Point3;

/// Unique identifier for a mesh node.
///
/// Ids are session-unique and strictly increasing; a merged-away node's id
/// is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Data associated with a mesh node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The 3D position of the node.
    pub point: Point3,
}

impl NodeData {
    /// Creates a new node at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
