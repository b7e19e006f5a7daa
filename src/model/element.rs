use std::collections::HashMap;

use super::node::NodeId;
use super::part::PartId;

/// Unique identifier for a shell element. Monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Ordered corner connectivity of a shell element.
///
/// Only 3- and 4-node planar shells are supported; higher-order shells are
/// out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    Tri([NodeId; 3]),
    Quad([NodeId; 4]),
}

impl Connectivity {
    /// Corner node ids in winding order.
    #[must_use]
    pub fn corners(&self) -> &[NodeId] {
        match self {
            Self::Tri(ids) => ids,
            Self::Quad(ids) => ids,
        }
    }

    /// Rewrites corner ids through the survivor map after a node merge.
    pub fn remap(&mut self, survivors: &HashMap<NodeId, NodeId>) {
        let ids: &mut [NodeId] = match self {
            Self::Tri(ids) => ids,
            Self::Quad(ids) => ids,
        };
        for id in ids {
            if let Some(&survivor) = survivors.get(id) {
                *id = survivor;
            }
        }
    }
}

/// Data associated with a shell element.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// The part owning this element.
    pub part: PartId,
    /// Ordered corner node ids.
    pub connectivity: Connectivity,
}

impl ElementData {
    /// Creates a new shell element in the given part.
    #[must_use]
    pub fn new(part: PartId, connectivity: Connectivity) -> Self {
        Self { part, connectivity }
    }
}
