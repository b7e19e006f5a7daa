use std::collections::HashMap;

use super::node::NodeId;

/// Unique identifier for a node set. Monotonically increasing.
///
/// A rigid body shares the id of the node set it couples, so this also
/// identifies rigid bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(pub u32);

/// An ordered, de-duplicated collection of node ids.
#[derive(Debug, Clone)]
pub struct NodeSetData {
    nodes: Vec<NodeId>,
}

impl NodeSetData {
    /// Creates a node set from the given ids, dropping repeats while
    /// preserving first-seen order.
    #[must_use]
    pub fn new(ids: &[NodeId]) -> Self {
        let mut nodes = Vec::with_capacity(ids.len());
        for &id in ids {
            if !nodes.contains(&id) {
                nodes.push(id);
            }
        }
        Self { nodes }
    }

    /// Member node ids in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Rewrites membership through the survivor map after a node merge,
    /// dropping duplicates the rewrite produces.
    pub fn remap(&mut self, survivors: &HashMap<NodeId, NodeId>) {
        for id in &mut self.nodes {
            if let Some(&survivor) = survivors.get(id) {
                *id = survivor;
            }
        }
        let mut seen = Vec::with_capacity(self.nodes.len());
        self.nodes.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
    }
}

/// A rigid-body constraint coupling every node of one node set.
#[derive(Debug, Clone, Copy)]
pub struct RigidBodyData {
    /// The coupled node set. The constraint's own id equals this set's id.
    pub node_set: SetId,
    /// Representative part id, allocated from an independent counter.
    pub pid: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_set_deduplicates_preserving_order() {
        let set = NodeSetData::new(&[NodeId(3), NodeId(1), NodeId(3), NodeId(2), NodeId(1)]);
        assert_eq!(set.nodes(), &[NodeId(3), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn remap_deduplicates_collapsed_members() {
        let mut set = NodeSetData::new(&[NodeId(1), NodeId(2), NodeId(3)]);
        let survivors: HashMap<NodeId, NodeId> = [(NodeId(3), NodeId(1))].into();
        set.remap(&survivors);
        assert_eq!(set.nodes(), &[NodeId(1), NodeId(2)]);
    }
}
