pub mod element;
pub mod merge;
pub mod node;
pub mod part;
pub mod set;

pub use element::{Connectivity, ElementData, ElementId};
pub use node::{NodeData, NodeId};
pub use part::{PartData, PartDefinition, PartId, SectionData, SectionId};
pub use set::{NodeSetData, RigidBodyData, SetId};

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::ModelError;
use crate::math::Point3;

/// Central arena that owns all mesh entities.
///
/// Replaces the host's ambient mesh database: nodes, elements, node sets
/// and rigid bodies carry monotonic integer ids allocated from explicit
/// counters (never rescanned, never reused), while parts and sections are
/// read-only registries keyed by generational indices.
#[derive(Debug, Default)]
pub struct MeshModel {
    nodes: BTreeMap<NodeId, NodeData>,
    elements: BTreeMap<ElementId, ElementData>,
    parts: SlotMap<PartId, PartData>,
    sections: SlotMap<SectionId, SectionData>,
    node_sets: BTreeMap<SetId, NodeSetData>,
    rigid_bodies: BTreeMap<SetId, RigidBodyData>,
    next_node: u32,
    next_element: u32,
    next_set: u32,
    next_rigid_pid: u32,
}

impl MeshModel {
    /// Creates a new, empty mesh model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Creates a node at `point` and returns its freshly allocated id.
    pub fn add_node(&mut self, point: Point3) -> NodeId {
        self.next_node += 1;
        let id = NodeId(self.next_node);
        self.nodes.insert(id, NodeData::new(point));
        id
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, ModelError> {
        self.nodes
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(format!("node {}", id.0)))
    }

    /// Iterates over all live nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter().map(|(&id, data)| (id, data))
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- Element operations ---

    /// Creates a shell element and returns its freshly allocated id.
    pub fn add_element(&mut self, data: ElementData) -> ElementId {
        self.next_element += 1;
        let id = ElementId(self.next_element);
        self.elements.insert(id, data);
        id
    }

    /// Returns a reference to the element data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn element(&self, id: ElementId) -> Result<&ElementData, ModelError> {
        self.elements
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(format!("element {}", id.0)))
    }

    /// Iterates over all elements in id order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &ElementData)> {
        self.elements.iter().map(|(&id, data)| (id, data))
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Corner coordinates of an element, in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the element or one of its nodes is not found.
    pub fn element_corners(&self, id: ElementId) -> Result<Vec<Point3>, ModelError> {
        let element = self.element(id)?;
        element
            .connectivity
            .corners()
            .iter()
            .map(|&nid| self.node(nid).map(|n| n.point))
            .collect()
    }

    // --- Part and section registries ---

    /// Registers a part and returns its key.
    pub fn add_part(&mut self, data: PartData) -> PartId {
        self.parts.insert(data)
    }

    /// Returns a reference to the part data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn part(&self, id: PartId) -> Result<&PartData, ModelError> {
        self.parts
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("part".into()))
    }

    /// Registers a section and returns its key.
    pub fn add_section(&mut self, data: SectionData) -> SectionId {
        self.sections.insert(data)
    }

    /// Returns a reference to the section data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn section(&self, id: SectionId) -> Result<&SectionData, ModelError> {
        self.sections
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("section".into()))
    }

    // --- Node sets and rigid bodies ---

    /// Creates a node set from the given ids (de-duplicated, order kept)
    /// and returns its freshly allocated id.
    pub fn add_node_set(&mut self, ids: &[NodeId]) -> SetId {
        self.next_set += 1;
        let id = SetId(self.next_set);
        self.node_sets.insert(id, NodeSetData::new(ids));
        id
    }

    /// Returns a reference to the node set, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn node_set(&self, id: SetId) -> Result<&NodeSetData, ModelError> {
        self.node_sets
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(format!("node set {}", id.0)))
    }

    /// Iterates over all node sets in id order.
    pub fn node_sets(&self) -> impl Iterator<Item = (SetId, &NodeSetData)> {
        self.node_sets.iter().map(|(&id, data)| (id, data))
    }

    /// Creates a rigid body coupling the given node set. The constraint
    /// adopts the set's id; its representative part id comes from an
    /// independent counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the node set is not found, or if a rigid body
    /// already couples it — at most one constraint per set.
    pub fn add_rigid_body(&mut self, node_set: SetId) -> Result<SetId, ModelError> {
        self.node_set(node_set)?;
        if self.rigid_bodies.contains_key(&node_set) {
            return Err(ModelError::DuplicateRigidBody(node_set.0));
        }
        self.next_rigid_pid += 1;
        let pid = self.next_rigid_pid;
        self.rigid_bodies.insert(node_set, RigidBodyData { node_set, pid });
        Ok(node_set)
    }

    /// Returns a reference to the rigid body, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the model.
    pub fn rigid_body(&self, id: SetId) -> Result<&RigidBodyData, ModelError> {
        self.rigid_bodies
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(format!("rigid body {}", id.0)))
    }

    /// Iterates over all rigid bodies in id order.
    pub fn rigid_bodies(&self) -> impl Iterator<Item = (SetId, &RigidBodyData)> {
        self.rigid_bodies.iter().map(|(&id, data)| (id, data))
    }

    /// Number of rigid bodies.
    #[must_use]
    pub fn rigid_body_count(&self) -> usize {
        self.rigid_bodies.len()
    }

}
