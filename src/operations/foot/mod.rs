mod coupling;
mod generate;
mod stitch;
pub mod thickness;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{DegenerateInputError, Result, SelectionError};
use crate::math::{self, PlaneClassifier};
use crate::model::{ElementId, MeshModel, NodeId, PartId, SetId};

/// Builds a "foot" along a boundary edge of a shell-element component.
///
/// The foot is a band of new quad elements lying in the plane spanned by
/// the picked edge direction and the first boundary element's normal,
/// subdivided into an even number of layers across the component's
/// thickness, rigidly coupled back to the parent edge nodes, and stitched
/// into a single consistent mesh by a final tolerance merge. The result
/// gives the component a contactable surface offset from its mid-surface.
pub struct MakeFoot {
    boundary: Vec<ElementId>,
    edge_nodes: Vec<NodeId>,
    foot_width: Option<f64>,
    foot_part: PartId,
}

/// What one [`MakeFoot`] run created.
#[derive(Debug)]
pub struct FootReport {
    /// Newly created nodes that survived the stitch.
    pub new_nodes: Vec<NodeId>,
    /// Newly created foot elements, in creation order.
    pub new_elements: Vec<ElementId>,
    /// Node sets created for the rigid couplings.
    pub node_sets: Vec<SetId>,
    /// Rigid bodies, one per distinct parent edge node.
    pub rigid_bodies: Vec<SetId>,
    /// Number of foot layers across the thickness. Always even.
    pub foot_num: usize,
    /// Effective layer width after rounding to an even layer count.
    pub foot_width: f64,
    /// Smallest free-edge length observed during generation.
    pub min_edge_len: f64,
    /// Tolerance used by the final node merge.
    pub merge_tolerance: f64,
    /// Nodes removed by the final merge.
    pub merged_nodes: usize,
}

/// Resolved layer layout shared by all boundary elements.
struct FootParams {
    foot_num: usize,
    foot_width: f64,
    half_thickness: f64,
    foot_part: PartId,
}

/// Accumulator state threaded through the per-element loop.
///
/// The merge-candidate and already-coupled markers are plain per-run sets,
/// not persistent node state; nothing in this struct outlives one
/// `execute` call.
struct RunState {
    min_edge_len: f64,
    merge_candidates: HashSet<NodeId>,
    coupled: HashSet<NodeId>,
    new_nodes: Vec<NodeId>,
    new_elements: Vec<ElementId>,
    node_sets: Vec<SetId>,
    rigid_bodies: Vec<SetId>,
}

impl RunState {
    fn new() -> Self {
        Self {
            min_edge_len: f64::INFINITY,
            merge_candidates: HashSet::new(),
            coupled: HashSet::new(),
            new_nodes: Vec::new(),
            new_elements: Vec::new(),
            node_sets: Vec::new(),
            rigid_bodies: Vec::new(),
        }
    }
}

impl MakeFoot {
    /// Creates a new `MakeFoot` operation.
    ///
    /// `boundary` is the user's flagged edge elements in traversal order,
    /// `edge_nodes` the picked nodes defining the construction line (the
    /// first two are used), `foot_width` the requested layer width (`None`
    /// or `0` means auto: exactly two layers of half the thickness each),
    /// and `foot_part` the destination part for the new elements.
    #[must_use]
    pub fn new(
        boundary: Vec<ElementId>,
        edge_nodes: Vec<NodeId>,
        foot_width: Option<f64>,
        foot_part: PartId,
    ) -> Self {
        Self {
            boundary,
            edge_nodes,
            foot_width,
            foot_part,
        }
    }

    /// Executes the operation.
    ///
    /// Selection preconditions are validated before any mutation. A
    /// geometry error on a later boundary element halts the run but leaves
    /// what earlier elements created in the model; there is no rollback.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid selection, a boundary element that
    /// does not touch the edge, or degenerate input geometry.
    pub fn execute(&self, model: &mut MeshModel) -> Result<FootReport> {
        if self.edge_nodes.len() < 2 {
            return Err(SelectionError::TooFewEdgeNodes(self.edge_nodes.len()).into());
        }
        if self.boundary.is_empty() {
            return Err(SelectionError::EmptyBoundary.into());
        }

        let p1 = model.node(self.edge_nodes[0])?.point;
        let p2 = model.node(self.edge_nodes[1])?.point;
        let edge_vec = p2 - p1;
        if edge_vec.norm() < math::TOLERANCE {
            return Err(DegenerateInputError::CoincidentEdgeNodes.into());
        }
        debug!(?edge_vec, "edge direction");

        // All boundary elements are assumed to share the first one's
        // thickness.
        let thickness = thickness::resolve_thickness(model, self.boundary[0])?;
        let (foot_num, foot_width) = layer_layout(thickness, self.foot_width);
        debug!(thickness, foot_num, foot_width, "foot layer layout");

        let params = FootParams {
            foot_num,
            foot_width,
            half_thickness: thickness / 2.0,
            foot_part: self.foot_part,
        };
        let mut state = RunState::new();
        let mut classifier: Option<PlaneClassifier> = None;

        for &element in &self.boundary {
            let normal = generate::element_normal(model, element)?;

            // The foot plane is frozen from the first element's normal.
            // Later elements on a curved edge keep this plane even though
            // their own normals differ; traversal order therefore decides
            // which element supplies it.
            let frozen = match classifier {
                Some(c) => c,
                None => {
                    let foot_normal = math::try_unit(&edge_vec.cross(&normal))
                        .ok_or(DegenerateInputError::EdgeParallelToNormal { element })?;
                    let c = PlaneClassifier::new(p1, foot_normal);
                    classifier = Some(c);
                    c
                }
            };

            let (node_a, node_b) = generate::classify_edge_pair(model, &frozen, element)?;
            let arms = generate::build_arms(model, &params, &mut state, node_a, node_b, &normal)?;
            generate::emit_foot_strip(model, &params, &mut state, &arms);
            coupling::couple_arm(model, &mut state, node_a, &arms.a)?;
            coupling::couple_arm(model, &mut state, node_b, &arms.b)?;
        }

        let (merge_tolerance, merged_nodes) = stitch::stitch(
            model,
            &state.merge_candidates,
            state.min_edge_len,
            foot_width,
        );
        state.new_nodes.retain(|&id| model.node(id).is_ok());

        Ok(FootReport {
            new_nodes: state.new_nodes,
            new_elements: state.new_elements,
            node_sets: state.node_sets,
            rigid_bodies: state.rigid_bodies,
            foot_num,
            foot_width,
            min_edge_len: state.min_edge_len,
            merge_tolerance,
            merged_nodes,
        })
    }
}

/// Layer count and effective width for the given thickness.
///
/// The count is rounded to the nearest even number, clamped to at least 2,
/// so layers sit symmetrically about the mid-surface; the width is then
/// recomputed so the layers exactly tile the thickness.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn layer_layout(thickness: f64, requested: Option<f64>) -> (usize, f64) {
    let half = thickness / 2.0;
    match requested {
        Some(width) if width > 0.0 => {
            let foot_num = ((half / width).round().max(1.0) as usize) * 2;
            (foot_num, thickness / foot_num as f64)
        }
        _ => (2, half),
    }
}
