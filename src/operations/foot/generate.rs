use crate::error::{DegenerateInputError, GeometryError, Result};
use crate::math::plane::PLANE_TOLERANCE;
use crate::math::{self, PlaneClassifier, Vector3};
use crate::model::{Connectivity, ElementData, ElementId, MeshModel, NodeId};

use super::{FootParams, RunState};

/// One boundary element's pair of arms: ordered node sequences spanning
/// the thickness outward from each parent edge node.
pub(super) struct ArmPair {
    pub a: Vec<NodeId>,
    pub b: Vec<NodeId>,
}

/// Winding normal of a boundary element.
pub(super) fn element_normal(model: &MeshModel, element: ElementId) -> Result<Vector3> {
    let corners = model.element_corners(element)?;
    math::winding_normal(&corners)
        .ok_or_else(|| DegenerateInputError::ZeroAreaElement { element }.into())
}

/// Scans the element's corners in winding order and returns the first two
/// lying on the foot plane.
///
/// Fewer than two on-plane corners means the element does not actually
/// touch the selected edge; that is a fatal configuration error, not an
/// element to skip.
pub(super) fn classify_edge_pair(
    model: &MeshModel,
    classifier: &PlaneClassifier,
    element: ElementId,
) -> Result<(NodeId, NodeId)> {
    let data = model.element(element)?;
    let mut on_plane = Vec::with_capacity(2);
    for &corner in data.connectivity.corners() {
        if classifier.contains(&model.node(corner)?.point) {
            on_plane.push(corner);
        }
    }
    match on_plane[..] {
        [a, b, ..] => Ok((a, b)),
        _ => Err(GeometryError::InsufficientEdgeNodes {
            element,
            found: on_plane.len(),
        }
        .into()),
    }
}

/// Builds both arms for one boundary element.
///
/// Layer `x` sits at offset `x * foot_width - half_thickness` along the
/// element's own normal. A layer landing on the mid-surface reuses the
/// parent node instead of stacking a coincident duplicate. Every arm node
/// joins the merge-candidate set; the innermost and outermost rung lengths
/// feed the running free-edge minimum.
#[allow(clippy::cast_precision_loss)]
pub(super) fn build_arms(
    model: &mut MeshModel,
    params: &FootParams,
    state: &mut RunState,
    node_a: NodeId,
    node_b: NodeId,
    normal: &Vector3,
) -> Result<ArmPair> {
    let pa = model.node(node_a)?.point;
    let pb = model.node(node_b)?.point;

    let mut arm_a = Vec::with_capacity(params.foot_num + 1);
    let mut arm_b = Vec::with_capacity(params.foot_num + 1);

    for x in 0..=params.foot_num {
        let c = (x as f64) * params.foot_width - params.half_thickness;
        if c.abs() < PLANE_TOLERANCE {
            arm_a.push(node_a);
            arm_b.push(node_b);
            state.merge_candidates.insert(node_a);
            state.merge_candidates.insert(node_b);
        } else {
            let na = model.add_node(pa + normal * c);
            let nb = model.add_node(pb + normal * c);
            state.merge_candidates.insert(na);
            state.merge_candidates.insert(nb);
            state.new_nodes.push(na);
            state.new_nodes.push(nb);
            arm_a.push(na);
            arm_b.push(nb);
        }
        if x == 0 || x == params.foot_num {
            let rung = ((pb + normal * c) - (pa + normal * c)).norm();
            state.min_edge_len = state.min_edge_len.min(rung);
        }
    }

    Ok(ArmPair { a: arm_a, b: arm_b })
}

/// Emits the element's foot strip: `foot_num` quads connecting consecutive
/// rungs of the two arms, assigned to the destination part.
pub(super) fn emit_foot_strip(
    model: &mut MeshModel,
    params: &FootParams,
    state: &mut RunState,
    arms: &ArmPair,
) {
    for x in 0..params.foot_num {
        let quad = Connectivity::Quad([arms.a[x], arms.a[x + 1], arms.b[x + 1], arms.b[x]]);
        let id = model.add_element(ElementData::new(params.foot_part, quad));
        state.new_elements.push(id);
    }
}
