use crate::error::Result;
use crate::model::{MeshModel, NodeId};

use super::RunState;

/// Rigidly couples one arm back to its parent edge node.
///
/// Idempotent per parent: a parent node shared by several boundary elements
/// gets exactly one node set and one rigid body, built from whichever
/// element reaches it first.
pub(super) fn couple_arm(
    model: &mut MeshModel,
    state: &mut RunState,
    parent: NodeId,
    arm: &[NodeId],
) -> Result<()> {
    if !state.coupled.insert(parent) {
        return Ok(());
    }

    let set = model.add_node_set(arm);
    let rigid_body = model.add_rigid_body(set)?;
    state.node_sets.push(set);
    state.rigid_bodies.push(rigid_body);
    state.merge_candidates.insert(parent);
    Ok(())
}
