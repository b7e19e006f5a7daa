use std::collections::HashSet;

use tracing::debug;

use crate::model::{MeshModel, NodeId};

/// Merge tolerance sized safely below the smallest feature just created.
///
/// The 0.4 factor merges truly coincident nodes from adjacent boundary
/// elements while never reaching across a real foot layer (spacing
/// `foot_width`) or the narrowest free edge (`min_edge_len`).
pub(super) fn merge_tolerance(min_edge_len: f64, foot_width: f64) -> f64 {
    0.4 * min_edge_len.min(foot_width)
}

/// Unifies the coincident nodes that neighbouring boundary elements
/// generated independently at the same arm offsets.
pub(super) fn stitch(
    model: &mut MeshModel,
    candidates: &HashSet<NodeId>,
    min_edge_len: f64,
    foot_width: f64,
) -> (f64, usize) {
    let tolerance = merge_tolerance(min_edge_len, foot_width);
    let merged = model.merge_nodes(candidates, tolerance);
    debug!(min_edge_len, tolerance, merged, "stitched foot nodes");
    (tolerance, merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tolerance_tracks_the_smaller_feature() {
        assert_relative_eq!(merge_tolerance(1.0, 5.0), 0.4);
        assert_relative_eq!(merge_tolerance(5.0, 1.0), 0.4);
        assert_relative_eq!(merge_tolerance(2.5, 2.5), 1.0);
    }

    #[test]
    fn tolerance_never_exceeds_free_edge_bound() {
        for &(edge, width) in &[(1.0, 5.0), (0.2, 0.1), (3.0, 3.0)] {
            assert!(merge_tolerance(edge, width) <= 0.4 * edge);
        }
    }
}
