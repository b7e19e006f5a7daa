use std::collections::{HashMap, HashSet};

use crate::math::Point3;

use super::{MeshModel, NodeId};

impl MeshModel {
    /// Merges candidate nodes lying within `tolerance` of each other.
    ///
    /// The lowest-id node of each coincident cluster survives; element
    /// connectivity and node-set membership are rewritten to it and the
    /// losers are removed. Freed ids are never reused. Uses spatial hashing
    /// so only neighbouring candidates are compared.
    ///
    /// Returns the number of nodes removed. Re-running with the same
    /// tolerance after convergence removes nothing.
    pub fn merge_nodes(&mut self, candidates: &HashSet<NodeId>, tolerance: f64) -> usize {
        if tolerance <= 0.0 {
            return 0;
        }

        // Sorted so cluster survivors are decided lowest id first.
        let mut entries: Vec<(NodeId, Point3)> = candidates
            .iter()
            .filter_map(|&id| self.node(id).ok().map(|data| (id, data.point)))
            .collect();
        entries.sort_by_key(|&(id, _)| id);

        let cell_size = tolerance * 2.0;
        let mut grid: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        for (idx, (_, point)) in entries.iter().enumerate() {
            grid.entry(cell_of(point, cell_size)).or_default().push(idx);
        }

        // target[i] == i means entry i survives (so far).
        let mut target: Vec<usize> = (0..entries.len()).collect();
        for i in 0..entries.len() {
            if target[i] != i {
                continue;
            }
            let (cx, cy, cz) = cell_of(&entries[i].1, cell_size);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let Some(bucket) = grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                            continue;
                        };
                        for &j in bucket {
                            if j <= i || target[j] != j {
                                continue;
                            }
                            if (entries[i].1 - entries[j].1).norm() < tolerance {
                                target[j] = i;
                            }
                        }
                    }
                }
            }
        }

        let survivors: HashMap<NodeId, NodeId> = target
            .iter()
            .enumerate()
            .filter(|&(j, &i)| i != j)
            .map(|(j, &i)| (entries[j].0, entries[i].0))
            .collect();

        if survivors.is_empty() {
            return 0;
        }

        for element in self.elements.values_mut() {
            element.connectivity.remap(&survivors);
        }
        for set in self.node_sets.values_mut() {
            set.remap(&survivors);
        }
        for merged in survivors.keys() {
            self.nodes.remove(merged);
        }

        survivors.len()
    }
}

/// Spatial-hash cell of a point at the given cell size.
#[allow(clippy::cast_possible_truncation)]
fn cell_of(p: &Point3, cell_size: f64) -> (i64, i64, i64) {
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
        (p.z / cell_size).floor() as i64,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Connectivity, ElementData, PartData, PartDefinition, SectionData};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn quad_model() -> (MeshModel, [NodeId; 6]) {
        // Two quads sharing an edge, except the shared-edge nodes are
        // duplicated: (n2, n3) coincide with (n5, n6).
        let mut m = MeshModel::new();
        let section = m.add_section(SectionData::new(1.0));
        let part = m.add_part(PartData::new(PartDefinition::Homogeneous(section)));

        let n1 = m.add_node(p(0.0, 0.0, 0.0));
        let n2 = m.add_node(p(1.0, 0.0, 0.0));
        let n3 = m.add_node(p(1.0, 1.0, 0.0));
        let n4 = m.add_node(p(0.0, 1.0, 0.0));
        let n5 = m.add_node(p(1.0, 0.0, 0.0));
        let n6 = m.add_node(p(1.0, 1.0, 0.0));
        let n7 = m.add_node(p(2.0, 0.0, 0.0));
        let n8 = m.add_node(p(2.0, 1.0, 0.0));

        m.add_element(ElementData::new(part, Connectivity::Quad([n1, n2, n3, n4])));
        m.add_element(ElementData::new(part, Connectivity::Quad([n5, n7, n8, n6])));

        (m, [n2, n3, n5, n6, n7, n8])
    }

    #[test]
    fn coincident_nodes_collapse_to_lowest_id() {
        let (mut m, [n2, n3, n5, n6, n7, n8]) = quad_model();
        let candidates: HashSet<NodeId> = [n2, n3, n5, n6, n7, n8].into();

        let merged = m.merge_nodes(&candidates, 0.1);
        assert_eq!(merged, 2);
        assert!(m.node(n5).is_err());
        assert!(m.node(n6).is_err());
        assert!(m.node(n2).is_ok());
        assert!(m.node(n3).is_ok());

        // Second quad now references the survivors
        let (_, second) = m.elements().nth(1).unwrap();
        assert_eq!(second.connectivity.corners(), &[n2, n7, n8, n3]);
    }

    #[test]
    fn merge_is_idempotent() {
        let (mut m, ids) = quad_model();
        let candidates: HashSet<NodeId> = ids.into();

        assert_eq!(m.merge_nodes(&candidates, 0.1), 2);
        let count = m.node_count();
        assert_eq!(m.merge_nodes(&candidates, 0.1), 0);
        assert_eq!(m.node_count(), count);
    }

    #[test]
    fn merge_never_reaches_across_tolerance() {
        let (mut m, ids) = quad_model();
        let candidates: HashSet<NodeId> = ids.into();

        // Everything is at least 1.0 apart except the true duplicates
        m.merge_nodes(&candidates, 0.5);
        assert_eq!(m.node_count(), 6);
    }

    #[test]
    fn merge_skips_non_candidates() {
        let (mut m, [_, _, n5, n6, ..]) = quad_model();
        // Duplicates exist but are not flagged as candidates
        let candidates: HashSet<NodeId> = [n5, n6].into();

        assert_eq!(m.merge_nodes(&candidates, 0.1), 0);
        assert_eq!(m.node_count(), 8);
    }

    #[test]
    fn ids_are_not_reused_after_merge() {
        let (mut m, ids) = quad_model();
        let candidates: HashSet<NodeId> = ids.into();
        m.merge_nodes(&candidates, 0.1);

        let fresh = m.add_node(p(9.0, 9.0, 9.0));
        assert_eq!(fresh, NodeId(9));
    }

    #[test]
    fn node_sets_are_remapped_and_deduplicated() {
        let (mut m, [n2, n3, n5, n6, ..]) = quad_model();
        let set = m.add_node_set(&[n2, n5, n3, n6]);
        let candidates: HashSet<NodeId> = [n2, n3, n5, n6].into();

        m.merge_nodes(&candidates, 0.1);
        assert_eq!(m.node_set(set).unwrap().nodes(), &[n2, n3]);
    }

    #[test]
    fn zero_tolerance_merges_nothing() {
        let (mut m, ids) = quad_model();
        let candidates: HashSet<NodeId> = ids.into();
        assert_eq!(m.merge_nodes(&candidates, 0.0), 0);
    }
}
