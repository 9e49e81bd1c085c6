//! Micro-tree shape encoding and shared lookup tables (C8).

use super::partition::Partition;
use crate::raw::RawTree;
use crate::NodeId;
use std::collections::HashMap;
use std::rc::Rc;

/// `microTable[E][i][d']` = DFS index of the ancestor at local depth `d'` of
/// the node with DFS index `i`, for a micro-tree of shape `E`.
type MicroTable = Vec<Vec<Option<usize>>>;

/// All micro-tree structure: per-node DFS index and tree id, plus one
/// shared table per distinct shape (spec §4.8, §9 "Shape-keyed table
/// sharing").
#[derive(Debug, Clone)]
pub struct MicroTrees {
    /// DFS index within the node's own micro-tree; unused (`0`) for macro
    /// nodes.
    dfs_index: Vec<usize>,
    /// Which micro-tree a (micro) node belongs to.
    tree_id: Vec<Option<usize>>,
    /// DFS-index -> global node id, per micro-tree.
    dfs_to_node: Vec<Vec<NodeId>>,
    /// Shared table per micro-tree, by shape.
    table: Vec<Rc<MicroTable>>,
    pub distinct_shapes: usize,
}

impl MicroTrees {
    /// `LA` restricted to a single micro-tree: `v` is micro, `d` is a valid
    /// depth within `v`'s own micro-tree (`d >= depth(micro_root(v))`).
    pub fn query(&self, v: NodeId, local_depth: usize) -> Option<NodeId> {
        let id = self.tree_id[v]?;
        let i = self.dfs_index[v];
        let j = self.table[id][i][local_depth]?;
        Some(self.dfs_to_node[id][j])
    }

    /// Builds the DFS encodings and shape-shared tables for every micro
    /// subtree identified by `partition`.
    pub fn build(tree: &RawTree, partition: &Partition) -> Self {
        let n = tree.len();
        let mut dfs_index = vec![0usize; n];
        let mut tree_id = vec![None; n];
        let mut dfs_to_node: Vec<Vec<NodeId>> = Vec::new();
        let mut table: Vec<Rc<MicroTable>> = Vec::new();
        let mut shared: HashMap<Vec<u8>, Rc<MicroTable>> = HashMap::new();
        let mut distinct_shapes = 0usize;

        for r in 0..n {
            if partition.micro_root[r] != Some(r) {
                continue;
            }
            let id = dfs_to_node.len();
            let (bits, nodes, local_depth, local_parent) = dfs_micro(tree, r);
            for (idx, &node) in nodes.iter().enumerate() {
                dfs_index[node] = idx;
                tree_id[node] = Some(id);
            }

            let shared_table = shared.entry(bits).or_insert_with(|| {
                distinct_shapes += 1;
                Rc::new(build_micro_table(&local_depth, &local_parent))
            });
            table.push(shared_table.clone());
            dfs_to_node.push(nodes);
        }

        Self {
            dfs_index,
            tree_id,
            dfs_to_node,
            table,
            distinct_shapes,
        }
    }
}

/// Iterative DFS from micro-root `r` emitting the balanced-parenthesis bit
/// string (0 = down, 1 = up, no emission on the final return to `r`) and
/// collecting, in pre-order: the node list, each node's local depth, and
/// each node's local parent (by DFS index).
fn dfs_micro(
    tree: &RawTree,
    r: NodeId,
) -> (Vec<u8>, Vec<NodeId>, Vec<usize>, Vec<Option<usize>>) {
    let mut bits = Vec::new();
    let mut nodes = vec![r];
    let mut local_depth = vec![0usize];
    let mut local_parent = vec![None];

    // (node, next-child-index, node's own DFS index)
    let mut stack: Vec<(NodeId, usize, usize)> = vec![(r, 0, 0)];
    while let Some(&mut (v, ref mut next, v_dfs)) = stack.last_mut() {
        if *next < tree.children[v].len() {
            let c = tree.children[v][*next];
            *next += 1;
            let c_dfs = nodes.len();
            nodes.push(c);
            local_depth.push(local_depth[v_dfs] + 1);
            local_parent.push(Some(v_dfs));
            bits.push(0u8);
            stack.push((c, 0, c_dfs));
        } else {
            stack.pop();
            if !stack.is_empty() {
                bits.push(1u8);
            }
        }
    }

    (bits, nodes, local_depth, local_parent)
}

/// Builds the shared lookup table for one distinct shape: for every DFS
/// index `i`, walk up via `local_parent`, writing the ancestor reached at
/// each local depth.
fn build_micro_table(local_depth: &[usize], local_parent: &[Option<usize>]) -> MicroTable {
    let t = local_depth.len();
    let mut table = vec![vec![None; t]; t];
    for i in 0..t {
        let mut cur = i;
        loop {
            table[i][local_depth[cur]] = Some(cur);
            match local_parent[cur] {
                Some(p) => cur = p,
                None => break,
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_micro_tree() {
        let tree = RawTree::from_parent_array(vec![-1]).unwrap();
        let partition = Partition::build(&tree);
        let mt = MicroTrees::build(&tree, &partition);
        assert_eq!(mt.query(0, 0), Some(0));
    }

    #[test]
    fn small_path_micro_tree() {
        let tree = RawTree::from_parent_array(vec![-1, 0, 1]).unwrap();
        let partition = Partition::build(&tree);
        let mt = MicroTrees::build(&tree, &partition);
        assert_eq!(mt.query(2, 0), Some(0));
        assert_eq!(mt.query(2, 1), Some(1));
        assert_eq!(mt.query(2, 2), Some(2));
    }

    #[test]
    fn shapes_are_shared() {
        // two disjoint isomorphic micro subtrees hanging under a root that
        // is itself micro (everything here is one micro-tree since N is
        // tiny) — shape sharing is exercised at larger N in builder tests.
        let tree = RawTree::from_parent_array(vec![-1, 0, 0, 1, 2]).unwrap();
        let partition = Partition::build(&tree);
        let mt = MicroTrees::build(&tree, &partition);
        assert_eq!(mt.query(3, 1), Some(1));
        assert_eq!(mt.query(4, 1), Some(2));
    }
}
