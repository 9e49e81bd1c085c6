//! Jump-node selection and sparse binary lifting over jump nodes, climbing
//! through ladders (C6).

use super::partition::Partition;
use crate::ladder::Ladders;
use crate::raw::RawTree;
use crate::util::bits_for;
use crate::NodeId;

/// Binary-lifting pointers restricted to jump nodes (macro leaves), giving
/// O(N) total storage instead of C3's O(N log N).
#[derive(Debug, Clone)]
pub struct JumpNodes {
    pub is_jump: Vec<bool>,
    /// Compact row index into `table`, `None` for non-jump nodes.
    row_of: Vec<Option<usize>>,
    table: Vec<Vec<Option<NodeId>>>,
    bits: usize,
}

impl JumpNodes {
    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn jump(&self, v: NodeId, i: usize) -> Option<NodeId> {
        let row = self.row_of[v]?;
        self.table[row][i]
    }

    /// Selects jump nodes (macro nodes whose every child is micro) and
    /// builds their sparse jump pointers.
    pub fn build(tree: &RawTree, partition: &Partition, ladders: &Ladders) -> Self {
        let n = tree.len();
        let is_jump: Vec<bool> = (0..n)
            .map(|v| {
                !partition.is_micro[v]
                    && tree.children[v].iter().all(|&c| partition.is_micro[c])
            })
            .collect();

        let mut row_of = vec![None; n];
        let mut rows = 0usize;
        for v in 0..n {
            if is_jump[v] {
                row_of[v] = Some(rows);
                rows += 1;
            }
        }

        let bits = bits_for(n);
        let mut table = vec![vec![None; bits]; rows];
        let depth = &tree.metrics.depth;

        for v in 0..n {
            let Some(row) = row_of[v] else { continue };
            table[row][0] = (tree.parent[v] >= 0).then(|| tree.parent[v] as NodeId);
            for i in 1..bits {
                let step = 1usize << (i - 1);
                table[row][i] = table[row][i - 1].and_then(|mid| {
                    (step <= depth[mid]).then(|| ladders.climb(mid, step))
                });
            }
        }

        Self {
            is_jump,
            row_of,
            table,
            bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_nodes_have_only_micro_children() {
        let tree = RawTree::from_parent_array(vec![-1, 0, 0, 1, 1, 2, 3]).unwrap();
        let partition = Partition::build(&tree);
        let ladders = Ladders::build(&tree);
        let jn = JumpNodes::build(&tree, &partition, &ladders);
        for v in 0..tree.len() {
            if jn.is_jump[v] {
                assert!(!partition.is_micro[v]);
                assert!(tree.children[v].iter().all(|&c| partition.is_micro[c]));
            }
        }
    }
}
