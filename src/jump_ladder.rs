//! Jump + ladder combiner (C10): full binary lifting over every node plus
//! the ladder decomposition, landing one jump away from a ladder that
//! finishes the query in O(1). This is the un-sparsified ancestor of the
//! macro-micro optimal construction: O(N log N) preprocessing, O(1) query.

use crate::jump::JumpPointers;
use crate::ladder::Ladders;
use crate::raw::RawTree;
use crate::util::floor_log2;
use crate::NodeId;

/// The jump-pointers-plus-ladders variant.
#[derive(Debug, Clone)]
pub struct JumpAndLadder {
    jump: JumpPointers,
    ladders: Ladders,
    depth: Vec<usize>,
}

impl JumpAndLadder {
    /// Builds full binary-lifting pointers over every node, plus ladders.
    pub fn build(tree: &RawTree) -> Self {
        Self {
            jump: JumpPointers::build(tree),
            ladders: Ladders::build(tree),
            depth: tree.metrics.depth.clone(),
        }
    }

    /// `LA(v, d)`, or `None` if `d` is outside `[0, depth(v)]`.
    pub fn query(&self, v: NodeId, d: i64) -> Option<NodeId> {
        let dv = self.depth[v] as i64;
        if d < 0 || d > dv {
            return None;
        }
        if d == dv {
            return Some(v);
        }
        let delta = (dv - d) as usize;
        let b = floor_log2(delta) as usize;
        let u = self.jump.query(v, dv - (1i64 << b))?;
        if self.depth[u] == d as usize {
            return Some(u);
        }
        self.ladders.query(u, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_binary_scenario_s4() {
        let n = 127usize;
        let parent: Vec<i64> = (0..n)
            .map(|i| if i == 0 { -1 } else { ((i - 1) / 2) as i64 })
            .collect();
        let tree = RawTree::from_parent_array(parent).unwrap();
        let jl = JumpAndLadder::build(&tree);
        assert_eq!(jl.query(126, 0), Some(0));
        assert_eq!(jl.query(126, 5), Some(62));
        assert_eq!(jl.query(126, 6), Some(126));
    }
}
