//! Binary-lifting jump pointers (C3): `jump[v][i]` = 2^i-th ancestor.

use crate::raw::RawTree;
use crate::util::bits_for;
use crate::NodeId;

/// The binary-lifting variant.
#[derive(Debug, Clone)]
pub struct JumpPointers {
    jump: Vec<Vec<Option<NodeId>>>,
    depth: Vec<usize>,
    bits: usize,
}

impl JumpPointers {
    /// Builds sparse jump pointers for every node, `i` in `[0, ceil(log2(N+1)))`.
    pub fn build(tree: &RawTree) -> Self {
        let n = tree.len();
        let bits = bits_for(n);
        let mut jump = vec![vec![None; bits]; n];

        for v in 0..n {
            jump[v][0] = (tree.parent[v] >= 0).then(|| tree.parent[v] as NodeId);
        }
        for i in 1..bits {
            for v in 0..n {
                jump[v][i] = jump[v][i - 1].and_then(|mid| jump[mid][i - 1]);
            }
        }

        Self {
            jump,
            depth: tree.metrics.depth.clone(),
            bits,
        }
    }

    /// `LA(v, d)`, or `None` if `d` is outside `[0, depth(v)]`.
    pub fn query(&self, v: NodeId, d: i64) -> Option<NodeId> {
        let dv = self.depth[v] as i64;
        if d < 0 || d > dv {
            return None;
        }
        let mut steps_up = (dv - d) as usize;
        let mut cur = v;
        let mut i = 0;
        while steps_up > 0 {
            if steps_up & 1 == 1 {
                cur = self.jump[cur][i]?;
            }
            steps_up >>= 1;
            i += 1;
            debug_assert!(steps_up == 0 || i < self.bits, "stepsUp exceeds table bits");
        }
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_scenario_s1() {
        let parent: Vec<i64> = vec![-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let tree = RawTree::from_parent_array(parent).unwrap();
        let jp = JumpPointers::build(&tree);
        for k in 0..=10 {
            assert_eq!(jp.query(10, k), Some(k as usize));
        }
        assert_eq!(jp.query(10, 11), None);
    }

    #[test]
    fn star_scenario_s2() {
        let tree = RawTree::from_parent_array(vec![-1, 0, 0, 0, 0]).unwrap();
        let jp = JumpPointers::build(&tree);
        for i in 1..5 {
            assert_eq!(jp.query(i, 0), Some(0));
            assert_eq!(jp.query(i, 1), Some(i));
        }
    }
}
