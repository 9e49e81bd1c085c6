//! Macro/micro partition (C5).

use crate::raw::RawTree;
use crate::NodeId;

/// Micro-tree threshold: `µ = max(1, floor(log2(N+1) / 4))` (spec §4.5).
pub fn threshold(n: usize) -> usize {
    let n1 = (n + 1) as f64;
    ((n1.log2() / 4.0).floor() as usize).max(1)
}

/// The macro/micro partition of every node.
#[derive(Debug, Clone)]
pub struct Partition {
    pub is_micro: Vec<bool>,
    /// Highest ancestor of a micro node (or the node itself) whose subtree
    /// is entirely micro; `None` for macro nodes.
    pub micro_root: Vec<Option<NodeId>>,
    pub mu: usize,
}

impl Partition {
    /// Builds the partition in one BFS pass from the root.
    pub fn build(tree: &RawTree) -> Self {
        let n = tree.len();
        let mu = threshold(n);
        let is_micro: Vec<bool> = (0..n).map(|v| tree.metrics.subtree_size[v] <= mu).collect();

        let mut micro_root = vec![None; n];
        micro_root[tree.root] = is_micro[tree.root].then_some(tree.root);

        let mut queue = std::collections::VecDeque::new();
        queue.push_back(tree.root);
        while let Some(v) = queue.pop_front() {
            for &c in &tree.children[v] {
                micro_root[c] = if is_micro[v] {
                    micro_root[v]
                } else if is_micro[c] {
                    Some(c)
                } else {
                    None
                };
                queue.push_back(c);
            }
        }

        Self {
            is_micro,
            micro_root,
            mu,
        }
    }
}
