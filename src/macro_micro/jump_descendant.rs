//! Jump-descendant propagation (C7): for each macro node, one reachable
//! jump-node descendant within its own macro subtree.

use super::jump_nodes::JumpNodes;
use super::partition::Partition;
use crate::raw::RawTree;
use crate::NodeId;

/// `jd[v]`, defined for every macro node; `None` for micro nodes.
#[derive(Debug, Clone)]
pub struct JumpDescendant {
    jd: Vec<Option<NodeId>>,
}

impl JumpDescendant {
    pub fn get(&self, v: NodeId) -> Option<NodeId> {
        self.jd[v]
    }

    /// Propagates `jd` bottom-up: a jump node is its own descendant;
    /// any other macro node inherits the first child's jump descendant
    /// found in iteration order (spec §4.7 — the exact choice among
    /// children is implementation-defined, see `DESIGN.md`).
    pub fn build(tree: &RawTree, partition: &Partition, jump_nodes: &JumpNodes) -> Self {
        let n = tree.len();
        let mut jd: Vec<Option<NodeId>> = vec![None; n];
        for v in 0..n {
            if jump_nodes.is_jump[v] {
                jd[v] = Some(v);
            }
        }

        // Iterative post-order so every child is resolved before its parent.
        let mut stack: Vec<(NodeId, bool)> = vec![(tree.root, false)];
        while let Some((v, processed)) = stack.pop() {
            if processed {
                if !partition.is_micro[v] && jd[v].is_none() {
                    jd[v] = tree.children[v].iter().find_map(|&c| jd[c]);
                }
            } else {
                stack.push((v, true));
                for &c in &tree.children[v] {
                    stack.push((c, false));
                }
            }
        }

        Self { jd }
    }
}
