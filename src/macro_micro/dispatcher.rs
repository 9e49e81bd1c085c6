//! Optimal query dispatcher (C9), orchestrating the build pipeline in the
//! exact order spec.md §2 requires: C1 -> C5 -> C4 -> C6 -> C7 -> C8.

use super::jump_descendant::JumpDescendant;
use super::jump_nodes::JumpNodes;
use super::micro_tree::MicroTrees;
use super::partition::Partition;
use crate::ladder::Ladders;
use crate::raw::RawTree;
use crate::util::floor_log2;
use crate::NodeId;

/// The Macro-Micro-Tree optimal variant: O(N) build, O(1) worst-case query.
#[derive(Debug, Clone)]
pub struct Optimal {
    depth: Vec<usize>,
    parent: Vec<i64>,
    partition: Partition,
    ladders: Ladders,
    jump_nodes: JumpNodes,
    jump_descendant: JumpDescendant,
    micro_trees: MicroTrees,
}

impl Optimal {
    /// Number of distinct micro-tree shapes found (diagnostic; see
    /// `SPEC_FULL.md` §5).
    pub fn distinct_shapes(&self) -> usize {
        self.micro_trees.distinct_shapes
    }

    /// Runs the full build pipeline. Order matters: C5's micro partition
    /// must exist before C4's ladders are consumed by C6, which must run
    /// before C7's propagation, which must run before C8's encoding.
    pub fn build(tree: &RawTree) -> Self {
        let _span = tracing::debug_span!("build", n = tree.len()).entered();

        let partition = Partition::build(tree);
        tracing::debug!(mu = partition.mu, "partitioned macro/micro nodes");

        let ladders = Ladders::build(tree);
        tracing::debug!(ladder_count = ladders.len(), "built ladders");

        let jump_nodes = JumpNodes::build(tree, &partition, &ladders);
        let jump_node_count = jump_nodes.is_jump.iter().filter(|&&b| b).count();
        tracing::debug!(jump_node_count, "selected jump nodes");

        let jump_descendant = JumpDescendant::build(tree, &partition, &jump_nodes);

        let micro_trees = MicroTrees::build(tree, &partition);
        tracing::debug!(
            distinct_shapes = micro_trees.distinct_shapes,
            "encoded micro-trees"
        );

        Self {
            depth: tree.metrics.depth.clone(),
            parent: tree.parent.clone(),
            partition,
            ladders,
            jump_nodes,
            jump_descendant,
            micro_trees,
        }
    }

    /// `LA(v, d)` (spec §4.9), or `None` if `d` is outside `[0, depth(v)]`.
    pub fn query(&self, v: NodeId, d: i64) -> Option<NodeId> {
        let dv = self.depth[v] as i64;
        if d < 0 || d > dv {
            return None;
        }
        let mut v = v;

        // Micro phase: answer directly, or exit to the macro parent.
        if self.partition.is_micro[v] {
            let r = self
                .partition
                .micro_root[v]
                .expect("micro node must have a micro root");
            let rd = self.depth[r] as i64;
            if d >= rd {
                let local_depth = (d - rd) as usize;
                return self.micro_trees.query(v, local_depth);
            }
            match self.parent_of(r) {
                Some(p) => v = p,
                None => return None,
            }
        }

        if self.depth[v] as i64 == d {
            return Some(v);
        }

        // Macro phase: one jump-pointer step, then one ladder lookup.
        let j = self
            .jump_descendant
            .get(v)
            .expect("macro node must have a jump descendant");
        let delta = self.depth[j] as i64 - d;
        debug_assert!(delta >= 1);
        let b = floor_log2(delta as usize) as usize;
        let u = self
            .jump_nodes
            .jump(j, b)
            .expect("jump node must have a pointer at this level");
        if self.depth[u] as i64 == d {
            return Some(u);
        }
        self.ladders.query(u, d)
    }

    fn parent_of(&self, v: NodeId) -> Option<NodeId> {
        // micro_root[v]'s parent is the macro node we exit to; `None` only
        // when `v` is the global root, i.e. the whole tree is one micro-tree.
        (self.parent[v] >= 0).then(|| self.parent[v] as NodeId)
    }
}
