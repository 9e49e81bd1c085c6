//! Long-path / ladder decomposition (C4).
//!
//! A long path follows each node's tallest child; a ladder extends a long
//! path upward by its own length, guaranteeing O(1) amortized doubling when
//! climbed two ladders at a time (spec §4.4, §4.6).

use crate::raw::RawTree;
use crate::NodeId;

/// One ladder: extension ancestors (top-down) followed by the long path
/// itself, all in top-down order (`nodes[0]` is the shallowest).
#[derive(Debug, Clone)]
pub struct Ladder {
    pub nodes: Vec<NodeId>,
}

/// The long-path / ladder decomposition of a tree.
#[derive(Debug, Clone)]
pub struct Ladders {
    ladders: Vec<Ladder>,
    ladder_id: Vec<usize>,
    ladder_pos: Vec<usize>,
    /// `lpc[v]`: v's tallest child, or `-1` if v is a leaf.
    lpc: Vec<i64>,
    depth: Vec<usize>,
    parent: Vec<i64>,
}

impl Ladders {
    /// Number of ladders.
    pub fn len(&self) -> usize {
        self.ladders.len()
    }

    /// Whether there are no ladders (only possible for an empty tree).
    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty()
    }

    pub fn ladder_id(&self, v: NodeId) -> usize {
        self.ladder_id[v]
    }

    pub fn ladder_pos(&self, v: NodeId) -> usize {
        self.ladder_pos[v]
    }

    pub fn ladder(&self, id: usize) -> &Ladder {
        &self.ladders[id]
    }

    pub fn lpc(&self, v: NodeId) -> i64 {
        self.lpc[v]
    }

    /// Builds the long-path decomposition and its ladder extensions.
    pub fn build(tree: &RawTree) -> Self {
        let n = tree.len();
        let height = &tree.metrics.height;

        // lpc[v]: tallest child, ties keep the first-encountered (strict `>`).
        let mut lpc = vec![-1i64; n];
        for v in 0..n {
            let mut best: Option<(NodeId, usize)> = None;
            for &c in &tree.children[v] {
                let h = height[c];
                match best {
                    Some((_, bh)) if h > bh => best = Some((c, h)),
                    None => best = Some((c, h)),
                    _ => {}
                }
            }
            if let Some((c, _)) = best {
                lpc[v] = c as i64;
            }
        }

        let is_head = |v: NodeId| -> bool {
            let p = tree.parent[v];
            p == -1 || lpc[p as usize] != v as i64
        };

        let mut ladders: Vec<Ladder> = Vec::new();
        let mut ladder_id = vec![usize::MAX; n];
        let mut ladder_pos = vec![0usize; n];

        for v in 0..n {
            if !is_head(v) {
                continue;
            }
            let id = ladders.len();
            let mut path = vec![v];
            let mut cur = v;
            while lpc[cur] != -1 {
                cur = lpc[cur] as NodeId;
                path.push(cur);
            }
            for (pos, &node) in path.iter().enumerate() {
                ladder_id[node] = id;
                ladder_pos[node] = pos;
            }
            ladders.push(Ladder { nodes: path });
        }

        // Extend each ladder upward by its own path length.
        for ladder in ladders.iter_mut() {
            let h = ladder.nodes.len();
            let head = ladder.nodes[0];
            let mut ext = Vec::new();
            let mut cur = tree.parent[head];
            while cur != -1 && ext.len() < h {
                ext.push(cur as NodeId);
                cur = tree.parent[cur as NodeId];
            }
            ext.reverse();
            let shift = ext.len();
            if shift > 0 {
                for &node in &ladder.nodes {
                    ladder_pos[node] += shift;
                }
                ext.extend(ladder.nodes.drain(..));
                ladder.nodes = ext;
            }
        }

        Self {
            ladders,
            ladder_id,
            ladder_pos,
            lpc,
            depth: tree.metrics.depth.clone(),
            parent: tree.parent.clone(),
        }
    }

    /// `LA(v, d)` answered purely via ladder lookups, or `None` if `d` is
    /// outside `[0, depth(v)]`.
    pub fn query(&self, v: NodeId, d: i64) -> Option<NodeId> {
        if d < 0 || d as usize > self.depth[v] {
            return None;
        }
        let d = d as usize;
        let mut v = v;
        loop {
            let ladder = &self.ladders[self.ladder_id[v]];
            let top_depth = self.depth[ladder.nodes[0]];
            if top_depth <= d {
                let idx = self.ladder_pos[v] - (self.depth[v] - d);
                return Some(ladder.nodes[idx]);
            }
            let top = ladder.nodes[0];
            v = self.parent[top] as NodeId;
        }
    }

    /// Climbs exactly `k` levels up from `u` via ladders (spec §4.6's
    /// `ClimbLadders`). `k` must not exceed `depth(u)`; this holds by
    /// construction everywhere this crate calls it.
    pub fn climb(&self, u: NodeId, k: usize) -> NodeId {
        let target = self.depth[u] as i64 - k as i64;
        self.query(u, target)
            .expect("climb_ladders: k must not exceed depth(u)")
    }
}
