//! Tree metrics (C1): depth, height and subtree size via iterative post-order.

use crate::error::{Error, Result};
use crate::NodeId;

/// Per-node metrics computed by a single iterative post-order pass from the
/// root, as specified in spec §4.1.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// `depth[v]`, with `depth[root] == 0`.
    pub depth: Vec<usize>,
    /// `height[v]`, with `height[leaf] == 1`.
    pub height: Vec<usize>,
    /// `subtree_size[v]`, with `subtree_size[leaf] == 1`.
    pub subtree_size: Vec<usize>,
}

/// Computes [`Metrics`] for every node reachable from `root`.
///
/// Uses an explicit stack carrying a "processed" flag rather than recursion,
/// so that N up to the order of 10^6 does not overflow the call stack
/// (spec §9, "Recursion").
///
/// # Errors
///
/// Returns [`Error::InvalidTree`] if any node other than `root` is never
/// reached (a disconnected node, or more than one root in `parent`).
pub fn compute(n: usize, children: &[Vec<NodeId>], root: NodeId) -> Result<Metrics> {
    let mut depth = vec![0usize; n];
    let mut height = vec![0usize; n];
    let mut subtree_size = vec![0usize; n];
    let mut visited = vec![false; n];

    // (node, processed)
    let mut stack: Vec<(NodeId, bool)> = Vec::with_capacity(n);
    stack.push((root, false));

    while let Some((v, processed)) = stack.pop() {
        if processed {
            let mut size = 1;
            let mut h = 0;
            for &c in &children[v] {
                size += subtree_size[c];
                h = h.max(height[c]);
            }
            subtree_size[v] = size;
            height[v] = h + 1;
        } else {
            visited[v] = true;
            stack.push((v, true));
            for &c in &children[v] {
                depth[c] = depth[v] + 1;
                stack.push((c, false));
            }
        }
    }

    if let Some(unreached) = visited.iter().position(|&seen| !seen) {
        return Err(Error::InvalidTree {
            reason: format!("node {unreached} is not reachable from root {root}"),
        });
    }

    Ok(Metrics {
        depth,
        height,
        subtree_size,
    })
}
