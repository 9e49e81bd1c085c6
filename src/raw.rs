//! The shared, immutable-after-build representation every variant builds on
//! (spec §3, "Arrays over references" — spec §9).

use crate::error::{Error, Result};
use crate::metrics::{self, Metrics};
use crate::NodeId;

/// `parent[]` plus insertion-ordered `children[]`, the two parallel index
/// arrays every LA variant is built from.
#[derive(Debug, Clone)]
pub struct RawTree {
    /// `parent[v]`, `-1` for the root.
    pub parent: Vec<i64>,
    /// Insertion-ordered child lists.
    pub children: Vec<Vec<NodeId>>,
    /// Root node id.
    pub root: NodeId,
    /// Metrics computed by C1.
    pub metrics: Metrics,
}

impl RawTree {
    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Builds from a dense `parent[]` array where `parent[root] == -1`.
    ///
    /// Any acyclic assignment with a single `-1` root is accepted (spec §6);
    /// `parent[i] < i` is not required.
    pub fn from_parent_array(parent: Vec<i64>) -> Result<Self> {
        let n = parent.len();
        let mut children = vec![Vec::new(); n];
        let mut root = None;
        for (v, &p) in parent.iter().enumerate() {
            if p == -1 {
                if root.is_some() {
                    return Err(Error::InvalidTree {
                        reason: "more than one root (parent == -1)".into(),
                    });
                }
                root = Some(v);
            } else {
                if p < 0 || p as usize >= n {
                    return Err(Error::BadNode {
                        node: p as usize,
                        len: n,
                    });
                }
                children[p as usize].push(v);
            }
        }
        let root = root.ok_or_else(|| Error::InvalidTree {
            reason: "no root found (no entry with parent == -1)".into(),
        })?;
        let metrics = metrics::compute(n, &children, root)?;
        Ok(Self {
            parent,
            children,
            root,
            metrics,
        })
    }

    /// Builds incrementally from explicit edges, mirroring the
    /// `New(N)` + `AddEdge` + `Build(root)` constructor of spec §6.
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)], root: NodeId) -> Result<Self> {
        if root >= n {
            return Err(Error::BadNode { node: root, len: n });
        }
        let mut parent = vec![-1i64; n];
        let mut children = vec![Vec::new(); n];
        for &(p, c) in edges {
            if p >= n {
                return Err(Error::BadNode { node: p, len: n });
            }
            if c >= n {
                return Err(Error::BadNode { node: c, len: n });
            }
            parent[c] = p as i64;
            children[p].push(c);
        }
        let metrics = metrics::compute(n, &children, root)?;
        Ok(Self {
            parent,
            children,
            root,
            metrics,
        })
    }

    #[inline]
    pub fn depth(&self, v: NodeId) -> usize {
        self.metrics.depth[v]
    }
}
