//! The public Level Ancestor handle and its build state machine (spec
//! §4.10, §6).

use crate::error::{Error, Result};
use crate::raw::RawTree;
use crate::variant::{Kind, Variant};
use crate::NodeId;
use core::fmt::{self, Display};

#[derive(Debug, Clone)]
enum State {
    /// Edges may still be added; `Build` has not yet succeeded.
    Mutable {
        n: usize,
        edges: Vec<(NodeId, NodeId)>,
    },
    /// `Build` succeeded; queries are allowed.
    Built { tree_len: usize, variant: Variant },
    /// `Build` failed; the instance is permanently unusable.
    Poisoned { error: Error },
}

/// A Level Ancestor structure over a rooted tree of `N` nodes.
///
/// Built via [`LevelAncestor::new`] from a dense `parent[]` array, or
/// incrementally via [`LevelAncestor::empty`], [`LevelAncestor::add_edge`]
/// and [`LevelAncestor::build`]. Once built, the instance is logically
/// immutable and `Query` never allocates (spec §5).
#[derive(Debug, Clone)]
pub struct LevelAncestor {
    kind: Kind,
    state: State,
}

impl LevelAncestor {
    /// Builds the `Optimal` variant directly from a dense `parent[]` array
    /// (`parent[root] == -1`).
    pub fn new(parent: Vec<i64>) -> Result<Self> {
        Self::new_with_kind(parent, Kind::Optimal)
    }

    /// Like [`LevelAncestor::new`], but choosing which of the five
    /// algorithms (spec §9, "Polymorphism") to build.
    pub fn new_with_kind(parent: Vec<i64>, kind: Kind) -> Result<Self> {
        let n = parent.len();
        let mut la = Self::empty_with_kind(n, kind);
        let mut root = None;
        for (child, &p) in parent.iter().enumerate() {
            if p == -1 {
                root = Some(child);
            } else {
                la.add_edge(p as usize, child)?;
            }
        }
        let root = root.ok_or_else(|| Error::InvalidTree {
            reason: "no root found (no entry with parent == -1)".into(),
        })?;
        la.build(root)?;
        Ok(la)
    }

    /// Creates an empty, mutable instance for `n` nodes, building the
    /// `Optimal` variant once [`LevelAncestor::build`] is called.
    pub fn empty(n: usize) -> Self {
        Self::empty_with_kind(n, Kind::Optimal)
    }

    /// Like [`LevelAncestor::empty`], choosing which algorithm to build.
    pub fn empty_with_kind(n: usize, kind: Kind) -> Self {
        Self {
            kind,
            state: State::Mutable {
                n,
                edges: Vec::new(),
            },
        }
    }

    /// Records a parent-child edge. Only valid while the instance is
    /// [`Mutable`](State::Mutable), i.e. before [`LevelAncestor::build`] has
    /// succeeded.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        match &mut self.state {
            State::Mutable { n, edges } => {
                if parent >= *n {
                    return Err(Error::BadNode {
                        node: parent,
                        len: *n,
                    });
                }
                if child >= *n {
                    return Err(Error::BadNode { node: child, len: *n });
                }
                edges.push((parent, child));
                Ok(())
            }
            _ => Err(Error::InvalidTree {
                reason: "cannot add edges once Build has run".into(),
            }),
        }
    }

    /// Runs the build pipeline rooted at `root`. On success the instance
    /// transitions to `Built` and accepts queries; on failure it
    /// transitions to `Poisoned` and every subsequent `Query` returns
    /// [`Error::NotBuilt`] (spec §4.10).
    pub fn build(&mut self, root: NodeId) -> Result<()> {
        let (n, edges) = match &self.state {
            State::Mutable { n, edges } => (*n, edges.clone()),
            _ => {
                return Err(Error::InvalidTree {
                    reason: "Build has already run".into(),
                })
            }
        };

        let result = RawTree::from_edges(n, &edges, root)
            .and_then(|tree| Variant::build(self.kind, &tree).map(|v| (tree.len(), v)));

        match result {
            Ok((tree_len, variant)) => {
                self.state = State::Built { tree_len, variant };
                Ok(())
            }
            Err(e) => {
                self.state = State::Poisoned { error: e.clone() };
                Err(e)
            }
        }
    }

    /// `Query(v, d)`: the ancestor of `v` at depth `d`, or `None` if `d` is
    /// outside `[0, depth(v)]` (spec §6, §7). `v` must be in `[0, N)`.
    pub fn query(&self, v: NodeId, d: i64) -> Result<Option<NodeId>> {
        match &self.state {
            State::Built { tree_len, variant } => {
                if v >= *tree_len {
                    return Err(Error::BadNode {
                        node: v,
                        len: *tree_len,
                    });
                }
                Ok(variant.query(v, d))
            }
            State::Mutable { .. } | State::Poisoned { .. } => Err(Error::NotBuilt),
        }
    }

    /// Asymptotic preprocessing cost of the chosen algorithm.
    pub fn build_complexity(&self) -> crate::complexity::Complexity {
        self.kind.build_complexity()
    }

    /// Asymptotic per-query cost of the chosen algorithm.
    pub fn query_complexity(&self) -> crate::complexity::Complexity {
        self.kind.query_complexity()
    }

    /// Number of distinct micro-tree shapes found during the build, when
    /// built as [`Kind::Optimal`]; `None` for every other variant.
    pub fn distinct_micro_shapes(&self) -> Option<usize> {
        match &self.state {
            State::Built {
                variant: Variant::Optimal(o),
                ..
            } => Some(o.distinct_shapes()),
            _ => None,
        }
    }
}

impl Display for LevelAncestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Mutable { n, .. } => write!(f, "LevelAncestor({:?}, {n} nodes, mutable)", self.kind),
            State::Built { tree_len, .. } => {
                write!(f, "LevelAncestor({:?}, {tree_len} nodes, built)", self.kind)
            }
            State::Poisoned { error } => {
                write!(f, "LevelAncestor({:?}, poisoned: {error})", self.kind)
            }
        }
    }
}
