use thiserror::Error;

/// Errors surfaced by construction and query of a Level Ancestor structure.
///
/// Out-of-range depth queries are *not* an error (spec §7): `Query` answers
/// those with `None`. Only the cases below reach the caller as an `Err`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The quadratic ancestor table was asked to index more nodes than its
    /// configured capacity cap allows.
    #[error("ancestor table capacity exceeded: n = {n} > cap = {cap}")]
    CapacityExceeded {
        /// Number of nodes in the tree that was rejected.
        n: usize,
        /// The configured cap.
        cap: usize,
    },

    /// Tree metrics traversal (C1) could not reach every node from the root,
    /// or more than one root was declared.
    #[error("invalid tree: {reason}")]
    InvalidTree {
        /// Human-readable description of what made the tree invalid.
        reason: String,
    },

    /// A node id passed to `AddEdge` or `Query` is outside `[0, len)`.
    #[error("node id {node} out of range for tree of {len} nodes")]
    BadNode {
        /// The offending id.
        node: usize,
        /// Number of nodes in the tree.
        len: usize,
    },

    /// `Query` was called before `Build` succeeded, or after `Build` failed.
    #[error("structure has not been built")]
    NotBuilt,
}

/// Convenience alias used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
