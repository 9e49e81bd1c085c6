#![doc = include_str!("../README.md")]
#![warn(clippy::unwrap_used, clippy::panic, clippy::panic_in_result_fn)]

//! Level Ancestor (LA) structures over a rooted tree of `N` nodes.
//!
//! `LA(v, d)` is the unique ancestor of `v` at depth `d`, or `None` if `d`
//! is outside `[0, depth(v)]`. Five interchangeable algorithms are provided
//! (see [`Kind`]), spanning a Pareto curve of preprocessing cost vs. query
//! cost; [`Kind::Optimal`] is the Macro-Micro-Tree construction of Bender
//! & Farach-Colton, with O(N) preprocessing and O(1) worst-case query.

/// A node identifier in `[0, N)`.
pub type NodeId = usize;

pub mod complexity;
pub mod error;
mod jump;
mod jump_ladder;
mod ladder;
mod la;
mod macro_micro;
mod metrics;
mod raw;
mod table;
mod util;
mod variant;

pub use complexity::Complexity;
pub use error::{Error, Result};
pub use la::LevelAncestor;
pub use variant::Kind;
