//! The Macro-Micro-Tree decomposition (C5-C9): O(N) preprocessing, O(1)
//! worst-case query.

mod dispatcher;
mod jump_descendant;
mod jump_nodes;
mod micro_tree;
mod partition;

pub use dispatcher::Optimal;
