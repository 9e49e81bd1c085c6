//! A tagged variant over the five interchangeable LA implementations
//! (spec §9, "Polymorphism": one capability set, not a trait hierarchy).

use crate::complexity::Complexity;
use crate::error::Result;
use crate::jump::JumpPointers;
use crate::jump_ladder::JumpAndLadder;
use crate::ladder::Ladders;
use crate::macro_micro::Optimal;
use crate::raw::RawTree;
use crate::table::{AncestorTable, DEFAULT_CAPACITY_CAP};
use crate::NodeId;

/// Which of the five LA algorithms a [`crate::LevelAncestor`] was built as.
#[derive(Debug, Clone)]
pub enum Variant {
    /// C2: quadratic ancestor table.
    Table(AncestorTable),
    /// C3: binary-lifting jump pointers.
    JumpPointers(JumpPointers),
    /// C4: long-path ladders only.
    Ladder(Ladders),
    /// C3+C4: full jump pointers combined with ladders.
    JumpAndLadder(JumpAndLadder),
    /// C5-C9: the Macro-Micro-Tree optimal construction.
    Optimal(Optimal),
}

/// Which algorithm to build; see spec §9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Table,
    JumpPointers,
    Ladder,
    JumpAndLadder,
    Optimal,
}

impl Variant {
    pub fn build(kind: Kind, tree: &RawTree) -> Result<Self> {
        Ok(match kind {
            Kind::Table => Variant::Table(AncestorTable::build(tree, DEFAULT_CAPACITY_CAP)?),
            Kind::JumpPointers => Variant::JumpPointers(JumpPointers::build(tree)),
            Kind::Ladder => Variant::Ladder(Ladders::build(tree)),
            Kind::JumpAndLadder => Variant::JumpAndLadder(JumpAndLadder::build(tree)),
            Kind::Optimal => Variant::Optimal(Optimal::build(tree)),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Variant::Table(_) => Kind::Table,
            Variant::JumpPointers(_) => Kind::JumpPointers,
            Variant::Ladder(_) => Kind::Ladder,
            Variant::JumpAndLadder(_) => Kind::JumpAndLadder,
            Variant::Optimal(_) => Kind::Optimal,
        }
    }

    pub fn query(&self, v: NodeId, d: i64) -> Option<NodeId> {
        match self {
            Variant::Table(t) => t.query(v, d),
            Variant::JumpPointers(j) => j.query(v, d),
            Variant::Ladder(l) => l.query(v, d),
            Variant::JumpAndLadder(jl) => jl.query(v, d),
            Variant::Optimal(o) => o.query(v, d),
        }
    }

}

impl Kind {
    /// Asymptotic preprocessing cost, a property of the algorithm itself
    /// (spec §6, "Introspection") — available even before `Build` runs.
    pub fn build_complexity(&self) -> Complexity {
        match self {
            Kind::Table => Complexity::Quadratic,
            Kind::JumpPointers => Complexity::Linearithmic,
            Kind::Ladder => Complexity::Linear,
            Kind::JumpAndLadder => Complexity::Linearithmic,
            Kind::Optimal => Complexity::Linear,
        }
    }

    /// Asymptotic per-query cost.
    pub fn query_complexity(&self) -> Complexity {
        match self {
            Kind::Table => Complexity::Constant,
            Kind::JumpPointers => Complexity::Logarithmic,
            Kind::Ladder => Complexity::Logarithmic,
            Kind::JumpAndLadder => Complexity::Constant,
            Kind::Optimal => Complexity::Constant,
        }
    }
}
