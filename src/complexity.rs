use core::fmt::{self, Display};

/// A trivial tag describing the asymptotic cost of an operation.
///
/// This is intentionally a closed, uninterpreted set (spec §1 scopes the
/// complexity-class enumeration as a trivial introspection tag, not a
/// computation): callers use it to pick a variant, not to derive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// O(1).
    Constant,
    /// O(log N).
    Logarithmic,
    /// O(N).
    Linear,
    /// O(N log N).
    Linearithmic,
    /// O(N^2).
    Quadratic,
    /// O(sqrt N).
    SquareRoot,
}

impl Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log N)",
            Complexity::Linear => "O(N)",
            Complexity::Linearithmic => "O(N log N)",
            Complexity::Quadratic => "O(N^2)",
            Complexity::SquareRoot => "O(sqrt N)",
        };
        f.write_str(s)
    }
}
