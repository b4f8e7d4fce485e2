//! Puzzle state contract trait.

use crate::fingerprint::Fingerprint;

/// Trait for puzzle states that support traversal.
///
/// Any type satisfying this capability set can be driven by the engine with
/// no engine-side changes. States are immutable values: `apply` returns a
/// new state and leaves the receiver untouched.
///
/// # Contract
///
/// - `legal_moves` must be finite and deterministic: the same state must
///   enumerate the same moves in the same order on every call. Enumeration
///   order is the only tie-break between sibling states, so it decides
///   which of two equal-depth goals a strategy reports first.
/// - Every move returned by `legal_moves` must be accepted by `apply` on
///   the same state. An `apply` rejection during traversal is an adapter
///   programming error and aborts the run.
/// - `fingerprint` must be a pure function of semantic state. States that
///   differ only in how they were reached must fingerprint identically, or
///   cycle detection silently fails and traversal of a cyclic space
///   diverges.
pub trait Puzzle: Sized {
    /// The move type for this puzzle. `Display` is the serialization
    /// surface for solution paths in reports.
    type Move: Clone + Eq + std::fmt::Debug + std::fmt::Display;

    /// Test whether this state satisfies the puzzle's goal.
    fn is_goal(&self) -> bool;

    /// Enumerate all moves legal in this state, deterministically ordered.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move, producing the successor state.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if `mv` is not legal in this state. The
    /// engine never passes such a move; seeing this error during a run
    /// means the adapter's `legal_moves`/`apply` pair disagree.
    fn apply(&self, mv: &Self::Move) -> Result<Self, IllegalMove>;

    /// Canonical fingerprint of this state (see contract above).
    fn fingerprint(&self) -> Fingerprint;

    /// Whether this state is known unsolvable regardless of further moves.
    ///
    /// A dead-end state still counts as expanded, but its successors are
    /// not enumerated. The default never prunes; adapters override it when
    /// a cheap unsolvability test exists (e.g. a word-ladder state whose
    /// word length differs from the target's).
    fn is_dead_end(&self) -> bool {
        false
    }
}

/// Typed failure for a move application rejected by the adapter.
///
/// Raised by [`Puzzle::apply`] when handed a move that is not legal in the
/// current state. Inside a run this is a contract violation between the
/// adapter's `legal_moves` and `apply`; the engine propagates it and the
/// run produces no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove {
    /// Human-readable description of the rejected move and why.
    pub detail: String,
}

impl IllegalMove {
    /// Construct from anything stringlike.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "illegal move: {}", self.detail)
    }
}

impl std::error::Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_display_includes_detail() {
        let err = IllegalMove::new("slide Up from top row");
        assert_eq!(format!("{err}"), "illegal move: slide Up from top row");
    }

    #[test]
    fn illegal_move_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        let err = IllegalMove::new("x");
        takes_error(&err);
    }
}
