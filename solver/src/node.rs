//! Frontier node type.

use crate::contract::Puzzle;
use crate::fingerprint::Fingerprint;

/// An immutable traversal node: a puzzle state plus the move path that
/// produced it from the initial state.
///
/// Invariants:
/// - `depth == path.len()` (root = 0, empty path).
/// - `fingerprint == state.fingerprint()`, cached at construction so the
///   engine hashes each state exactly once.
///
/// Nodes are owned exclusively by the frontier holding them; the engine
/// moves them out on pop and drops them after expansion.
#[derive(Debug, Clone)]
pub struct SearchNode<P: Puzzle> {
    /// The puzzle state at this node.
    pub state: P,
    /// Ordered moves from the initial state to `state`.
    pub path: Vec<P::Move>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cached canonical fingerprint of `state`.
    pub fingerprint: Fingerprint,
}

impl<P: Puzzle> SearchNode<P> {
    /// Wrap the initial state as the root node (empty path, depth 0).
    #[must_use]
    pub fn root(state: P) -> Self {
        let fingerprint = state.fingerprint();
        Self {
            state,
            path: Vec::new(),
            depth: 0,
            fingerprint,
        }
    }

    /// Build the successor node reached from this node by `mv`.
    ///
    /// `state` must be the result of applying `mv` to `self.state`; the
    /// engine produces it via [`Puzzle::apply`] immediately before calling
    /// this.
    #[must_use]
    pub fn successor(&self, state: P, mv: P::Move) -> Self {
        let fingerprint = state.fingerprint();
        let mut path = self.path.clone();
        path.push(mv);
        Self {
            state,
            path,
            depth: self.depth + 1,
            fingerprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::IllegalMove;
    use crate::fingerprint::digest;

    const DOMAIN_TALLY: &[u8] = b"QUARRY::TEST_TALLY::V1\0";

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tally {
        value: u8,
        target: u8,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Bump;

    impl std::fmt::Display for Bump {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("bump")
        }
    }

    impl Puzzle for Tally {
        type Move = Bump;

        fn is_goal(&self) -> bool {
            self.value == self.target
        }

        fn legal_moves(&self) -> Vec<Bump> {
            if self.value < self.target {
                vec![Bump]
            } else {
                Vec::new()
            }
        }

        fn apply(&self, _mv: &Bump) -> Result<Self, IllegalMove> {
            if self.value >= self.target {
                return Err(IllegalMove::new("bump past target"));
            }
            Ok(Self {
                value: self.value + 1,
                target: self.target,
            })
        }

        fn fingerprint(&self) -> Fingerprint {
            digest(DOMAIN_TALLY, &[self.value, self.target])
        }
    }

    #[test]
    fn root_has_empty_path_and_depth_zero() {
        let node = SearchNode::root(Tally {
            value: 0,
            target: 2,
        });
        assert!(node.path.is_empty());
        assert_eq!(node.depth, 0);
        assert_eq!(node.fingerprint, node.state.fingerprint());
    }

    #[test]
    fn successor_extends_path_and_depth() {
        let root = SearchNode::root(Tally {
            value: 0,
            target: 2,
        });
        let next_state = root.state.apply(&Bump).unwrap();
        let child = root.successor(next_state, Bump);

        assert_eq!(child.depth, 1);
        assert_eq!(child.path, vec![Bump]);
        assert_eq!(child.state.value, 1);
        assert_eq!(
            child.fingerprint,
            child.state.fingerprint(),
            "cached fingerprint must match the wrapped state"
        );
        assert_eq!(root.path.len(), 0, "parent path must be untouched");
    }

    #[test]
    fn depth_always_equals_path_len() {
        let mut node = SearchNode::root(Tally {
            value: 0,
            target: 3,
        });
        while let Ok(next) = node.state.apply(&Bump) {
            node = node.successor(next, Bump);
            assert_eq!(node.depth as usize, node.path.len());
        }
        assert_eq!(node.depth, 3);
    }
}
