//! Visited set keyed by canonical state fingerprints.
//!
//! Uses `BTreeSet` (not `HashSet`) for deterministic iteration order at
//! serialization boundaries.

use std::collections::BTreeSet;

use crate::fingerprint::Fingerprint;

/// Set of fingerprints already expanded in the current run.
///
/// Grows monotonically within a run and is dropped with it; runs never
/// share a visited set. Membership is checked at pop time: a popped node
/// whose fingerprint is already present is discarded without expansion.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: BTreeSet<Fingerprint>,
}

impl VisitedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: BTreeSet::new(),
        }
    }

    /// Whether `fingerprint` has been marked.
    #[must_use]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    /// Mark `fingerprint`. Returns `false` if it was already present.
    pub fn insert(&mut self, fingerprint: Fingerprint) -> bool {
        self.seen.insert(fingerprint)
    }

    /// Number of distinct fingerprints marked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been marked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::digest;

    const DOMAIN: &[u8] = b"QUARRY::TEST_VISITED::V1\0";

    #[test]
    fn insert_then_contains() {
        let mut visited = VisitedSet::new();
        let fp = digest(DOMAIN, b"a");

        assert!(!visited.contains(&fp));
        assert!(visited.insert(fp));
        assert!(visited.contains(&fp));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn reinsert_reports_duplicate() {
        let mut visited = VisitedSet::new();
        let fp = digest(DOMAIN, b"a");

        assert!(visited.insert(fp));
        assert!(!visited.insert(fp), "second insert must report duplicate");
        assert_eq!(visited.len(), 1, "duplicates must not grow the set");
    }

    #[test]
    fn distinct_fingerprints_coexist() {
        let mut visited = VisitedSet::new();
        assert!(visited.insert(digest(DOMAIN, b"a")));
        assert!(visited.insert(digest(DOMAIN, b"b")));
        assert_eq!(visited.len(), 2);
    }
}
