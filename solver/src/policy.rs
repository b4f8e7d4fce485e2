//! Run budget policy.

use std::time::Duration;

/// Resource budgets for a single run.
///
/// `None` means unlimited; the default places no cap on either axis.
/// Exceeding a budget ends the run early with the matching partial
/// termination, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: Option<u64>,
    /// Hard cap on Running-phase wall-clock time.
    pub max_duration: Option<Duration>,
}

impl SearchPolicy {
    /// No budgets: run until solved or exhausted.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Cap node expansions, leaving time unlimited.
    #[must_use]
    pub fn expansion_capped(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            max_duration: None,
        }
    }

    /// Cap wall-clock time, leaving expansions unlimited.
    #[must_use]
    pub fn time_capped(max_duration: Duration) -> Self {
        Self {
            max_expansions: None,
            max_duration: Some(max_duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        let policy = SearchPolicy::default();
        assert_eq!(policy.max_expansions, None);
        assert_eq!(policy.max_duration, None);
        assert_eq!(policy, SearchPolicy::unlimited());
    }

    #[test]
    fn expansion_cap_leaves_time_unlimited() {
        let policy = SearchPolicy::expansion_capped(10);
        assert_eq!(policy.max_expansions, Some(10));
        assert_eq!(policy.max_duration, None);
    }

    #[test]
    fn time_cap_leaves_expansions_unlimited() {
        let policy = SearchPolicy::time_capped(Duration::from_millis(50));
        assert_eq!(policy.max_expansions, None);
        assert_eq!(policy.max_duration, Some(Duration::from_millis(50)));
    }
}
