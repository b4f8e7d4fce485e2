//! Run outcome types.

use serde_json::{json, Value};

use crate::frontier::Strategy;
use crate::metrics::RunMetrics;

/// Why a run stopped.
///
/// Exhausting the frontier is a complete, legitimate outcome ("no solution
/// exists in the reachable space"), not an error. The budget variants mark
/// the result partial: the space was not fully explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal state was popped; the result carries its path.
    GoalReached,
    /// The frontier emptied with no goal found.
    FrontierExhausted,
    /// The expansion budget ran out before an answer.
    ExpansionBudgetExceeded,
    /// The wall-clock budget ran out before an answer.
    TimeBudgetExceeded,
}

impl Termination {
    /// Stable snake_case tag used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::TimeBudgetExceeded => "time_budget_exceeded",
        }
    }

    /// Whether the run stopped before exploring the full reachable space.
    #[must_use]
    pub fn is_partial(self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded | Self::TimeBudgetExceeded
        )
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A solution: the ordered move path from the initial state to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<M> {
    /// Moves to apply, in order, starting from the initial state.
    pub path: Vec<M>,
    /// Path length (`path.len()`, cached as the node depth).
    pub depth: u32,
}

/// Immutable outcome of one run.
///
/// `solution` is `Some` exactly when `termination` is
/// [`Termination::GoalReached`].
#[derive(Debug, Clone)]
pub struct RunResult<M> {
    /// The strategy that produced this result.
    pub strategy: Strategy,
    /// Why the run stopped.
    pub termination: Termination,
    /// The found solution, if any.
    pub solution: Option<Solution<M>>,
    /// Per-run statistics.
    pub metrics: RunMetrics,
}

impl<M> RunResult<M> {
    /// Whether a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// Solution depth, if solved.
    #[must_use]
    pub fn solution_depth(&self) -> Option<u32> {
        self.solution.as_ref().map(|s| s.depth)
    }
}

impl<M: std::fmt::Display> RunResult<M> {
    /// JSON rendering with stable keys. Moves are rendered through their
    /// `Display` impl; an unsolved run carries `"solution": null`.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let solution = self.solution.as_ref().map_or(Value::Null, |s| {
            json!({
                "path": s.path.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "depth": s.depth,
            })
        });
        json!({
            "strategy": self.strategy.as_str(),
            "termination": self.termination.as_str(),
            "solution": solution,
            "metrics": self.metrics.to_json_value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn metrics() -> RunMetrics {
        RunMetrics {
            nodes_expanded: 4,
            frontier_high_water: 2,
            duplicates_discarded: 1,
            dead_ends_pruned: 0,
            elapsed: Duration::from_micros(10),
        }
    }

    #[test]
    fn only_budget_terminations_are_partial() {
        assert!(!Termination::GoalReached.is_partial());
        assert!(!Termination::FrontierExhausted.is_partial());
        assert!(Termination::ExpansionBudgetExceeded.is_partial());
        assert!(Termination::TimeBudgetExceeded.is_partial());
    }

    #[test]
    fn termination_tags_are_stable() {
        assert_eq!(Termination::GoalReached.as_str(), "goal_reached");
        assert_eq!(Termination::FrontierExhausted.as_str(), "frontier_exhausted");
        assert_eq!(
            Termination::ExpansionBudgetExceeded.as_str(),
            "expansion_budget_exceeded"
        );
        assert_eq!(
            Termination::TimeBudgetExceeded.as_str(),
            "time_budget_exceeded"
        );
    }

    #[test]
    fn solved_result_serializes_path_via_display() {
        let result = RunResult {
            strategy: Strategy::BreadthFirst,
            termination: Termination::GoalReached,
            solution: Some(Solution {
                path: vec!["forward", "forward"],
                depth: 2,
            }),
            metrics: metrics(),
        };

        assert!(result.is_solved());
        assert_eq!(result.solution_depth(), Some(2));

        let value = result.to_json_value();
        assert_eq!(value["strategy"], "breadth_first");
        assert_eq!(value["termination"], "goal_reached");
        assert_eq!(value["solution"]["depth"], 2);
        assert_eq!(value["solution"]["path"][0], "forward");
        assert_eq!(value["metrics"]["nodes_expanded"], 4);
    }

    #[test]
    fn unsolved_result_serializes_null_solution() {
        let result: RunResult<&'static str> = RunResult {
            strategy: Strategy::DepthFirst,
            termination: Termination::FrontierExhausted,
            solution: None,
            metrics: metrics(),
        };

        assert!(!result.is_solved());
        assert_eq!(result.solution_depth(), None);

        let value = result.to_json_value();
        assert_eq!(value["termination"], "frontier_exhausted");
        assert!(value["solution"].is_null());
    }
}
