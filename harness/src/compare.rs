//! Strategy comparison: one puzzle instance, both frontier strategies.
//!
//! The two runs execute sequentially and share nothing: each `solve` call
//! builds its own frontier and visited set, so the comparison is fair by
//! construction. Any returned solution is replay-verified against the
//! start state before the comparison is handed to the caller.

use quarry_solver::contract::Puzzle;
use quarry_solver::frontier::Strategy;
use quarry_solver::policy::SearchPolicy;
use quarry_solver::result::{RunResult, Termination};
use quarry_solver::solve::{replay, solve, SolveError};

/// One strategy's outcome plus the harness-side replay verdict.
#[derive(Debug, Clone)]
pub struct StrategyRun<M> {
    /// The engine's run result.
    pub result: RunResult<M>,
    /// `Some(true)` when the returned path replays from the start state to
    /// a goal, `Some(false)` when it does not (an engine bug), `None` when
    /// the run produced no solution to verify.
    pub replay_verified: Option<bool>,
}

/// Immutable outcome of comparing both strategies on one instance.
#[derive(Debug, Clone)]
pub struct Comparison<M> {
    /// Caller-supplied instance label, carried into reports.
    pub label: String,
    /// The FIFO-frontier run.
    pub breadth_first: StrategyRun<M>,
    /// The LIFO-frontier run.
    pub depth_first: StrategyRun<M>,
}

impl<M> Comparison<M> {
    /// Both runs, in comparison order.
    #[must_use]
    pub fn runs(&self) -> [&StrategyRun<M>; 2] {
        [&self.breadth_first, &self.depth_first]
    }

    /// Depth-first expansions divided by breadth-first expansions.
    ///
    /// `None` when breadth-first expanded nothing (a zero budget).
    #[must_use]
    pub fn expansion_ratio(&self) -> Option<f64> {
        let bfs = self.breadth_first.result.metrics.nodes_expanded;
        let dfs = self.depth_first.result.metrics.nodes_expanded;
        if bfs == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(dfs as f64 / bfs as f64)
    }

    /// Whether both solutions sit at the same depth; `None` unless both
    /// runs solved. Path content may still differ when this is `Some(true)`.
    #[must_use]
    pub fn depths_match(&self) -> Option<bool> {
        match (
            self.breadth_first.result.solution_depth(),
            self.depth_first.result.solution_depth(),
        ) {
            (Some(a), Some(b)) => Some(a == b),
            _ => None,
        }
    }

    /// Whether one strategy reached a goal while the other fully exhausted
    /// the same space.
    ///
    /// On a finite space both strategies see the same reachable component,
    /// so this is impossible for a correct engine; a `true` here indicates
    /// a visited-set or frontier bug. It is reported loudly, never fatal.
    /// Budget terminations do not count: a partial run proves nothing
    /// about reachability.
    #[must_use]
    pub fn reachability_disagreement(&self) -> bool {
        let a = self.breadth_first.result.termination;
        let b = self.depth_first.result.termination;
        matches!(
            (a, b),
            (Termination::GoalReached, Termination::FrontierExhausted)
                | (Termination::FrontierExhausted, Termination::GoalReached)
        )
    }
}

/// Run both strategies over `start` under the same policy.
///
/// # Errors
///
/// Returns [`SolveError`] if the adapter violates the move contract in
/// either run; no comparison is produced.
pub fn compare<P>(
    label: &str,
    start: &P,
    policy: &SearchPolicy,
) -> Result<Comparison<P::Move>, SolveError>
where
    P: Puzzle + Clone,
{
    Ok(Comparison {
        label: label.to_string(),
        breadth_first: run_one(start, Strategy::BreadthFirst, policy)?,
        depth_first: run_one(start, Strategy::DepthFirst, policy)?,
    })
}

fn run_one<P>(
    start: &P,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<StrategyRun<P::Move>, SolveError>
where
    P: Puzzle + Clone,
{
    let result = solve(start.clone(), strategy, policy)?;
    let replay_verified = result
        .solution
        .as_ref()
        .map(|solution| replay(start.clone(), &solution.path).is_ok_and(|end| end.is_goal()));
    Ok(StrategyRun {
        result,
        replay_verified,
    })
}
