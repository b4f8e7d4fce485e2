//! Traversal engine: the strategy-agnostic search loop.

use crate::contract::{IllegalMove, Puzzle};
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, Strategy};
use crate::metrics::MetricsCollector;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::result::{RunResult, Solution, Termination};
use crate::visited::VisitedSet;

/// Typed failure for a run that could not produce a result.
///
/// Normal negative outcomes (no solution, budget cutoff) are expressed as
/// [`Termination`] variants inside an `Ok` result; `SolveError` is reserved
/// for adapter contract violations that abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The adapter rejected a move its own `legal_moves` produced.
    IllegalMove(IllegalMove),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalMove(inner) => {
                write!(f, "adapter rejected its own move: {inner}")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IllegalMove(inner) => Some(inner),
        }
    }
}

impl From<IllegalMove> for SolveError {
    fn from(inner: IllegalMove) -> Self {
        Self::IllegalMove(inner)
    }
}

/// Run one traversal of `root`'s state space under `strategy`.
///
/// The run moves through Init (root node pushed, fresh visited set, zeroed
/// metrics), Running (the loop below, bracketed by the metrics wall clock),
/// and one of the terminal outcomes in [`Termination`]. Each loop pass:
///
/// 1. budget checks (expansions, then elapsed time);
/// 2. pop — an empty frontier terminates with `FrontierExhausted`;
/// 3. a popped node whose state was already expanded is discarded and
///    counted, never re-expanded;
/// 4. the node is marked visited and counted as expanded;
/// 5. goal test — a goal node terminates with `GoalReached` and its path;
/// 6. dead-end test — a dead end is counted and its successors skipped;
/// 7. each legal move is applied and the successor pushed unconditionally
///    (duplicates are filtered at pop, not at push).
///
/// The root is goal-tested through the same path, so a solved initial
/// state reports one expansion and an empty solution path. Given a
/// deterministic adapter, every field of the result except elapsed time is
/// reproducible run over run.
///
/// # Errors
///
/// Returns [`SolveError::IllegalMove`] if the adapter rejects a move
/// enumerated by its own `legal_moves`. The run is aborted; no result is
/// produced.
pub fn solve<P: Puzzle>(
    root: P,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<RunResult<P::Move>, SolveError> {
    match strategy {
        Strategy::BreadthFirst => run(root, strategy, policy, FifoFrontier::new()),
        Strategy::DepthFirst => run(root, strategy, policy, LifoFrontier::new()),
    }
}

fn run<P, F>(
    root: P,
    strategy: Strategy,
    policy: &SearchPolicy,
    mut frontier: F,
) -> Result<RunResult<P::Move>, SolveError>
where
    P: Puzzle,
    F: Frontier<P>,
{
    let mut visited = VisitedSet::new();
    let mut metrics = MetricsCollector::new();

    frontier.push(SearchNode::root(root));
    metrics.observe_frontier(frontier.len());

    metrics.start();

    let (termination, solution) = loop {
        if let Some(max) = policy.max_expansions {
            if metrics.nodes_expanded() >= max {
                break (Termination::ExpansionBudgetExceeded, None);
            }
        }
        if let Some(max) = policy.max_duration {
            if metrics.elapsed() >= max {
                break (Termination::TimeBudgetExceeded, None);
            }
        }

        let Some(node) = frontier.pop() else {
            break (Termination::FrontierExhausted, None);
        };

        if !visited.insert(node.fingerprint) {
            metrics.record_duplicate();
            continue;
        }
        metrics.record_expansion();

        if node.state.is_goal() {
            break (
                Termination::GoalReached,
                Some(Solution {
                    depth: node.depth,
                    path: node.path,
                }),
            );
        }

        if node.state.is_dead_end() {
            metrics.record_dead_end();
            continue;
        }

        for mv in node.state.legal_moves() {
            let next = node.state.apply(&mv)?;
            frontier.push(node.successor(next, mv));
        }
        metrics.observe_frontier(frontier.len());
    };

    Ok(RunResult {
        strategy,
        termination,
        solution,
        metrics: metrics.finish(),
    })
}

/// Re-apply a solution path from `start`, returning the final state.
///
/// Used to verify that a reported path actually lands on a goal: apply it
/// and check `is_goal` on the returned state.
///
/// # Errors
///
/// Returns [`SolveError::IllegalMove`] if any move in the path is not
/// legal at the point it is applied.
pub fn replay<P: Puzzle>(start: P, path: &[P::Move]) -> Result<P, SolveError> {
    let mut state = start;
    for mv in path {
        state = state.apply(mv)?;
    }
    Ok(state)
}
