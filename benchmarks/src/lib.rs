//! Shared helpers for quarry benchmark suites.

use quarry_harness::puzzles::corridor::{Corridor, Step};
use quarry_solver::contract::Puzzle;
use quarry_solver::frontier::Strategy;
use quarry_solver::node::SearchNode;
use quarry_solver::policy::SearchPolicy;
use quarry_solver::result::RunResult;
use quarry_solver::solve::solve;

/// Run one strategy over a start state under a policy.
///
/// # Panics
///
/// Panics if the adapter violates the move contract. Benchmark runs are
/// expected to succeed.
pub fn run_strategy<P: Puzzle + Clone>(
    start: &P,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> RunResult<P::Move> {
    solve(start.clone(), strategy, policy).expect("solve should succeed in benchmarks")
}

/// Build `count` frontier nodes with distinct fingerprints by walking an
/// open corridor of length `count`.
///
/// # Panics
///
/// Panics if a forward step is rejected, which an open corridor never
/// does.
#[must_use]
pub fn corridor_nodes(count: u32) -> Vec<SearchNode<Corridor>> {
    let mut nodes = Vec::with_capacity(count as usize);
    let mut node = SearchNode::root(Corridor::open(count));
    for _ in 0..count {
        let next = node
            .state
            .apply(&Step::Forward)
            .expect("forward is legal on an open corridor");
        nodes.push(node.clone());
        node = node.successor(next, Step::Forward);
    }
    nodes
}
