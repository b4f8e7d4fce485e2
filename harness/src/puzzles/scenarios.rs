//! Canonical comparison scenarios.
//!
//! Each constructor returns `(start, policy, expectations)` as a matched
//! [`Scenario`]. Tests and benches should ONLY use these constructors —
//! never build the same instances inline — so the pinned expectation
//! numbers and the states they describe cannot drift apart.
//!
//! The pinned numbers assume the engine's pop-time duplicate policy and
//! each adapter's documented move-enumeration order.

use std::collections::BTreeSet;
use std::sync::Arc;

use quarry_solver::contract::Puzzle;
use quarry_solver::policy::SearchPolicy;

use super::corridor::Corridor;
use super::peg_solitaire::PegSolitaire;
use super::slide::Slide;
use super::word_ladder::WordLadder;

/// Test-side expectations for a scenario, shared by both strategies
/// unless a field says otherwise.
#[derive(Debug, Clone)]
pub struct ScenarioExpectations {
    /// Whether both strategies reach a goal.
    pub expects_goal: bool,
    /// Exact minimal solution depth (the breadth-first depth), when the
    /// instance is solvable.
    pub minimal_depth: Option<u32>,
    /// Exact `nodes_expanded` for both strategies, when the reachable
    /// component forces it (a branchless chain, or full exhaustion).
    pub exact_expansions: Option<u64>,
    /// Whether both runs end on a budget rather than a goal or
    /// exhaustion.
    pub expects_partial: bool,
}

/// A matched `(start, policy, expectations)` triple.
#[derive(Debug, Clone)]
pub struct Scenario<P: Puzzle> {
    /// Stable scenario name, used as the comparison label.
    pub name: &'static str,
    /// The initial puzzle state.
    pub start: P,
    /// The run policy both strategies share.
    pub policy: SearchPolicy,
    /// Pinned observable outcomes.
    pub expectations: ScenarioExpectations,
}

/// **Corridor walkthrough**: three squares, no branching.
///
/// Both strategies walk `[forward, forward, forward]` (depth 3) and
/// expand exactly the 4 positions.
#[must_use]
pub fn scenario_corridor() -> Scenario<Corridor> {
    Scenario {
        name: "corridor",
        start: Corridor::open(3),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: true,
            minimal_depth: Some(3),
            exact_expansions: Some(4),
            expects_partial: false,
        },
    }
}

/// **Unreachable goal**: a corridor of 5 with a locked gate at 2.
///
/// The reachable component is `{0, 1, 2}`; both strategies exhaust it
/// after exactly 3 expansions.
#[must_use]
pub fn scenario_corridor_gated() -> Scenario<Corridor> {
    Scenario {
        name: "corridor_gated",
        start: Corridor::gated(5, 2),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: false,
            minimal_depth: None,
            exact_expansions: Some(3),
            expects_partial: false,
        },
    }
}

/// **Two-row slide**: `*23 / 145` toward `123 / 45*`.
///
/// Breadth-first solves at depth 3 (8 expansions); depth-first wanders
/// to depth 27, the clearest BFS-vs-DFS contrast in the set.
#[must_use]
pub fn scenario_slide() -> Scenario<Slide> {
    Scenario {
        name: "slide",
        start: Slide::new(2, 3, vec![0, 2, 3, 1, 4, 5], vec![1, 2, 3, 4, 5, 0]),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: true,
            minimal_depth: Some(3),
            exact_expansions: None,
            expects_partial: false,
        },
    }
}

/// **Unsolvable slide**: a 2×2 target of the wrong permutation parity.
///
/// The reachable component is the 12 even permutations; both strategies
/// expand all of them and exhaust.
#[must_use]
pub fn scenario_slide_unsolvable() -> Scenario<Slide> {
    Scenario {
        name: "slide_unsolvable",
        start: Slide::new(2, 2, vec![1, 2, 3, 0], vec![2, 1, 3, 0]),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: false,
            minimal_depth: None,
            exact_expansions: Some(12),
            expects_partial: false,
        },
    }
}

/// **Word ladder**: `same` to `cost` over a five-word dictionary.
///
/// The dictionary forms the single chain
/// `same - came - case - cast - cost`, so both strategies find depth 4
/// in exactly 5 expansions.
#[must_use]
pub fn scenario_word_ladder() -> Scenario<WordLadder> {
    let words: Arc<BTreeSet<String>> = Arc::new(
        ["same", "came", "case", "cast", "cost"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    );
    Scenario {
        name: "word_ladder",
        start: WordLadder::new("same", "cost", words),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: true,
            minimal_depth: Some(4),
            exact_expansions: Some(5),
            expects_partial: false,
        },
    }
}

/// **Peg line**: `**.` solves with the single opening jump.
#[must_use]
pub fn scenario_peg_line() -> Scenario<PegSolitaire> {
    Scenario {
        name: "peg_line",
        start: PegSolitaire::from_rows(&["**."]),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: true,
            minimal_depth: Some(1),
            exact_expansions: Some(2),
            expects_partial: false,
        },
    }
}

/// **Stuck pegs**: `.*.*#` has two pegs, no legal jump.
///
/// The root is the entire reachable component: one expansion, then
/// exhaustion, for both strategies.
#[must_use]
pub fn scenario_peg_stuck() -> Scenario<PegSolitaire> {
    Scenario {
        name: "peg_stuck",
        start: PegSolitaire::from_rows(&[".*.*#"]),
        policy: SearchPolicy::unlimited(),
        expectations: ScenarioExpectations {
            expects_goal: false,
            minimal_depth: None,
            exact_expansions: Some(1),
            expects_partial: false,
        },
    }
}

/// **Budgeted peg board**: the full 5×5 board under a 50-expansion cap.
///
/// The board needs 23 jumps to solve; 50 expansions explore only the
/// shallow frontier, so both runs end on the expansion budget and are
/// marked partial.
#[must_use]
pub fn scenario_peg_budgeted() -> Scenario<PegSolitaire> {
    Scenario {
        name: "peg_budgeted",
        start: PegSolitaire::from_rows(&["*****", "*****", "*****", "**.**", "*****"]),
        policy: SearchPolicy::expansion_capped(50),
        expectations: ScenarioExpectations {
            expects_goal: false,
            minimal_depth: None,
            exact_expansions: Some(50),
            expects_partial: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_names_are_unique() {
        let names = [
            scenario_corridor().name,
            scenario_corridor_gated().name,
            scenario_slide().name,
            scenario_slide_unsolvable().name,
            scenario_word_ladder().name,
            scenario_peg_line().name,
            scenario_peg_stuck().name,
            scenario_peg_budgeted().name,
        ];
        let distinct: BTreeSet<&str> = names.iter().copied().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn solvable_scenarios_pin_a_minimal_depth() {
        assert!(scenario_corridor().expectations.minimal_depth.is_some());
        assert!(scenario_slide().expectations.minimal_depth.is_some());
        assert!(scenario_word_ladder().expectations.minimal_depth.is_some());
        assert!(scenario_peg_line().expectations.minimal_depth.is_some());
    }

    #[test]
    fn budgeted_scenario_caps_expansions() {
        let scenario = scenario_peg_budgeted();
        assert_eq!(scenario.policy.max_expansions, Some(50));
        assert!(scenario.expectations.expects_partial);
    }
}
