//! Demo binary: run the BFS/DFS comparison on named scenarios.
//!
//! Usage: `faceoff [scenario]`
//!
//! With no argument every scenario runs in order. Each comparison prints
//! its text table followed by the versioned JSON rendering.

use quarry_harness::compare::compare;
use quarry_harness::puzzles::scenarios::{
    scenario_corridor, scenario_corridor_gated, scenario_peg_budgeted, scenario_peg_line,
    scenario_peg_stuck, scenario_slide, scenario_slide_unsolvable, scenario_word_ladder, Scenario,
};
use quarry_harness::report::{render_text, to_json_value};
use quarry_solver::contract::Puzzle;

const SCENARIO_NAMES: [&str; 8] = [
    "corridor",
    "corridor_gated",
    "slide",
    "slide_unsolvable",
    "word_ladder",
    "peg_line",
    "peg_stuck",
    "peg_budgeted",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            for name in SCENARIO_NAMES {
                run_named(name);
            }
        }
        [name] => run_named(name),
        _ => {
            eprintln!("usage: faceoff [scenario]");
            std::process::exit(2);
        }
    }
}

fn run_named(name: &str) {
    match name {
        "corridor" => run(&scenario_corridor()),
        "corridor_gated" => run(&scenario_corridor_gated()),
        "slide" => run(&scenario_slide()),
        "slide_unsolvable" => run(&scenario_slide_unsolvable()),
        "word_ladder" => run(&scenario_word_ladder()),
        "peg_line" => run(&scenario_peg_line()),
        "peg_stuck" => run(&scenario_peg_stuck()),
        "peg_budgeted" => run(&scenario_peg_budgeted()),
        other => {
            eprintln!("unknown scenario: {other}");
            eprintln!("known scenarios: {}", SCENARIO_NAMES.join(", "));
            std::process::exit(2);
        }
    }
}

fn run<P: Puzzle + Clone>(scenario: &Scenario<P>) {
    let comparison =
        compare(scenario.name, &scenario.start, &scenario.policy).expect("solver run failed");
    print!("{}", render_text(&comparison));
    let json = to_json_value(&comparison);
    println!(
        "{}",
        serde_json::to_string_pretty(&json).expect("comparison JSON rendering failed")
    );
}
