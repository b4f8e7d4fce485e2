//! Comparison rendering: text table and versioned JSON value.
//!
//! The JSON shape is versioned so downstream consumers can detect format
//! drift; keys are stable and every run appears under `runs` in
//! comparison order (breadth-first, then depth-first).

use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::compare::{Comparison, StrategyRun};

/// Format tag embedded in every JSON rendering.
pub const COMPARISON_FORMAT_VERSION: &str = "quarry-comparison-v1";

/// Render a comparison as a human-readable text table.
#[must_use]
pub fn render_text<M: std::fmt::Display>(comparison: &Comparison<M>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", comparison.label);
    let _ = writeln!(
        out,
        "{:<14} {:<26} {:>5} {:>9} {:>5} {:>11} {:>11}  verified",
        "strategy", "termination", "depth", "expanded", "peak", "duplicates", "elapsed_us"
    );
    for run in comparison.runs() {
        let depth = run
            .result
            .solution_depth()
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let verified = match run.replay_verified {
            Some(true) => "yes",
            Some(false) => "NO",
            None => "-",
        };
        let metrics = &run.result.metrics;
        let _ = writeln!(
            out,
            "{:<14} {:<26} {:>5} {:>9} {:>5} {:>11} {:>11}  {}",
            run.result.strategy.as_str(),
            run.result.termination.as_str(),
            depth,
            metrics.nodes_expanded,
            metrics.frontier_high_water,
            metrics.duplicates_discarded,
            u64::try_from(metrics.elapsed.as_micros()).unwrap_or(u64::MAX),
            verified,
        );
    }
    for run in comparison.runs() {
        if let Some(solution) = &run.result.solution {
            let path = solution
                .path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "path ({}): [{path}]", run.result.strategy.as_str());
        }
    }
    let ratio = comparison
        .expansion_ratio()
        .map_or_else(|| "-".to_string(), |r| format!("{r:.2}"));
    let _ = writeln!(out, "expansion ratio (depth/breadth): {ratio}");
    let depths = match comparison.depths_match() {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    let _ = writeln!(out, "depths match: {depths}");
    if comparison.reachability_disagreement() {
        let _ = writeln!(
            out,
            "reachability disagreement: YES (engine bug: one strategy solved, the other exhausted)"
        );
    } else {
        let _ = writeln!(out, "reachability disagreement: no");
    }
    out
}

/// Render a comparison as a versioned JSON value with stable keys.
#[must_use]
pub fn to_json_value<M: std::fmt::Display>(comparison: &Comparison<M>) -> Value {
    json!({
        "version": COMPARISON_FORMAT_VERSION,
        "label": comparison.label,
        "runs": Vec::from(comparison.runs().map(run_to_json)),
        "expansion_ratio": comparison.expansion_ratio(),
        "depths_match": comparison.depths_match(),
        "reachability_disagreement": comparison.reachability_disagreement(),
    })
}

fn run_to_json<M: std::fmt::Display>(run: &StrategyRun<M>) -> Value {
    let mut value = run.result.to_json_value();
    value["replay_verified"] = run.replay_verified.map_or(Value::Null, Value::Bool);
    value
}
