//! Per-run instrumentation.

use std::time::{Duration, Instant};

use serde_json::{json, Value};

/// Mutable counters maintained by the engine during one run.
///
/// The wall clock brackets the Running phase only: the engine calls
/// [`MetricsCollector::start`] after Init (root pushed, structures built)
/// and [`MetricsCollector::finish`] at termination. Frontier occupancy is
/// observed explicitly; the collector never reaches into the frontier.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    nodes_expanded: u64,
    frontier_high_water: u64,
    duplicates_discarded: u64,
    dead_ends_pruned: u64,
    started: Option<Instant>,
}

impl MetricsCollector {
    /// Fresh zeroed counters, clock not yet running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the Running-phase clock.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Wall-clock time since [`MetricsCollector::start`] (zero before it).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |t| t.elapsed())
    }

    /// Count one node expansion (popped, not a duplicate, goal-tested).
    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    /// Count one popped node discarded because its state was already
    /// expanded.
    pub fn record_duplicate(&mut self) {
        self.duplicates_discarded += 1;
    }

    /// Count one expanded state whose successors were pruned as a dead end.
    pub fn record_dead_end(&mut self) {
        self.dead_ends_pruned += 1;
    }

    /// Observe current frontier occupancy, updating the high-water mark.
    pub fn observe_frontier(&mut self, len: usize) {
        let len = len as u64;
        if len > self.frontier_high_water {
            self.frontier_high_water = len;
        }
    }

    /// Expansions so far (read during the run for budget checks).
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Freeze the counters into an immutable [`RunMetrics`].
    #[must_use]
    pub fn finish(self) -> RunMetrics {
        let elapsed = self.elapsed();
        RunMetrics {
            nodes_expanded: self.nodes_expanded,
            frontier_high_water: self.frontier_high_water,
            duplicates_discarded: self.duplicates_discarded,
            dead_ends_pruned: self.dead_ends_pruned,
            elapsed,
        }
    }
}

/// Immutable per-run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Nodes popped, deduped, and goal-tested.
    pub nodes_expanded: u64,
    /// Peak frontier occupancy over the run.
    pub frontier_high_water: u64,
    /// Popped nodes discarded because their state was already expanded.
    pub duplicates_discarded: u64,
    /// Expanded states whose successors were pruned as dead ends.
    pub dead_ends_pruned: u64,
    /// Running-phase wall-clock time.
    pub elapsed: Duration,
}

impl RunMetrics {
    /// JSON rendering with stable keys. Elapsed time is reported in
    /// microseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "nodes_expanded": self.nodes_expanded,
            "frontier_high_water": self.frontier_high_water,
            "duplicates_discarded": self.duplicates_discarded,
            "dead_ends_pruned": self.dead_ends_pruned,
            "elapsed_micros": u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX),
        })
    }
}
