//! Frontier structures: FIFO queue and LIFO stack behind one interface.
//!
//! The engine is agnostic to extraction order; it drives any [`Frontier`]
//! through `push`/`pop`/`len`. FIFO pops nodes in non-decreasing depth
//! order (breadth-first); LIFO pops the most recently pushed node first
//! (depth-first). Occupancy is observed by the metrics collector, not
//! tracked here.

use std::collections::VecDeque;

use crate::contract::Puzzle;
use crate::node::SearchNode;

/// Extraction-order interface shared by all frontier structures.
pub trait Frontier<P: Puzzle> {
    /// Add a node to the frontier.
    fn push(&mut self, node: SearchNode<P>);

    /// Remove and return the next node, or `None` when empty.
    fn pop(&mut self) -> Option<SearchNode<P>>;

    /// Current occupancy.
    fn len(&self) -> usize;

    /// Whether the frontier holds no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO frontier: breadth-first extraction order.
///
/// Nodes pop in non-decreasing depth order, so under uniform move cost the
/// first goal popped is at minimal depth.
#[derive(Debug)]
pub struct FifoFrontier<P: Puzzle> {
    queue: VecDeque<SearchNode<P>>,
}

impl<P: Puzzle> FifoFrontier<P> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<P: Puzzle> Default for FifoFrontier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Puzzle> Frontier<P> for FifoFrontier<P> {
    fn push(&mut self, node: SearchNode<P>) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode<P>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// LIFO frontier: depth-first extraction order.
///
/// No depth-order guarantee; a goal found first may sit at any depth.
#[derive(Debug)]
pub struct LifoFrontier<P: Puzzle> {
    stack: Vec<SearchNode<P>>,
}

impl<P: Puzzle> LifoFrontier<P> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<P: Puzzle> Default for LifoFrontier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Puzzle> Frontier<P> for LifoFrontier<P> {
    fn push(&mut self, node: SearchNode<P>) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode<P>> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Traversal strategy: selects the frontier structure and tags results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO frontier; finds a minimal-depth solution.
    BreadthFirst,
    /// LIFO frontier; finds a solution without depth guarantees.
    DepthFirst,
}

impl Strategy {
    /// Both strategies, in comparison order.
    pub const ALL: [Self; 2] = [Self::BreadthFirst, Self::DepthFirst];

    /// Stable snake_case tag used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
