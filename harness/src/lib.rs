//! Quarry Harness: concrete puzzles and strategy comparison over the solver.
//!
//! The harness runs one initial puzzle state through the solver engine once
//! per frontier strategy and packages the two outcomes as a
//! [`compare::Comparison`], rendered as a text table or a versioned JSON
//! value by [`report`].
//!
//! The harness does NOT implement traversal logic — it delegates to
//! `quarry_solver`. Puzzles provide domain rules only; the harness owns
//! orchestration and reporting.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod puzzles;
pub mod report;
