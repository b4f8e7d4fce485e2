//! Quarry Solver: strategy-agnostic exhaustive traversal for combinatorial
//! puzzles.
//!
//! This crate is the core engine layer. It knows nothing about concrete
//! puzzles — it does NOT depend on `quarry_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! quarry_solver        ←  quarry_harness        ←  quarry_benchmarks
//! (contract, engine)      (adapters, comparison)   (criterion suites)
//! ```
//!
//! # Key types
//!
//! - [`contract::Puzzle`] — the capability set a puzzle state must expose
//! - [`frontier::Strategy`] / [`frontier::Frontier`] — breadth-first and
//!   depth-first extraction order behind one interface
//! - [`policy::SearchPolicy`] — optional expansion and wall-clock budgets
//! - [`solve::solve`] — one traversal, producing a [`result::RunResult`]
//! - [`solve::replay`] — re-apply a solution path for verification

#![forbid(unsafe_code)]

pub mod contract;
pub mod fingerprint;
pub mod frontier;
pub mod metrics;
pub mod node;
pub mod policy;
pub mod result;
pub mod solve;
pub mod visited;
