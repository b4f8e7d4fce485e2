//! Concrete puzzle adapters for the solver engine.

pub mod corridor;
pub mod peg_solitaire;
pub mod scenarios;
pub mod slide;
pub mod word_ladder;
