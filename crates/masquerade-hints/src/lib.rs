//! Masquerade Hints - clue model, evaluation, and round generation
//!
//! The engine takes a spawned population and a requested clue count and
//! produces a target guest plus a clue list that (ideally) identifies
//! exactly that guest. Two independent generation algorithms exist; a
//! round uses one of them, never a blend. See `generator`.

pub mod evaluator;
pub mod generator;
pub mod hint;

pub use generator::{derive_round, hints_for_target, GenerateError, RoundSetup};
pub use hint::{Hint, HintKind};
