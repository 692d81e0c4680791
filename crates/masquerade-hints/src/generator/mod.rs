//! Round generation
//!
//! Two independent algorithms survive from two generations of the game
//! and are deliberately kept separate:
//!
//! - [`hints_for_target`]: the target is chosen first; the generator
//!   enumerates everything true of them and greedily keeps the clues
//!   that narrow the crowd fastest.
//! - [`derive_round`]: the clue set is drawn first; the generator then
//!   locates a matching guest, forges one into the population if none
//!   exists, or perturbs duplicates away if several do.
//!
//! A round uses exactly one algorithm; they share only the evaluator.
//! All randomness comes from the caller's `Rng`, so seeded rounds are
//! fully reproducible.

mod from_hints;
mod from_target;
mod repair;

pub use from_hints::{derive_round, GenerateError, RoundSetup};
pub use from_target::hints_for_target;
