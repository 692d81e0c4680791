//! Masquerade Core - trait model and population generation
//!
//! This crate provides the data the hint engine reasons about:
//! - Masks and their derived trait categories
//! - Clothing, accessories, and dance state
//! - The per-guest `CharacterData` record
//! - Procedural generation of a ballroom population

pub mod attributes;
pub mod character;
pub mod mask;
pub mod spawn;

pub use attributes::{Accessories, Clothing, DanceState};
pub use character::{CharacterData, CharacterId};
pub use mask::{AnimalMask, HumanMask, Mask};
pub use spawn::{random_character, spawn_population, SpawnArea, SpawnConfig};
