//! The per-guest data record the hint engine reasons about

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::attributes::{Accessories, Clothing, DanceState};
use crate::mask::Mask;

/// Unique identifier for a guest within one round's population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything known about one ballroom guest.
///
/// Created at round start by the spawner (or by the hint engine's
/// repair path), mutated in place when a guest has to stop matching the
/// clue set, and dropped with the population when the round ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    pub id: CharacterId,
    pub mask: Mask,
    pub clothing: Clothing,
    pub accessories: Accessories,
    pub dance_state: DanceState,
    /// Partner id, resolved after the whole population is spawned
    pub dance_partner: Option<CharacterId>,
    /// Position in the ballroom
    pub position: Vec2,
    pub is_player: bool,
}

impl CharacterData {
    pub fn has_bowtie(&self) -> bool {
        self.accessories.contains(Accessories::BOWTIE)
    }

    pub fn has_hairbow(&self) -> bool {
        self.accessories.contains(Accessories::HAIRBOW)
    }

    pub fn has_any_accessory(&self) -> bool {
        !self.accessories.is_empty()
    }

    pub fn is_dancing(&self) -> bool {
        self.dance_state.is_dancing()
    }

    fn accessory_summary(&self) -> &'static str {
        match (self.has_bowtie(), self.has_hairbow()) {
            (true, true) => "Bowtie and Hairbow",
            (true, false) => "Bowtie",
            (false, true) => "Hairbow",
            (false, false) => "no accessory",
        }
    }

    fn dance_summary(&self) -> &'static str {
        match self.dance_state {
            DanceState::NotDancing => "standing alone",
            DanceState::WithSuitPartner => "dancing with a suited partner",
            DanceState::WithDressPartner => "dancing with a dressed partner",
        }
    }
}

impl fmt::Display for CharacterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest {}: {} mask | {} | {} | {}",
            self.id,
            self.mask,
            self.clothing.name(),
            self.accessory_summary(),
            self.dance_summary(),
        )
    }
}
