//! Procedural ballroom population generation

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::attributes::{Accessories, Clothing, DanceState};
use crate::character::{CharacterData, CharacterId};
use crate::mask::{AnimalMask, HumanMask, Mask};

/// Placement retries before giving up on spacing
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Axis-aligned spawn region
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl SpawnArea {
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.gen_range(self.min.x..self.max.x),
            rng.gen_range(self.min.y..self.max.y),
        )
    }
}

/// Population generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Number of non-player guests
    pub character_count: usize,
    /// Fraction of guests placed into dancing pairs
    pub dancing_pair_fraction: f32,
    pub area: SpawnArea,
    /// Minimum spacing between placed guests
    pub min_distance: f32,
    /// Spacing between the two members of a dancing pair
    pub partner_distance: f32,
    pub spawn_player: bool,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            character_count: 20,
            dancing_pair_fraction: 0.3,
            area: SpawnArea {
                min: Vec2::new(-10.0, -5.0),
                max: Vec2::new(10.0, 5.0),
            },
            min_distance: 1.5,
            partner_distance: 1.0,
            spawn_player: true,
        }
    }
}

/// Generate a full round's population: dancing pairs first, then solo
/// guests, then (optionally) the player.
///
/// Pair members reference each other by id and carry a dance state keyed
/// to the partner's clothing. The player never dances and starts at the
/// center of the ballroom.
pub fn spawn_population(config: &SpawnConfig, rng: &mut impl Rng) -> Vec<CharacterData> {
    let pair_count =
        (config.character_count as f32 * config.dancing_pair_fraction / 2.0).floor() as usize;
    let solo_count = config.character_count - pair_count * 2;

    let mut population = Vec::with_capacity(config.character_count + 1);
    let mut used = Vec::with_capacity(config.character_count);
    let mut next_id = 0u32;

    for _ in 0..pair_count {
        let anchor = spaced_position(config, &used, rng);

        let mut leader = random_character(CharacterId(next_id), rng);
        next_id += 1;
        let mut follower = random_character(CharacterId(next_id), rng);
        next_id += 1;

        leader.dance_partner = Some(follower.id);
        follower.dance_partner = Some(leader.id);
        leader.dance_state = DanceState::with_partner_wearing(follower.clothing);
        follower.dance_state = DanceState::with_partner_wearing(leader.clothing);

        leader.position = anchor - Vec2::X * config.partner_distance * 0.5;
        follower.position = anchor + Vec2::X * config.partner_distance * 0.5;
        used.push(leader.position);
        used.push(follower.position);

        population.push(leader);
        population.push(follower);
    }

    for _ in 0..solo_count {
        let mut solo = random_character(CharacterId(next_id), rng);
        next_id += 1;
        solo.position = spaced_position(config, &used, rng);
        used.push(solo.position);
        population.push(solo);
    }

    if config.spawn_player {
        let mut player = random_character(CharacterId(next_id), rng);
        player.is_player = true;
        player.dance_state = DanceState::NotDancing;
        player.position = Vec2::ZERO;
        population.push(player);
    }

    population
}

/// One guest with random attributes, not dancing, unplaced.
///
/// Masks split 50/50 between the animal and human arms; accessories
/// appear half the time and match the clothing convention.
pub fn random_character(id: CharacterId, rng: &mut impl Rng) -> CharacterData {
    let mask = if rng.gen_bool(0.5) {
        Mask::Animal(AnimalMask::ALL[rng.gen_range(0..AnimalMask::ALL.len())])
    } else {
        Mask::Human(HumanMask::ALL[rng.gen_range(0..HumanMask::ALL.len())])
    };
    let clothing = if rng.gen_bool(0.5) {
        Clothing::Suit
    } else {
        Clothing::Dress
    };
    let accessories = if rng.gen_bool(0.5) {
        clothing.conventional_accessory()
    } else {
        Accessories::empty()
    };

    CharacterData {
        id,
        mask,
        clothing,
        accessories,
        dance_state: DanceState::NotDancing,
        dance_partner: None,
        position: Vec2::ZERO,
        is_player: false,
    }
}

/// Rejection-sample a position at least `min_distance` from every used
/// one, falling back to an arbitrary in-area point once the attempt cap
/// is hit.
fn spaced_position(config: &SpawnConfig, used: &[Vec2], rng: &mut impl Rng) -> Vec2 {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let position = config.area.random_point(rng);
        if used
            .iter()
            .all(|u| u.distance(position) >= config.min_distance)
        {
            return position;
        }
    }
    warn!(
        "no spaced position found after {} attempts, placing anyway",
        MAX_PLACEMENT_ATTEMPTS
    );
    config.area.random_point(rng)
}
