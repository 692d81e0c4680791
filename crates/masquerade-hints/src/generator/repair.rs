//! Population repair: forging a guest to satisfy a clue set, and
//! perturbing duplicates until they stop matching
//!
//! Repair never fails a round. Every loop in here is bounded; when a
//! budget runs out the imperfection is logged and accepted.

use masquerade_core::{
    random_character, Accessories, CharacterData, CharacterId, Clothing, DanceState, Mask,
};
use rand::Rng;
use tracing::{debug, warn};

use crate::evaluator;
use crate::hint::{Hint, HintKind};

/// Attribute-perturbation budget per duplicate guest
const PERTURB_ATTEMPTS: usize = 50;

/// Which guest attribute a clue constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Mask,
    Clothing,
    Accessory,
    Dance,
}

fn attribute_of(kind: HintKind) -> Attribute {
    match kind {
        HintKind::MaskIsAnimal
        | HintKind::MaskIsHuman
        | HintKind::MaskIsMammal
        | HintKind::MaskIsPredator
        | HintKind::MaskIsAquatic
        | HintKind::MaskIsPrey
        | HintKind::MaskHasHat
        | HintKind::MaskHasMouth
        | HintKind::MaskLacksHat
        | HintKind::MaskLacksMouth
        | HintKind::MaskIsFox
        | HintKind::MaskIsRabbit
        | HintKind::MaskIsShark
        | HintKind::MaskIsFish
        | HintKind::MaskIsPlainEyes
        | HintKind::MaskIsFullFace
        | HintKind::MaskIsCrowned
        | HintKind::MaskIsJester => Attribute::Mask,

        HintKind::WearsSuit | HintKind::WearsDress => Attribute::Clothing,

        HintKind::HasBowtie
        | HintKind::HasHairbow
        | HintKind::HasAccessory
        | HintKind::HasNoAccessory => Attribute::Accessory,

        HintKind::IsDancing
        | HintKind::IsNotDancing
        | HintKind::DancesWithSuitPartner
        | HintKind::DancesWithDressPartner => Attribute::Dance,
    }
}

/// Build a guest satisfying every clue and write it over a population
/// member, preferring one that is not dancing. The victim keeps its id
/// and position; a dance pairing is broken (and propagated to the
/// partner) before the overwrite. Returns the victim's index.
///
/// Caller guarantees at least one non-player guest exists.
pub(super) fn forge_target(
    population: &mut [CharacterData],
    hints: &[Hint],
    rng: &mut impl Rng,
) -> usize {
    let index = pick_victim(population, rng);
    if population[index].is_dancing() {
        break_dance_pair(population, index);
    }

    let mut forged = random_character(population[index].id, rng);
    forged.position = population[index].position;
    apply_hints(&mut forged, hints, rng);
    population[index] = forged;

    if population[index].is_dancing() {
        wire_partner(population, index, hints);
    }
    debug!("forged guest {} to satisfy the clue set", population[index].id);
    index
}

/// A random non-dancing non-player index, or any non-player index when
/// every candidate is mid-dance.
fn pick_victim(population: &[CharacterData], rng: &mut impl Rng) -> usize {
    let standing: Vec<usize> = population
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_player && !c.is_dancing())
        .map(|(i, _)| i)
        .collect();
    if !standing.is_empty() {
        return standing[rng.gen_range(0..standing.len())];
    }

    let guests: Vec<usize> = population
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_player)
        .map(|(i, _)| i)
        .collect();
    guests[rng.gen_range(0..guests.len())]
}

/// Apply `hints` to `guest` in order: a clue already satisfied is
/// skipped, otherwise the constrained attribute is redrawn from its
/// domain narrowed by every earlier clue on the same attribute plus the
/// new one. Later clues therefore refine earlier ones cumulatively
/// ("has hat" then "has mouth" lands on the Jester); on an outright
/// contradiction the newest clue wins.
pub(super) fn apply_hints(guest: &mut CharacterData, hints: &[Hint], rng: &mut impl Rng) {
    for (i, hint) in hints.iter().enumerate() {
        if evaluator::matches(guest, hint) {
            continue;
        }
        let applied = &hints[..=i];
        match attribute_of(hint.kind()) {
            Attribute::Mask => redraw(
                guest,
                &Mask::ALL,
                |g, v| g.mask = v,
                applied,
                Attribute::Mask,
                rng,
            ),
            Attribute::Clothing => redraw(
                guest,
                &[Clothing::Suit, Clothing::Dress],
                set_clothing,
                applied,
                Attribute::Clothing,
                rng,
            ),
            Attribute::Accessory => redraw(
                guest,
                &[
                    Accessories::empty(),
                    Accessories::BOWTIE,
                    Accessories::HAIRBOW,
                ],
                |g, v| g.accessories = v,
                applied,
                Attribute::Accessory,
                rng,
            ),
            Attribute::Dance => redraw(
                guest,
                &[
                    DanceState::NotDancing,
                    DanceState::WithSuitPartner,
                    DanceState::WithDressPartner,
                ],
                |g, v| g.dance_state = v,
                applied,
                Attribute::Dance,
                rng,
            ),
        }
    }
}

/// Redraw one attribute from the subset of `domain` satisfying every
/// applied clue on that attribute; if that subset is empty the newest
/// clue alone decides.
fn redraw<T: Copy>(
    guest: &mut CharacterData,
    domain: &[T],
    assign: fn(&mut CharacterData, T),
    applied: &[Hint],
    attribute: Attribute,
    rng: &mut impl Rng,
) {
    let constraining: Vec<&Hint> = applied
        .iter()
        .filter(|h| attribute_of(h.kind()) == attribute)
        .collect();

    let satisfies = |value: T, clues: &[&Hint]| {
        let mut trial = guest.clone();
        assign(&mut trial, value);
        clues.iter().all(|h| evaluator::matches(&trial, h))
    };

    let mut candidates: Vec<T> = domain
        .iter()
        .copied()
        .filter(|v| satisfies(*v, &constraining))
        .collect();
    if candidates.is_empty() {
        if let Some(newest) = constraining.last() {
            candidates = domain
                .iter()
                .copied()
                .filter(|v| satisfies(*v, std::slice::from_ref(newest)))
                .collect();
        }
    }

    if !candidates.is_empty() {
        assign(guest, candidates[rng.gen_range(0..candidates.len())]);
    }
}

/// Clothing changes swap an existing accessory to the conventional one,
/// preserving accessory presence.
fn set_clothing(guest: &mut CharacterData, clothing: Clothing) {
    guest.clothing = clothing;
    if guest.has_any_accessory() {
        guest.accessories = clothing.conventional_accessory();
    }
}

/// Pair a freshly forged dancer with a free guest. The partner's
/// clothing is forced to whatever the dancer's state claims, partner
/// ids are wired both ways, and the partner's state is keyed to the
/// dancer's clothing. A partner who would satisfy the whole clue set
/// once dancing becomes a fresh duplicate, so a guest that stays
/// mismatched is preferred. A ballroom with no free guest leaves the
/// dancer partnerless.
fn wire_partner(population: &mut [CharacterData], index: usize, hints: &[Hint]) {
    let Some(wanted) = population[index].dance_state.partner_clothing() else {
        return;
    };
    let dancer_id = population[index].id;
    let dancer_clothing = population[index].clothing;

    let candidates: Vec<usize> = population
        .iter()
        .enumerate()
        .filter(|(i, c)| *i != index && !c.is_player && !c.is_dancing())
        .map(|(i, _)| i)
        .collect();

    let stays_mismatched = |i: usize| {
        let mut trial = population[i].clone();
        set_clothing(&mut trial, wanted);
        trial.dance_state = DanceState::with_partner_wearing(dancer_clothing);
        !evaluator::matches_all(&trial, hints)
    };

    let partner_index = candidates
        .iter()
        .copied()
        .find(|&i| stays_mismatched(i))
        .or_else(|| candidates.first().copied());

    match partner_index {
        Some(p) => {
            set_clothing(&mut population[p], wanted);
            population[p].dance_partner = Some(dancer_id);
            population[p].dance_state = DanceState::with_partner_wearing(dancer_clothing);
            population[index].dance_partner = Some(population[p].id);
        }
        None => debug!(
            "guest {} dances without a free partner in the ballroom",
            population[index].id
        ),
    }
}

/// Sever the pairing of `index`, propagating to the partner
pub(super) fn break_dance_pair(population: &mut [CharacterData], index: usize) {
    if let Some(partner_id) = population[index].dance_partner.take() {
        if let Some(partner) = population.iter_mut().find(|c| c.id == partner_id) {
            partner.dance_state = DanceState::NotDancing;
            partner.dance_partner = None;
        }
    }
    population[index].dance_state = DanceState::NotDancing;
}

/// Mutate one random attribute of `index` at a time until the guest no
/// longer satisfies the whole clue set or the budget runs out. An
/// unresolved duplicate is logged and tolerated.
///
/// `protect` is the round's target: perturbations that would ripple
/// into it through a shared dance pairing are skipped, so the target
/// can never be excluded by repair.
pub(super) fn perturb_until_mismatch(
    population: &mut [CharacterData],
    index: usize,
    hints: &[Hint],
    protect: CharacterId,
    rng: &mut impl Rng,
) {
    for _ in 0..PERTURB_ATTEMPTS {
        if !evaluator::matches_all(&population[index], hints) {
            return;
        }
        let paired_with_target = population[index].dance_partner == Some(protect);
        match rng.gen_range(0..4u8) {
            0 => reroll_mask(&mut population[index], rng),
            1 if !paired_with_target => flip_clothing(population, index),
            2 => toggle_accessory(&mut population[index]),
            3 if !paired_with_target => toggle_dancing(population, index),
            _ => {}
        }
    }

    if evaluator::matches_all(&population[index], hints) {
        warn!(
            "guest {} still matches every clue after {} perturbations",
            population[index].id, PERTURB_ATTEMPTS
        );
    }
}

fn reroll_mask(guest: &mut CharacterData, rng: &mut impl Rng) {
    guest.mask = Mask::ALL[rng.gen_range(0..Mask::ALL.len())];
}

/// Flip clothing (swapping the accessory kind) and update a dance
/// partner's state, which describes this guest's clothing.
fn flip_clothing(population: &mut [CharacterData], index: usize) {
    let flipped = population[index].clothing.other();
    set_clothing(&mut population[index], flipped);

    if let Some(partner_id) = population[index].dance_partner {
        if let Some(partner) = population.iter_mut().find(|c| c.id == partner_id) {
            partner.dance_state = DanceState::with_partner_wearing(flipped);
        }
    }
}

fn toggle_accessory(guest: &mut CharacterData) {
    if guest.has_any_accessory() {
        guest.accessories = Accessories::empty();
    } else {
        guest.accessories = guest.clothing.conventional_accessory();
    }
}

/// Dancers stop dancing (pair broken, propagated); a standing guest
/// only changes state here if it has no partner to coordinate with, so
/// the perturbation stays local.
fn toggle_dancing(population: &mut [CharacterData], index: usize) {
    if population[index].is_dancing() {
        break_dance_pair(population, index);
    } else {
        population[index].dance_state = DanceState::NotDancing;
    }
}
