//! Target-first clue selection: enumerate everything true of a chosen
//! guest, then greedily keep the clues that narrow the crowd fastest

use masquerade_core::{AnimalMask, CharacterData, Clothing, DanceState, HumanMask, Mask};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluator;
use crate::hint::{Hint, HintKind};

/// Select up to `count` clues that are true of `target` and jointly
/// narrow `population` as far as possible.
///
/// True clues are ranked by how few guests each one matches alone, with
/// a little random jitter so rounds vary, then admitted only while the
/// augmented set still matches at least one guest (the target can never
/// be excluded) and strictly shrinks the matching pool. Redundant-but-
/// true clues pad the list only when the discriminating pool runs dry
/// before the quota, trading clue quality for quantity last.
pub fn hints_for_target(
    target: &CharacterData,
    population: &[CharacterData],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Hint> {
    let mut pool = true_hints_for(target);
    pool.shuffle(rng);

    let mut scored: Vec<(f32, Hint)> = pool
        .into_iter()
        .map(|hint| {
            let rarity = evaluator::count_matching_one(population, &hint) as f32;
            (rarity + rng.gen_range(-2.0..2.0), hint)
        })
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    let pool: Vec<Hint> = scored.into_iter().map(|(_, hint)| hint).collect();

    let mut selected: Vec<Hint> = Vec::with_capacity(count);
    for hint in &pool {
        if selected.len() >= count {
            break;
        }

        let mut candidate = selected.clone();
        candidate.push(hint.clone());
        let remaining = evaluator::count_matching(population, &candidate);
        if remaining < 1 {
            continue;
        }

        let previous = if selected.is_empty() {
            population.len()
        } else {
            evaluator::count_matching(population, &selected)
        };
        if remaining < previous || selected.is_empty() {
            selected.push(hint.clone());
        }
    }

    // Quota unmet: fall back to redundant truths rather than under-deliver.
    for hint in &pool {
        if selected.len() >= count {
            break;
        }
        if !selected.contains(hint) {
            selected.push(hint.clone());
        }
    }

    selected
}

/// Every clue currently true of `target`, exhaustive per category:
/// broad mask arm, applicable sub-traits, exact mask, clothing,
/// accessory state, and dancing state.
fn true_hints_for(target: &CharacterData) -> Vec<Hint> {
    let mut hints = Vec::new();

    match target.mask {
        Mask::Animal(animal) => {
            hints.push(Hint::new(HintKind::MaskIsAnimal));
            if target.mask.is_mammal() {
                hints.push(Hint::new(HintKind::MaskIsMammal));
            }
            if target.mask.is_predator() {
                hints.push(Hint::new(HintKind::MaskIsPredator));
            }
            if target.mask.is_aquatic() {
                hints.push(Hint::new(HintKind::MaskIsAquatic));
            }
            if target.mask.is_prey() {
                hints.push(Hint::new(HintKind::MaskIsPrey));
            }
            hints.push(Hint::new(match animal {
                AnimalMask::Fox => HintKind::MaskIsFox,
                AnimalMask::Rabbit => HintKind::MaskIsRabbit,
                AnimalMask::Shark => HintKind::MaskIsShark,
                AnimalMask::Fish => HintKind::MaskIsFish,
            }));
        }
        Mask::Human(human) => {
            hints.push(Hint::new(HintKind::MaskIsHuman));
            hints.push(Hint::new(if target.mask.has_hat() {
                HintKind::MaskHasHat
            } else {
                HintKind::MaskLacksHat
            }));
            hints.push(Hint::new(if target.mask.has_mouth() {
                HintKind::MaskHasMouth
            } else {
                HintKind::MaskLacksMouth
            }));
            hints.push(Hint::new(match human {
                HumanMask::PlainEyes => HintKind::MaskIsPlainEyes,
                HumanMask::FullFace => HintKind::MaskIsFullFace,
                HumanMask::Crowned => HintKind::MaskIsCrowned,
                HumanMask::Jester => HintKind::MaskIsJester,
            }));
        }
    }

    hints.push(Hint::new(match target.clothing {
        Clothing::Suit => HintKind::WearsSuit,
        Clothing::Dress => HintKind::WearsDress,
    }));

    if target.has_bowtie() {
        hints.push(Hint::new(HintKind::HasBowtie));
    } else if target.has_hairbow() {
        hints.push(Hint::new(HintKind::HasHairbow));
    } else {
        hints.push(Hint::new(HintKind::HasNoAccessory));
    }
    if target.has_any_accessory() {
        hints.push(Hint::new(HintKind::HasAccessory));
    }

    hints.push(Hint::new(if target.is_dancing() {
        HintKind::IsDancing
    } else {
        HintKind::IsNotDancing
    }));
    match target.dance_state {
        DanceState::WithSuitPartner => hints.push(Hint::new(HintKind::DancesWithSuitPartner)),
        DanceState::WithDressPartner => hints.push(Hint::new(HintKind::DancesWithDressPartner)),
        DanceState::NotDancing => {}
    }

    hints
}
