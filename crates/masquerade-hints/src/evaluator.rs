//! Pure clue evaluation
//!
//! Stateless predicate lookups, no mutation, no side effects. These
//! functions are the ground truth for whether a guest satisfies a clue;
//! both generators and the front end count matches through them.

use masquerade_core::{AnimalMask, CharacterData, Clothing, DanceState, HumanMask, Mask};

use crate::hint::{Hint, HintKind};

/// Does `character` satisfy `hint`? Negative clues invert the predicate.
pub fn matches(character: &CharacterData, hint: &Hint) -> bool {
    let holds = kind_holds(character, hint.kind());
    if hint.is_positive() {
        holds
    } else {
        !holds
    }
}

fn kind_holds(c: &CharacterData, kind: HintKind) -> bool {
    match kind {
        HintKind::MaskIsAnimal => c.mask.is_animal(),
        HintKind::MaskIsHuman => c.mask.is_human(),

        HintKind::MaskIsMammal => c.mask.is_mammal(),
        HintKind::MaskIsPredator => c.mask.is_predator(),
        HintKind::MaskIsAquatic => c.mask.is_aquatic(),
        HintKind::MaskIsPrey => c.mask.is_prey(),

        HintKind::MaskHasHat => c.mask.has_hat(),
        HintKind::MaskHasMouth => c.mask.has_mouth(),
        // "Lacks" clues only apply to human masks; an animal mask has
        // neither hat nor mouth but satisfies neither lacks-clue.
        HintKind::MaskLacksHat => c.mask.is_human() && !c.mask.has_hat(),
        HintKind::MaskLacksMouth => c.mask.is_human() && !c.mask.has_mouth(),

        HintKind::MaskIsFox => c.mask == Mask::Animal(AnimalMask::Fox),
        HintKind::MaskIsRabbit => c.mask == Mask::Animal(AnimalMask::Rabbit),
        HintKind::MaskIsShark => c.mask == Mask::Animal(AnimalMask::Shark),
        HintKind::MaskIsFish => c.mask == Mask::Animal(AnimalMask::Fish),
        HintKind::MaskIsPlainEyes => c.mask == Mask::Human(HumanMask::PlainEyes),
        HintKind::MaskIsFullFace => c.mask == Mask::Human(HumanMask::FullFace),
        HintKind::MaskIsCrowned => c.mask == Mask::Human(HumanMask::Crowned),
        HintKind::MaskIsJester => c.mask == Mask::Human(HumanMask::Jester),

        HintKind::WearsSuit => c.clothing == Clothing::Suit,
        HintKind::WearsDress => c.clothing == Clothing::Dress,

        HintKind::HasBowtie => c.has_bowtie(),
        HintKind::HasHairbow => c.has_hairbow(),
        HintKind::HasAccessory => c.has_any_accessory(),
        HintKind::HasNoAccessory => !c.has_any_accessory(),

        HintKind::IsDancing => c.is_dancing(),
        HintKind::IsNotDancing => !c.is_dancing(),
        HintKind::DancesWithSuitPartner => c.dance_state == DanceState::WithSuitPartner,
        HintKind::DancesWithDressPartner => c.dance_state == DanceState::WithDressPartner,
    }
}

/// Conjunction over `matches`; an empty clue list is trivially true
pub fn matches_all(character: &CharacterData, hints: &[Hint]) -> bool {
    hints.iter().all(|h| matches(character, h))
}

/// How many guests satisfy this single clue
pub fn count_matching_one(population: &[CharacterData], hint: &Hint) -> usize {
    population.iter().filter(|c| matches(c, hint)).count()
}

/// How many guests satisfy the whole clue set
pub fn count_matching(population: &[CharacterData], hints: &[Hint]) -> usize {
    population.iter().filter(|c| matches_all(c, hints)).count()
}

/// The guests satisfying the whole clue set
pub fn filter_matching<'a>(population: &'a [CharacterData], hints: &[Hint]) -> Vec<&'a CharacterData> {
    population
        .iter()
        .filter(|c| matches_all(c, hints))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use masquerade_core::{Accessories, CharacterId};

    fn guest(
        id: u32,
        mask: Mask,
        clothing: Clothing,
        accessories: Accessories,
        dance_state: DanceState,
    ) -> CharacterData {
        CharacterData {
            id: CharacterId(id),
            mask,
            clothing,
            accessories,
            dance_state,
            dance_partner: None,
            position: Vec2::ZERO,
            is_player: false,
        }
    }

    /// The three-guest narrowing scenario: suit+bowtie matches A and C,
    /// adding "standing alone" narrows to exactly A.
    #[test]
    fn test_conjunction_narrows_population() {
        let a = guest(
            0,
            Mask::Animal(AnimalMask::Fox),
            Clothing::Suit,
            Accessories::BOWTIE,
            DanceState::NotDancing,
        );
        let b = guest(
            1,
            Mask::Animal(AnimalMask::Rabbit),
            Clothing::Dress,
            Accessories::empty(),
            DanceState::NotDancing,
        );
        let c = guest(
            2,
            Mask::Animal(AnimalMask::Shark),
            Clothing::Suit,
            Accessories::BOWTIE,
            DanceState::WithSuitPartner,
        );
        let population = vec![a, b, c];

        let mut hints = vec![Hint::new(HintKind::WearsSuit), Hint::new(HintKind::HasBowtie)];
        assert_eq!(count_matching(&population, &hints), 2);

        hints.push(Hint::new(HintKind::IsNotDancing));
        assert_eq!(count_matching(&population, &hints), 1);

        let matching = filter_matching(&population, &hints);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, CharacterId(0));
    }

    /// Hat + mouth is satisfiable only by the Jester among human masks:
    /// Crowned has hat but no mouth, Full Face has mouth but no hat.
    #[test]
    fn test_hat_and_mouth_conjunction_is_jester_only() {
        let hints = vec![Hint::new(HintKind::MaskHasHat), Hint::new(HintKind::MaskHasMouth)];

        for mask in Mask::ALL {
            let g = guest(
                0,
                mask,
                Clothing::Suit,
                Accessories::empty(),
                DanceState::NotDancing,
            );
            let expected = mask == Mask::Human(HumanMask::Jester);
            assert_eq!(matches_all(&g, &hints), expected, "mask {mask}");
        }
    }

    #[test]
    fn test_negation_is_logical_complement() {
        let kinds = [
            HintKind::MaskIsMammal,
            HintKind::MaskHasHat,
            HintKind::MaskLacksMouth,
            HintKind::WearsSuit,
            HintKind::HasAccessory,
            HintKind::IsDancing,
            HintKind::MaskIsJester,
        ];

        for mask in Mask::ALL {
            for dance in [DanceState::NotDancing, DanceState::WithDressPartner] {
                let g = guest(0, mask, Clothing::Dress, Accessories::HAIRBOW, dance);
                for kind in kinds {
                    let positive = matches(&g, &Hint::new(kind));
                    let negative = matches(&g, &Hint::negated(kind));
                    assert_ne!(positive, negative, "kind {kind:?} on {mask}");
                }
            }
        }
    }

    #[test]
    fn test_empty_conjunction_is_trivially_true() {
        let g = guest(
            0,
            Mask::Human(HumanMask::PlainEyes),
            Clothing::Dress,
            Accessories::empty(),
            DanceState::NotDancing,
        );
        assert!(matches_all(&g, &[]));
    }

    #[test]
    fn test_lacks_clues_exclude_animal_masks() {
        let fox = guest(
            0,
            Mask::Animal(AnimalMask::Fox),
            Clothing::Suit,
            Accessories::empty(),
            DanceState::NotDancing,
        );
        // A fox has no hat and no mouth, but the lacks-clues are about
        // human masks specifically.
        assert!(!matches(&fox, &Hint::new(HintKind::MaskLacksHat)));
        assert!(!matches(&fox, &Hint::new(HintKind::MaskLacksMouth)));
    }

    #[test]
    fn test_matches_is_pure() {
        let g = guest(
            3,
            Mask::Human(HumanMask::Crowned),
            Clothing::Suit,
            Accessories::BOWTIE,
            DanceState::NotDancing,
        );
        let hint = Hint::new(HintKind::MaskHasHat);
        let first = matches(&g, &hint);
        for _ in 0..10 {
            assert_eq!(matches(&g, &hint), first);
        }
    }
}
