//! Mask identities and their derived trait categories
//!
//! Every guest wears either an animal mask or a human mask. The trait
//! categories deliberately overlap (a fox is both mammal and predator,
//! a jester mask has both a hat and a visible mouth), so a single clue
//! rarely pins down a mask on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Animal mask variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalMask {
    Fox,
    Rabbit,
    Shark,
    Fish,
}

impl AnimalMask {
    /// All animal masks, for random draws and constraint filtering
    pub const ALL: [AnimalMask; 4] = [Self::Fox, Self::Rabbit, Self::Shark, Self::Fish];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fox => "Fox",
            Self::Rabbit => "Rabbit",
            Self::Shark => "Shark",
            Self::Fish => "Fish",
        }
    }
}

/// Human mask variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HumanMask {
    PlainEyes,
    FullFace,
    Crowned,
    Jester,
}

impl HumanMask {
    /// All human masks, for random draws and constraint filtering
    pub const ALL: [HumanMask; 4] = [Self::PlainEyes, Self::FullFace, Self::Crowned, Self::Jester];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PlainEyes => "Plain Eyes",
            Self::FullFace => "Full Face",
            Self::Crowned => "Crowned",
            Self::Jester => "Jester",
        }
    }
}

/// A guest's mask: exactly one arm is ever active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mask {
    Animal(AnimalMask),
    Human(HumanMask),
}

impl Mask {
    /// Every mask in the game
    pub const ALL: [Mask; 8] = [
        Self::Animal(AnimalMask::Fox),
        Self::Animal(AnimalMask::Rabbit),
        Self::Animal(AnimalMask::Shark),
        Self::Animal(AnimalMask::Fish),
        Self::Human(HumanMask::PlainEyes),
        Self::Human(HumanMask::FullFace),
        Self::Human(HumanMask::Crowned),
        Self::Human(HumanMask::Jester),
    ];

    pub fn is_animal(&self) -> bool {
        matches!(self, Self::Animal(_))
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Self::Human(_))
    }

    /// Fox or Rabbit
    pub fn is_mammal(&self) -> bool {
        matches!(self, Self::Animal(AnimalMask::Fox | AnimalMask::Rabbit))
    }

    /// Fox or Shark
    pub fn is_predator(&self) -> bool {
        matches!(self, Self::Animal(AnimalMask::Fox | AnimalMask::Shark))
    }

    /// Shark or Fish
    pub fn is_aquatic(&self) -> bool {
        matches!(self, Self::Animal(AnimalMask::Shark | AnimalMask::Fish))
    }

    /// Rabbit or Fish
    pub fn is_prey(&self) -> bool {
        matches!(self, Self::Animal(AnimalMask::Rabbit | AnimalMask::Fish))
    }

    /// Crowned or Jester; always false for animal masks
    pub fn has_hat(&self) -> bool {
        matches!(self, Self::Human(HumanMask::Crowned | HumanMask::Jester))
    }

    /// Full Face or Jester; always false for animal masks
    pub fn has_mouth(&self) -> bool {
        matches!(self, Self::Human(HumanMask::FullFace | HumanMask::Jester))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Animal(mask) => mask.name(),
            Self::Human(mask) => mask.name(),
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_categories_overlap() {
        let fox = Mask::Animal(AnimalMask::Fox);
        assert!(fox.is_mammal());
        assert!(fox.is_predator());
        assert!(!fox.is_aquatic());
        assert!(!fox.is_prey());

        let fish = Mask::Animal(AnimalMask::Fish);
        assert!(fish.is_aquatic());
        assert!(fish.is_prey());
        assert!(!fish.is_mammal());
    }

    #[test]
    fn test_human_traits_overlap() {
        let jester = Mask::Human(HumanMask::Jester);
        assert!(jester.has_hat());
        assert!(jester.has_mouth());

        let crowned = Mask::Human(HumanMask::Crowned);
        assert!(crowned.has_hat());
        assert!(!crowned.has_mouth());

        let full_face = Mask::Human(HumanMask::FullFace);
        assert!(!full_face.has_hat());
        assert!(full_face.has_mouth());
    }

    #[test]
    fn test_cross_arm_predicates_are_false() {
        let shark = Mask::Animal(AnimalMask::Shark);
        assert!(!shark.has_hat());
        assert!(!shark.has_mouth());

        let plain = Mask::Human(HumanMask::PlainEyes);
        assert!(!plain.is_mammal());
        assert!(!plain.is_predator());
        assert!(!plain.is_aquatic());
        assert!(!plain.is_prey());
    }
}
