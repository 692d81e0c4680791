//! The clue model: one boolean trait predicate, optionally negated,
//! with a precomputed display string the UI renders verbatim

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of clue predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintKind {
    // Broad mask category
    MaskIsAnimal,
    MaskIsHuman,

    // Animal trait categories (overlapping)
    MaskIsMammal,
    MaskIsPredator,
    MaskIsAquatic,
    MaskIsPrey,

    // Human mask traits (overlapping)
    MaskHasHat,
    MaskHasMouth,
    MaskLacksHat,
    MaskLacksMouth,

    // Exact masks
    MaskIsFox,
    MaskIsRabbit,
    MaskIsShark,
    MaskIsFish,
    MaskIsPlainEyes,
    MaskIsFullFace,
    MaskIsCrowned,
    MaskIsJester,

    // Clothing
    WearsSuit,
    WearsDress,

    // Accessories
    HasBowtie,
    HasHairbow,
    HasAccessory,
    HasNoAccessory,

    // Dancing
    IsDancing,
    IsNotDancing,
    DancesWithSuitPartner,
    DancesWithDressPartner,
}

impl HintKind {
    /// Clue text for the positive form
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::MaskIsAnimal => "Animal mask",
            Self::MaskIsHuman => "Human mask",

            Self::MaskIsMammal => "Animal mask: Mammal",
            Self::MaskIsPredator => "Animal mask: Predator",
            Self::MaskIsAquatic => "Animal mask: Aquatic",
            Self::MaskIsPrey => "Animal mask: Prey",

            Self::MaskHasHat => "Human mask with hat",
            Self::MaskHasMouth => "Human mask with visible mouth",
            Self::MaskLacksHat => "Human mask without hat",
            Self::MaskLacksMouth => "Human mask without visible mouth",

            Self::MaskIsFox => "Fox mask",
            Self::MaskIsRabbit => "Rabbit mask",
            Self::MaskIsShark => "Shark mask",
            Self::MaskIsFish => "Fish mask",
            Self::MaskIsPlainEyes => "Plain eye mask",
            Self::MaskIsFullFace => "Plain full-face mask",
            Self::MaskIsCrowned => "Crowned mask",
            Self::MaskIsJester => "Jester mask",

            Self::WearsSuit => "Wearing a suit",
            Self::WearsDress => "Wearing a dress",

            Self::HasBowtie => "Wearing a bowtie",
            Self::HasHairbow => "Wearing a hairbow",
            Self::HasAccessory => "Has an accessory",
            Self::HasNoAccessory => "Has no accessory",

            Self::IsDancing => "Currently dancing",
            Self::IsNotDancing => "Standing alone",
            Self::DancesWithSuitPartner => "Dancing with someone in a suit",
            Self::DancesWithDressPartner => "Dancing with someone in a dress",
        }
    }
}

/// A single clue shown to the player. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    kind: HintKind,
    positive: bool,
    text: String,
}

impl Hint {
    /// A positive clue: the target has this trait
    pub fn new(kind: HintKind) -> Self {
        Self::with_polarity(kind, true)
    }

    /// A negative clue: the target must NOT have this trait
    pub fn negated(kind: HintKind) -> Self {
        Self::with_polarity(kind, false)
    }

    pub fn with_polarity(kind: HintKind, positive: bool) -> Self {
        let text = if positive {
            kind.display_text().to_string()
        } else {
            format!("Not: {}", kind.display_text())
        };
        Self {
            kind,
            positive,
            text,
        }
    }

    pub fn kind(&self) -> HintKind {
        self.kind
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn display_text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_is_precomputed() {
        let hint = Hint::new(HintKind::WearsSuit);
        assert_eq!(hint.display_text(), "Wearing a suit");
        assert_eq!(hint.to_string(), "Wearing a suit");
    }

    #[test]
    fn test_negated_text() {
        let hint = Hint::negated(HintKind::IsDancing);
        assert!(!hint.is_positive());
        assert_eq!(hint.display_text(), "Not: Currently dancing");
    }
}
