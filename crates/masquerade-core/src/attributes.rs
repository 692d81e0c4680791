//! Clothing, accessories, and dance state

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// What a guest wears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clothing {
    Suit,
    Dress,
}

impl Clothing {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Suit => "Suit",
            Self::Dress => "Dress",
        }
    }

    /// The other clothing option
    pub fn other(&self) -> Clothing {
        match self {
            Self::Suit => Self::Dress,
            Self::Dress => Self::Suit,
        }
    }

    /// The accessory conventionally paired with this clothing
    pub fn conventional_accessory(&self) -> Accessories {
        match self {
            Self::Suit => Accessories::BOWTIE,
            Self::Dress => Accessories::HAIRBOW,
        }
    }
}

bitflags! {
    /// Accessory flags. A bowtie conventionally pairs with a suit and a
    /// hairbow with a dress; the pairing is a spawner convention, not an
    /// invariant of the type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Accessories: u8 {
        const BOWTIE = 1 << 0;
        const HAIRBOW = 1 << 1;
    }
}

/// Whether a guest is dancing, and what their partner wears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DanceState {
    NotDancing,
    WithSuitPartner,
    WithDressPartner,
}

impl DanceState {
    pub fn is_dancing(&self) -> bool {
        !matches!(self, Self::NotDancing)
    }

    /// The dance state of a guest whose partner wears `clothing`
    pub fn with_partner_wearing(clothing: Clothing) -> DanceState {
        match clothing {
            Clothing::Suit => Self::WithSuitPartner,
            Clothing::Dress => Self::WithDressPartner,
        }
    }

    /// The clothing this state says the partner wears, if dancing
    pub fn partner_clothing(&self) -> Option<Clothing> {
        match self {
            Self::NotDancing => None,
            Self::WithSuitPartner => Some(Clothing::Suit),
            Self::WithDressPartner => Some(Clothing::Dress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessory_flags() {
        let none = Accessories::empty();
        assert!(none.is_empty());

        let bowtie = Accessories::BOWTIE;
        assert!(bowtie.contains(Accessories::BOWTIE));
        assert!(!bowtie.contains(Accessories::HAIRBOW));
    }

    #[test]
    fn test_accessories_round_trip_through_serde() {
        #[derive(Serialize, Deserialize)]
        struct Outfit {
            accessories: Accessories,
        }

        for accessories in [
            Accessories::empty(),
            Accessories::BOWTIE,
            Accessories::HAIRBOW,
            Accessories::all(),
        ] {
            let serialized = toml::to_string(&Outfit { accessories }).unwrap();
            let restored: Outfit = toml::from_str(&serialized).unwrap();
            assert_eq!(restored.accessories, accessories);
        }
    }

    #[test]
    fn test_dance_state_partner_clothing() {
        assert_eq!(
            DanceState::with_partner_wearing(Clothing::Suit),
            DanceState::WithSuitPartner
        );
        assert_eq!(
            DanceState::WithDressPartner.partner_clothing(),
            Some(Clothing::Dress)
        );
        assert_eq!(DanceState::NotDancing.partner_clothing(), None);
        assert!(!DanceState::NotDancing.is_dancing());
        assert!(DanceState::WithSuitPartner.is_dancing());
    }
}
