//! Player species definitions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Rough body size, as far as starting equipment cares about it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodySize {
    Little,
    Small,
    Medium,
    Large,
}

/// Player species
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Species {
    #[default]
    Human,
    DeepElf,
    DeepDwarf,
    HillOrc,
    Halfling,
    Kobold,
    Spriggan,
    Ogre,
    Troll,
    Naga,
    Centaur,
    Merfolk,
    Minotaur,
    Tengu,
    Draconian,
    Gargoyle,
    Formicid,
    Barachi,
    Gnoll,
    VineStalker,
    Demigod,
    Demonspawn,
    Mummy,
    Ghoul,
    Vampire,
    Felid,
    Octopode,
}

impl Species {
    /// Display name as shown in menus
    pub const fn name(&self) -> &'static str {
        match self {
            Species::Human => "Human",
            Species::DeepElf => "Deep Elf",
            Species::DeepDwarf => "Deep Dwarf",
            Species::HillOrc => "Hill Orc",
            Species::Halfling => "Halfling",
            Species::Kobold => "Kobold",
            Species::Spriggan => "Spriggan",
            Species::Ogre => "Ogre",
            Species::Troll => "Troll",
            Species::Naga => "Naga",
            Species::Centaur => "Centaur",
            Species::Merfolk => "Merfolk",
            Species::Minotaur => "Minotaur",
            Species::Tengu => "Tengu",
            Species::Draconian => "Draconian",
            Species::Gargoyle => "Gargoyle",
            Species::Formicid => "Formicid",
            Species::Barachi => "Barachi",
            Species::Gnoll => "Gnoll",
            Species::VineStalker => "Vine Stalker",
            Species::Demigod => "Demigod",
            Species::Demonspawn => "Demonspawn",
            Species::Mummy => "Mummy",
            Species::Ghoul => "Ghoul",
            Species::Vampire => "Vampire",
            Species::Felid => "Felid",
            Species::Octopode => "Octopode",
        }
    }

    /// Two-letter abbreviation used in defaults files and combo strings
    pub const fn abbrev(&self) -> &'static str {
        match self {
            Species::Human => "Hu",
            Species::DeepElf => "DE",
            Species::DeepDwarf => "DD",
            Species::HillOrc => "HO",
            Species::Halfling => "Ha",
            Species::Kobold => "Ko",
            Species::Spriggan => "Sp",
            Species::Ogre => "Og",
            Species::Troll => "Tr",
            Species::Naga => "Na",
            Species::Centaur => "Ce",
            Species::Merfolk => "Mf",
            Species::Minotaur => "Mi",
            Species::Tengu => "Te",
            Species::Draconian => "Dr",
            Species::Gargoyle => "Gr",
            Species::Formicid => "Fo",
            Species::Barachi => "Ba",
            Species::Gnoll => "Gn",
            Species::VineStalker => "VS",
            Species::Demigod => "Dg",
            Species::Demonspawn => "Ds",
            Species::Mummy => "Mu",
            Species::Ghoul => "Gh",
            Species::Vampire => "Vp",
            Species::Felid => "Fe",
            Species::Octopode => "Op",
        }
    }

    /// Look up a species by its two-letter abbreviation
    pub fn from_abbrev(s: &str) -> Option<Species> {
        Species::iter().find(|sp| sp.abbrev().eq_ignore_ascii_case(s))
    }

    /// Look up a species by display name (prefix match, case-insensitive)
    pub fn from_name(s: &str) -> Option<Species> {
        let s = s.to_lowercase();
        Species::iter().find(|sp| sp.name().to_lowercase().starts_with(&s))
    }

    pub const fn size(&self) -> BodySize {
        match self {
            Species::Spriggan | Species::Felid => BodySize::Little,
            Species::Halfling | Species::Kobold => BodySize::Small,
            Species::Ogre | Species::Troll | Species::Naga | Species::Centaur => BodySize::Large,
            _ => BodySize::Medium,
        }
    }

    /// Whether the unarmed menu entry reads "claws" rather than "unarmed"
    pub const fn has_claws(&self) -> bool {
        matches!(self, Species::Felid | Species::Troll | Species::Ghoul)
    }

    /// Large rocks instead of javelins for the thrown-weapon package
    pub const fn can_throw_large_rocks(&self) -> bool {
        matches!(self, Species::Ogre | Species::Troll)
    }

    /// Felids cannot hold weapons at all; the weapon stage is skipped.
    pub const fn is_weaponless(&self) -> bool {
        matches!(self, Species::Felid)
    }

    /// One-line menu description
    pub const fn blurb(&self) -> &'static str {
        match self {
            Species::Human => "Versatile and unexceptional, at home with any calling.",
            Species::DeepElf => "Frail scholars with a deep gift for magic.",
            Species::DeepDwarf => "Dour miners who never heal on their own.",
            Species::HillOrc => "Brutish warriors who take naturally to the axe.",
            Species::Halfling => "Small, hardy folk with a sure sling arm.",
            Species::Kobold => "Scrappy little scavengers who eat almost anything.",
            Species::Spriggan => "Tiny, swift and stealthy, hopeless in a fair fight.",
            Species::Ogre => "Huge and strong, with a surprising knack for magic.",
            Species::Troll => "Shambling regenerators who fight with tooth and claw.",
            Species::Naga => "Serpent-bodied spitters of poison, slow but sturdy.",
            Species::Centaur => "Fleet hybrid archers of the open plains.",
            Species::Merfolk => "Graceful in water, deadly with a polearm.",
            Species::Minotaur => "Horned bruisers born for the melee.",
            Species::Tengu => "Bird-folk who eventually take to the air.",
            Species::Draconian => "Scaled folk whose colour and breath emerge with age.",
            Species::Gargoyle => "Living stone, resistant to blade and bolt.",
            Species::Formicid => "Four-armed ant-folk rooted in stasis.",
            Species::Barachi => "Leaping frog-folk shunned by polite society.",
            Species::Gnoll => "Pack hunters who learn every skill at once.",
            Species::VineStalker => "Symbiotic vine-hosts that mend themselves by biting.",
            Species::Demigod => "Divine blood and divine attributes, but no god will have them.",
            Species::Demonspawn => "Mortals marked by chaos, sprouting infernal mutations.",
            Species::Mummy => "Preserved dead who neither eat nor drink nor heal well.",
            Species::Ghoul => "Rotting flesh-eaters with claws to match.",
            Species::Vampire => "Blood-drinkers balanced between life and death.",
            Species::Felid => "A cat. Many lives, no hands.",
            Species::Octopode => "Eight arms, eight rings, no armour to speak of.",
        }
    }

    /// "a" or "an", for welcome banners
    pub fn article(&self) -> &'static str {
        match self.name().as_bytes()[0] {
            b'A' | b'E' | b'I' | b'O' | b'U' => "an",
            _ => "a",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbrevs_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for sp in Species::iter() {
            assert!(seen.insert(sp.abbrev()), "duplicate abbrev {}", sp.abbrev());
        }
    }

    #[test]
    fn abbrev_round_trip() {
        for sp in Species::iter() {
            assert_eq!(Species::from_abbrev(sp.abbrev()), Some(sp));
        }
    }

    #[test]
    fn article_matches_name() {
        assert_eq!(Species::Ogre.article(), "an");
        assert_eq!(Species::Octopode.article(), "an");
        assert_eq!(Species::Human.article(), "a");
    }
}
