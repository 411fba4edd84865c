//! Player background (job) definitions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Player background
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Job {
    #[default]
    Fighter,
    Gladiator,
    Monk,
    Hunter,
    Assassin,
    Artificer,
    Wanderer,
    Berserker,
    AbyssalKnight,
    ChaosKnight,
    Skald,
    Transmuter,
    Warper,
    ArcaneMarksman,
    Enchanter,
    Wizard,
    Conjurer,
    Summoner,
    Necromancer,
    FireElementalist,
    IceElementalist,
    AirElementalist,
    EarthElementalist,
    VenomMage,
}

impl Job {
    /// Display name as shown in menus
    pub const fn name(&self) -> &'static str {
        match self {
            Job::Fighter => "Fighter",
            Job::Gladiator => "Gladiator",
            Job::Monk => "Monk",
            Job::Hunter => "Hunter",
            Job::Assassin => "Assassin",
            Job::Artificer => "Artificer",
            Job::Wanderer => "Wanderer",
            Job::Berserker => "Berserker",
            Job::AbyssalKnight => "Abyssal Knight",
            Job::ChaosKnight => "Chaos Knight",
            Job::Skald => "Skald",
            Job::Transmuter => "Transmuter",
            Job::Warper => "Warper",
            Job::ArcaneMarksman => "Arcane Marksman",
            Job::Enchanter => "Enchanter",
            Job::Wizard => "Wizard",
            Job::Conjurer => "Conjurer",
            Job::Summoner => "Summoner",
            Job::Necromancer => "Necromancer",
            Job::FireElementalist => "Fire Elementalist",
            Job::IceElementalist => "Ice Elementalist",
            Job::AirElementalist => "Air Elementalist",
            Job::EarthElementalist => "Earth Elementalist",
            Job::VenomMage => "Venom Mage",
        }
    }

    /// Two-letter abbreviation used in defaults files and combo strings
    pub const fn abbrev(&self) -> &'static str {
        match self {
            Job::Fighter => "Fi",
            Job::Gladiator => "Gl",
            Job::Monk => "Mo",
            Job::Hunter => "Hu",
            Job::Assassin => "As",
            Job::Artificer => "Ar",
            Job::Wanderer => "Wn",
            Job::Berserker => "Be",
            Job::AbyssalKnight => "AK",
            Job::ChaosKnight => "CK",
            Job::Skald => "Sk",
            Job::Transmuter => "Tm",
            Job::Warper => "Wr",
            Job::ArcaneMarksman => "AM",
            Job::Enchanter => "En",
            Job::Wizard => "Wz",
            Job::Conjurer => "Cj",
            Job::Summoner => "Su",
            Job::Necromancer => "Ne",
            Job::FireElementalist => "FE",
            Job::IceElementalist => "IE",
            Job::AirElementalist => "AE",
            Job::EarthElementalist => "EE",
            Job::VenomMage => "VM",
        }
    }

    /// Look up a job by its two-letter abbreviation
    pub fn from_abbrev(s: &str) -> Option<Job> {
        Job::iter().find(|job| job.abbrev().eq_ignore_ascii_case(s))
    }

    /// Look up a job by display name (prefix match, case-insensitive)
    pub fn from_name(s: &str) -> Option<Job> {
        let s = s.to_lowercase();
        Job::iter().find(|job| job.name().to_lowercase().starts_with(&s))
    }

    /// One-line menu description
    pub const fn blurb(&self) -> &'static str {
        match self {
            Job::Fighter => "Heavy armour, a shield and a weapon of choice.",
            Job::Gladiator => "Arena fighters with nets and light armour.",
            Job::Monk => "Unarmoured discipline and an early pious edge.",
            Job::Hunter => "A launcher, ammunition and a hunting knife.",
            Job::Assassin => "Blowgun, daggers and a talent for not being seen.",
            Job::Artificer => "A bag of wands and the wits to use them.",
            Job::Wanderer => "An odd assortment of half-learned skills.",
            Job::Berserker => "Trog's chosen, trading spells for rage.",
            Job::AbyssalKnight => "Knights sworn to Lugonu and the Abyss.",
            Job::ChaosKnight => "Xom's playthings, for better or worse.",
            Job::Skald => "Warrior-poets weaving charms into battle.",
            Job::Transmuter => "Shapeshifters who fight with altered forms.",
            Job::Warper => "Translocation tricksters who strike from odd angles.",
            Job::ArcaneMarksman => "Archers who lace their ammunition with hexes.",
            Job::Enchanter => "Subtle hexers who end fights before they start.",
            Job::Wizard => "A broad grounding in the magical arts.",
            Job::Conjurer => "Raw destructive magic, refined.",
            Job::Summoner => "Never alone: allies called from elsewhere.",
            Job::Necromancer => "Practitioners of the dark art of death.",
            Job::FireElementalist => "Flames, and more flames.",
            Job::IceElementalist => "Ice for armour and ice for arms.",
            Job::AirElementalist => "Lightning and wind, loud and unsubtle.",
            Job::EarthElementalist => "Stone-shapers who petrify and crush.",
            Job::VenomMage => "Poisoners whose art seeps through armour.",
        }
    }

    /// Whether the background opens the starting-weapon menu at all.
    /// Casters and skirmishers start with a fixed kit instead.
    pub const fn has_weapon_choice(&self) -> bool {
        matches!(
            self,
            Job::Fighter
                | Job::Gladiator
                | Job::Hunter
                | Job::Warper
                | Job::Skald
                | Job::ArcaneMarksman
                | Job::AbyssalKnight
                | Job::ChaosKnight
        )
    }

    /// Backgrounds whose weapon menu offers launchers instead of melee arms
    pub const fn gets_ranged_weapons(&self) -> bool {
        matches!(self, Job::Hunter | Job::ArcaneMarksman)
    }

    /// Backgrounds with enough weapon training to start with the upgraded
    /// form of each base weapon
    pub const fn gets_good_weapons(&self) -> bool {
        matches!(
            self,
            Job::Fighter | Job::Gladiator | Job::AbyssalKnight | Job::ChaosKnight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbrevs_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for job in Job::iter() {
            assert!(seen.insert(job.abbrev()), "duplicate abbrev {}", job.abbrev());
        }
    }

    #[test]
    fn abbrev_round_trip() {
        for job in Job::iter() {
            assert_eq!(Job::from_abbrev(job.abbrev()), Some(job));
        }
    }

    #[test]
    fn ranged_jobs_have_weapon_choice() {
        for job in Job::iter().filter(|j| j.gets_ranged_weapons()) {
            assert!(job.has_weapon_choice());
        }
    }
}
