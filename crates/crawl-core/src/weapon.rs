//! Starting weapon definitions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::species::Species;

/// Starting weapon choices offered by the weapon menu.
///
/// `Unarmed` and `Thrown` are real picks, not sentinels: unarmed means
/// fighting with fists or claws, thrown means a package of throwing
/// ammunition and nets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum WeaponType {
    ShortSword,
    Rapier,
    Mace,
    Flail,
    HandAxe,
    WarAxe,
    Spear,
    Trident,
    Falchion,
    LongSword,
    Quarterstaff,
    Unarmed,
    Thrown,
    HuntingSling,
    Shortbow,
    HandCrossbow,
}

impl WeaponType {
    pub const fn name(&self) -> &'static str {
        match self {
            WeaponType::ShortSword => "short sword",
            WeaponType::Rapier => "rapier",
            WeaponType::Mace => "mace",
            WeaponType::Flail => "flail",
            WeaponType::HandAxe => "hand axe",
            WeaponType::WarAxe => "war axe",
            WeaponType::Spear => "spear",
            WeaponType::Trident => "trident",
            WeaponType::Falchion => "falchion",
            WeaponType::LongSword => "long sword",
            WeaponType::Quarterstaff => "quarterstaff",
            WeaponType::Unarmed => "unarmed",
            WeaponType::Thrown => "thrown",
            WeaponType::HuntingSling => "hunting sling",
            WeaponType::Shortbow => "shortbow",
            WeaponType::HandCrossbow => "hand crossbow",
        }
    }

    /// Look up a weapon by name (prefix match, case-insensitive)
    pub fn from_name(s: &str) -> Option<WeaponType> {
        let s = s.to_lowercase();
        WeaponType::iter().find(|wp| wp.name().starts_with(&s))
    }

    pub const fn is_ranged(&self) -> bool {
        matches!(
            self,
            WeaponType::HuntingSling | WeaponType::Shortbow | WeaponType::HandCrossbow
        )
    }

    /// Ammunition name for launchers
    pub const fn ammo_name(&self) -> Option<&'static str> {
        match self {
            WeaponType::HuntingSling => Some("sling bullets"),
            WeaponType::Shortbow => Some("arrows"),
            WeaponType::HandCrossbow => Some("bolts"),
            _ => None,
        }
    }

    /// Menu label, which depends on the species for unarmed and thrown picks
    pub fn menu_label(&self, species: Species) -> String {
        match self {
            WeaponType::Unarmed => {
                if species.has_claws() { "claws".into() } else { "unarmed".into() }
            }
            WeaponType::Thrown => {
                let ammo = if species.can_throw_large_rocks() {
                    "large rocks"
                } else if species.size() <= crate::species::BodySize::Small {
                    "boomerangs"
                } else {
                    "javelins"
                };
                format!("{ammo} and throwing nets")
            }
            wp if wp.is_ranged() => {
                format!("{} and {}", wp.name(), wp.ammo_name().unwrap_or("ammo"))
            }
            wp => wp.name().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launchers_have_ammo() {
        for wp in WeaponType::iter().filter(|w| w.is_ranged()) {
            assert!(wp.ammo_name().is_some(), "{wp:?} has no ammo name");
        }
    }

    #[test]
    fn thrown_label_by_size() {
        assert_eq!(
            WeaponType::Thrown.menu_label(Species::Ogre),
            "large rocks and throwing nets"
        );
        assert_eq!(
            WeaponType::Thrown.menu_label(Species::Halfling),
            "boomerangs and throwing nets"
        );
        assert_eq!(
            WeaponType::Thrown.menu_label(Species::Human),
            "javelins and throwing nets"
        );
    }

    #[test]
    fn claws_label() {
        assert_eq!(WeaponType::Unarmed.menu_label(Species::Troll), "claws");
        assert_eq!(WeaponType::Unarmed.menu_label(Species::Human), "unarmed");
    }
}
