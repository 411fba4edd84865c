//! Species/job/weapon compatibility tables
//!
//! Banned-ness is one shared table queried from either direction, so the
//! allowed set is symmetric. Recommendations are directional: a species
//! recommends some jobs and a job recommends some species, and the two lists
//! need not mirror each other.

use crate::job::Job;
use crate::species::{BodySize, Species};
use crate::weapon::WeaponType;

/// Tri-state compatibility between two choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharChoiceRestriction {
    Unrestricted,
    Restricted,
    Banned,
}

impl CharChoiceRestriction {
    pub fn is_banned(&self) -> bool {
        matches!(self, CharChoiceRestriction::Banned)
    }
}

/// Combinations that are disallowed outright.
fn combination_banned(species: Species, job: Job) -> bool {
    match species {
        // No hands for weapons, no tinkering paws
        Species::Felid => matches!(
            job,
            Job::Gladiator | Job::Hunter | Job::ArcaneMarksman | Job::Artificer
        ),
        // The divine parent forbids serving another god
        Species::Demigod => matches!(
            job,
            Job::Berserker | Job::AbyssalKnight | Job::ChaosKnight
        ),
        // A dead body will not transform
        Species::Mummy | Species::Ghoul => matches!(job, Job::Transmuter),
        // Stasis rules out the rage
        Species::Formicid => matches!(job, Job::Berserker),
        _ => false,
    }
}

/// Jobs recommended for a species (shown highlighted; the pool for
/// "recommended" random picks of a job once the species is fixed).
pub fn species_recommends(species: Species) -> &'static [Job] {
    use Job::*;
    match species {
        Species::Human => &[Berserker, Conjurer, Necromancer, FireElementalist, IceElementalist],
        Species::DeepElf => &[Wizard, Conjurer, Summoner, Necromancer, Enchanter, AirElementalist],
        Species::DeepDwarf => &[Fighter, Hunter, Berserker, Necromancer, EarthElementalist],
        Species::HillOrc => &[Fighter, Monk, Berserker, Necromancer, FireElementalist],
        Species::Halfling => &[Hunter, Skald, Warper, AirElementalist],
        Species::Kobold => &[Hunter, Berserker, ArcaneMarksman, Enchanter, Conjurer],
        Species::Spriggan => &[Assassin, ArcaneMarksman, Enchanter, Warper, EarthElementalist],
        Species::Ogre => &[Hunter, Berserker, ArcaneMarksman, IceElementalist],
        Species::Troll => &[Fighter, Monk, Hunter, Berserker, EarthElementalist],
        Species::Naga => &[Fighter, Warper, Enchanter, Transmuter, VenomMage],
        Species::Centaur => &[Fighter, Gladiator, Hunter, Warper, ArcaneMarksman],
        Species::Merfolk => &[Gladiator, Berserker, Skald, Transmuter, Summoner, IceElementalist],
        Species::Minotaur => &[Fighter, Gladiator, Monk, Hunter, Berserker],
        Species::Tengu => &[Berserker, Conjurer, Summoner, FireElementalist, AirElementalist, VenomMage],
        Species::Draconian => &[Berserker, Transmuter, Conjurer, FireElementalist, IceElementalist, VenomMage],
        Species::Gargoyle => &[Fighter, Gladiator, Monk, Berserker, EarthElementalist],
        Species::Formicid => &[Fighter, Hunter, AbyssalKnight, ArcaneMarksman, VenomMage],
        Species::Barachi => &[Fighter, Berserker, Skald, Warper, IceElementalist],
        Species::Gnoll => &[Gladiator, Monk, Assassin, Wanderer, Warper],
        Species::VineStalker => &[Monk, Assassin, Enchanter, AirElementalist],
        Species::Demigod => &[Transmuter, Conjurer, FireElementalist, IceElementalist, AirElementalist, EarthElementalist],
        Species::Demonspawn => &[Gladiator, Berserker, AbyssalKnight, ChaosKnight, Necromancer, VenomMage],
        Species::Mummy => &[Wizard, Conjurer, Necromancer, IceElementalist, EarthElementalist],
        Species::Ghoul => &[Gladiator, Monk, Necromancer, IceElementalist, EarthElementalist],
        Species::Vampire => &[Gladiator, Monk, Assassin, Enchanter, Necromancer],
        Species::Felid => &[Berserker, Transmuter, Enchanter, Conjurer, Summoner],
        Species::Octopode => &[Transmuter, Wizard, Conjurer, Assassin, FireElementalist],
    }
}

/// Species recommended for a job.
pub fn job_recommends(job: Job) -> &'static [Species] {
    use Species::*;
    match job {
        Job::Fighter => &[DeepDwarf, HillOrc, Troll, Minotaur, Gargoyle, Centaur],
        Job::Gladiator => &[DeepDwarf, HillOrc, Merfolk, Minotaur, Gnoll],
        Job::Monk => &[DeepDwarf, HillOrc, Troll, Gargoyle, Ghoul, VineStalker],
        Job::Hunter => &[Halfling, Kobold, Ogre, Troll, Centaur, Minotaur],
        Job::Assassin => &[Spriggan, Halfling, Vampire, VineStalker, Gnoll],
        Job::Artificer => &[DeepDwarf, Halfling, Kobold, Spriggan, Draconian],
        Job::Wanderer => &[Human, Halfling, Centaur, Gnoll],
        Job::Berserker => &[HillOrc, Ogre, Merfolk, Troll, Gargoyle, Demonspawn],
        Job::AbyssalKnight => &[HillOrc, Troll, Merfolk, Formicid, Demonspawn],
        Job::ChaosKnight => &[HillOrc, Troll, Centaur, Merfolk, Minotaur, Demonspawn],
        Job::Skald => &[Halfling, Merfolk, Barachi, Vampire],
        Job::Transmuter => &[Naga, Merfolk, Draconian, Demigod, Felid, Octopode],
        Job::Warper => &[Halfling, DeepDwarf, Spriggan, Centaur, Barachi],
        Job::ArcaneMarksman => &[Formicid, Kobold, Spriggan, Troll, Centaur, Ogre],
        Job::Enchanter => &[DeepElf, Felid, Kobold, Spriggan, Naga, Vampire],
        Job::Wizard => &[DeepElf, Naga, Draconian, Octopode, Human, Mummy],
        Job::Conjurer => &[DeepElf, Naga, Tengu, Draconian, Demigod],
        Job::Summoner => &[DeepElf, Human, Tengu, Merfolk, VineStalker],
        Job::Necromancer => &[DeepElf, DeepDwarf, HillOrc, Demonspawn, Mummy, Vampire],
        Job::FireElementalist => &[DeepElf, HillOrc, Naga, Tengu, Demigod, Gargoyle],
        Job::IceElementalist => &[DeepElf, Merfolk, Naga, Barachi, Gargoyle],
        Job::AirElementalist => &[DeepElf, Halfling, Tengu, Barachi, VineStalker],
        Job::EarthElementalist => &[DeepElf, DeepDwarf, Spriggan, Gargoyle, Ghoul, Octopode],
        Job::VenomMage => &[Naga, Spriggan, Tengu, Felid, Demonspawn],
    }
}

/// How suitable is `job` for a player of `species`?
pub fn job_allowed(species: Species, job: Job) -> CharChoiceRestriction {
    if combination_banned(species, job) {
        CharChoiceRestriction::Banned
    } else if species_recommends(species).contains(&job) {
        CharChoiceRestriction::Unrestricted
    } else {
        CharChoiceRestriction::Restricted
    }
}

/// How suitable is `species` for a player of `job`?
pub fn species_allowed(job: Job, species: Species) -> CharChoiceRestriction {
    if combination_banned(species, job) {
        CharChoiceRestriction::Banned
    } else if job_recommends(job).contains(&species) {
        CharChoiceRestriction::Unrestricted
    } else {
        CharChoiceRestriction::Restricted
    }
}

/// Is `species` + `job` a usable combination, optionally requiring it to be
/// recommended? The counterpart may be absent, in which case only the known
/// side constrains the answer.
///
/// `species_first` selects which direction's recommendation list applies
/// when `good` is set: resolving a job for a fixed species consults the
/// species' list, and vice versa.
pub fn is_good_combination(
    species: Option<Species>,
    job: Option<Job>,
    species_first: bool,
    good: bool,
) -> bool {
    match (species, job) {
        (Some(sp), Some(job)) => {
            if combination_banned(sp, job) {
                return false;
            }
            if !good {
                return true;
            }
            if species_first {
                species_recommends(sp).contains(&job)
            } else {
                job_recommends(job).contains(&sp)
            }
        }
        // Only one side known: any starting value of it is fine
        (Some(_), None) | (None, Some(_)) => true,
        (None, None) => true,
    }
}

/// Starting-weapon suitability for a species/job pair. This covers only the
/// starting kit, not full wielding rules.
pub fn weapon_restriction(
    weapon: WeaponType,
    species: Species,
    job: Job,
) -> CharChoiceRestriction {
    use CharChoiceRestriction::*;
    if species.is_weaponless() && weapon != WeaponType::Unarmed {
        return Banned;
    }
    match weapon {
        WeaponType::Unarmed => {
            if species.has_claws() {
                Unrestricted
            } else {
                Restricted
            }
        }
        // Big hands fumble small blades
        WeaponType::ShortSword | WeaponType::Rapier if species.size() >= BodySize::Large => {
            Restricted
        }
        // Heavy arms drag on small frames
        WeaponType::Falchion
        | WeaponType::LongSword
        | WeaponType::Spear
        | WeaponType::Trident
            if species.size() <= BodySize::Small =>
        {
            Restricted
        }
        WeaponType::Shortbow if species.size() <= BodySize::Small => Restricted,
        WeaponType::HuntingSling if species == Species::Halfling => Unrestricted,
        _ => {
            // Trained backgrounds are comfortable with the whole kit
            if job.gets_good_weapons() || job.gets_ranged_weapons() {
                Unrestricted
            } else {
                Restricted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn banned_set_is_symmetric() {
        for sp in Species::iter() {
            for job in Job::iter() {
                assert_eq!(
                    job_allowed(sp, job).is_banned(),
                    species_allowed(job, sp).is_banned(),
                    "asymmetric banned-ness for {sp:?}/{job:?}"
                );
            }
        }
    }

    #[test]
    fn recommended_pairs_are_never_banned() {
        for sp in Species::iter() {
            for &job in species_recommends(sp) {
                assert!(!job_allowed(sp, job).is_banned(), "{sp:?} recommends banned {job:?}");
            }
        }
        for job in Job::iter() {
            for &sp in job_recommends(job) {
                assert!(!species_allowed(job, sp).is_banned(), "{job:?} recommends banned {sp:?}");
            }
        }
    }

    #[test]
    fn every_species_has_a_legal_job() {
        for sp in Species::iter() {
            assert!(
                Job::iter().any(|job| !job_allowed(sp, job).is_banned()),
                "{sp:?} has no legal background"
            );
        }
    }

    #[test]
    fn felid_bans_weapon_jobs() {
        assert!(job_allowed(Species::Felid, Job::Hunter).is_banned());
        assert!(job_allowed(Species::Felid, Job::Gladiator).is_banned());
        assert!(!job_allowed(Species::Felid, Job::Berserker).is_banned());
    }

    #[test]
    fn good_combination_respects_direction() {
        // Minotaur recommends Fighter and Fighter recommends Minotaur,
        // but Human/Berserker is recommended only from the species side.
        assert!(is_good_combination(
            Some(Species::Human),
            Some(Job::Berserker),
            true,
            true
        ));
        assert!(!is_good_combination(
            Some(Species::Human),
            Some(Job::Berserker),
            false,
            true
        ));
    }

    #[test]
    fn felid_weapons_banned_except_claws() {
        assert_eq!(
            weapon_restriction(WeaponType::Unarmed, Species::Felid, Job::Berserker),
            CharChoiceRestriction::Unrestricted
        );
        assert!(
            weapon_restriction(WeaponType::Mace, Species::Felid, Job::Berserker).is_banned()
        );
    }
}
