//! Static menu groupings for species and backgrounds
//!
//! Layout metadata mirrors the three-column startup menu: `position` is
//! (column, row) of the group title, `width` the column width in cells.

use crate::job::Job;
use crate::species::Species;

#[derive(Debug, Clone, Copy)]
pub struct SpeciesGroup {
    pub name: &'static str,
    pub position: (u8, u8),
    pub width: u8,
    pub members: &'static [Species],
}

#[derive(Debug, Clone, Copy)]
pub struct JobGroup {
    pub name: &'static str,
    pub position: (u8, u8),
    pub width: u8,
    pub members: &'static [Job],
}

pub static SPECIES_GROUPS: &[SpeciesGroup] = &[
    SpeciesGroup {
        name: "Simple",
        position: (0, 0),
        width: 50,
        members: &[
            Species::HillOrc,
            Species::Minotaur,
            Species::Merfolk,
            Species::Gargoyle,
            Species::Draconian,
            Species::Halfling,
            Species::Troll,
            Species::Ghoul,
        ],
    },
    SpeciesGroup {
        name: "Intermediate",
        position: (1, 0),
        width: 20,
        members: &[
            Species::Human,
            Species::Kobold,
            Species::Demonspawn,
            Species::Centaur,
            Species::Spriggan,
            Species::Tengu,
            Species::DeepElf,
            Species::Ogre,
            Species::DeepDwarf,
            Species::Gnoll,
        ],
    },
    SpeciesGroup {
        name: "Advanced",
        position: (2, 0),
        width: 20,
        members: &[
            Species::VineStalker,
            Species::Vampire,
            Species::Demigod,
            Species::Formicid,
            Species::Naga,
            Species::Octopode,
            Species::Felid,
            Species::Barachi,
            Species::Mummy,
        ],
    },
];

pub static JOB_GROUPS: &[JobGroup] = &[
    JobGroup {
        name: "Warrior",
        position: (0, 0),
        width: 20,
        members: &[Job::Fighter, Job::Gladiator, Job::Monk, Job::Hunter, Job::Assassin],
    },
    JobGroup {
        name: "Adventurer",
        position: (0, 7),
        width: 20,
        members: &[Job::Artificer, Job::Wanderer],
    },
    JobGroup {
        name: "Zealot",
        position: (1, 0),
        width: 25,
        members: &[Job::Berserker, Job::AbyssalKnight, Job::ChaosKnight],
    },
    JobGroup {
        name: "Warrior-mage",
        position: (1, 5),
        width: 26,
        members: &[Job::Skald, Job::Transmuter, Job::Warper, Job::ArcaneMarksman, Job::Enchanter],
    },
    JobGroup {
        name: "Mage",
        position: (2, 0),
        width: 22,
        members: &[
            Job::Wizard,
            Job::Conjurer,
            Job::Summoner,
            Job::Necromancer,
            Job::FireElementalist,
            Job::IceElementalist,
            Job::AirElementalist,
            Job::EarthElementalist,
            Job::VenomMage,
        ],
    },
];

/// Species in menu order; also the pool for random species resolution.
pub fn species_order() -> impl Iterator<Item = Species> {
    SPECIES_GROUPS.iter().flat_map(|g| g.members.iter().copied())
}

/// Jobs in menu order; also the pool for random job resolution.
pub fn job_order() -> impl Iterator<Item = Job> {
    JOB_GROUPS.iter().flat_map(|g| g.members.iter().copied())
}

pub fn is_starting_species(species: Species) -> bool {
    species_order().any(|sp| sp == species)
}

pub fn is_starting_job(job: Job) -> bool {
    job_order().any(|j| j == job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn groups_cover_every_species_once() {
        let listed: Vec<Species> = species_order().collect();
        assert_eq!(listed.len(), Species::iter().count());
        for sp in Species::iter() {
            assert_eq!(listed.iter().filter(|&&s| s == sp).count(), 1, "{sp:?}");
        }
    }

    #[test]
    fn groups_cover_every_job_once() {
        let listed: Vec<Job> = job_order().collect();
        assert_eq!(listed.len(), Job::iter().count());
        for job in Job::iter() {
            assert_eq!(listed.iter().filter(|&&j| j == job).count(), 1, "{job:?}");
        }
    }
}
