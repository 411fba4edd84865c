//! Random/recommended choice resolution
//!
//! Fills concrete values into a [`CharacterBuild`] from a [`NewGameChoice`]
//! without overwriting anything already concrete. Uniform selection over a
//! filtered candidate set uses an incremental reservoir scan: keep a running
//! count of acceptable candidates and replace the held pick with probability
//! 1/count-so-far. Replacing this with e.g. "pick the first acceptable
//! candidate after a random skip" would bias the result.

use crate::errors::{ChoiceAxis, NewGameError};
use crate::groups::{is_starting_job, job_order, species_order};
use crate::job::Job;
use crate::restrictions::{
    is_good_combination, weapon_restriction, CharChoiceRestriction,
};
use crate::rng::GameRng;
use crate::selection::{CharacterBuild, NewGameChoice, Selection};
use crate::species::Species;
use crate::weapon::WeaponType;

/// A weapon menu entry: the weapon and how suitable it is
pub type WeaponChoice = (WeaponType, CharChoiceRestriction);

fn resolve_species(
    build: &mut CharacterBuild,
    choice: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<(), NewGameError> {
    // Don't overwrite an existing species.
    if build.species.is_some() {
        return Ok(());
    }

    let mut want = choice.species;
    if want == Selection::RandomViable {
        let mut good_choices = 0;
        for sp in species_order() {
            if !is_good_combination(Some(sp), build.job, false, true) {
                continue;
            }
            good_choices += 1;
            if rng.one_chance_in(good_choices) {
                build.species = Some(sp);
            }
        }
        if good_choices > 0 {
            return Ok(());
        }
        // No recommended candidate: degrade to plain random.
        want = Selection::RandomAny;
    }

    match want {
        Selection::Unset => Ok(()),
        Selection::RandomAny => {
            match build.job {
                None => {
                    // Any starting species will do.
                    let pool: Vec<Species> = species_order().collect();
                    build.species = rng.choose(&pool).copied();
                    Ok(())
                }
                Some(_) => {
                    // Pick a random legal combination.
                    let mut good_choices = 0;
                    for sp in species_order() {
                        if !is_good_combination(Some(sp), build.job, false, false) {
                            continue;
                        }
                        good_choices += 1;
                        if rng.one_chance_in(good_choices) {
                            build.species = Some(sp);
                        }
                    }
                    if good_choices == 0 {
                        return Err(NewGameError::NoLegalCombination {
                            axis: ChoiceAxis::Species,
                        });
                    }
                    Ok(())
                }
            }
        }
        Selection::Picked(sp) => {
            build.species = Some(sp);
            Ok(())
        }
        Selection::RandomViable => unreachable!("degraded to RandomAny above"),
    }
}

fn resolve_job(
    build: &mut CharacterBuild,
    choice: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<(), NewGameError> {
    if build.job.is_some() {
        return Ok(());
    }

    let mut want = choice.job;
    if want == Selection::RandomViable {
        let mut good_choices = 0;
        for job in job_order() {
            if !is_good_combination(build.species, Some(job), true, true) {
                continue;
            }
            good_choices += 1;
            if rng.one_chance_in(good_choices) {
                build.job = Some(job);
            }
        }
        if good_choices > 0 {
            return Ok(());
        }
        want = Selection::RandomAny;
    }

    match want {
        Selection::Unset => Ok(()),
        Selection::RandomAny => match build.species {
            None => {
                let pool: Vec<Job> = job_order().collect();
                build.job = rng.choose(&pool).copied();
                Ok(())
            }
            Some(_) => {
                let mut good_choices = 0;
                for job in job_order() {
                    if !is_good_combination(build.species, Some(job), true, false) {
                        continue;
                    }
                    good_choices += 1;
                    if rng.one_chance_in(good_choices) {
                        debug_assert!(is_starting_job(job));
                        build.job = Some(job);
                    }
                }
                if good_choices == 0 {
                    return Err(NewGameError::NoLegalCombination {
                        axis: ChoiceAxis::Job,
                    });
                }
                Ok(())
            }
        },
        Selection::Picked(job) => {
            build.job = Some(job);
            Ok(())
        }
        Selection::RandomViable => unreachable!("degraded to RandomAny above"),
    }
}

/// Resolve both character axes. Recommendations are directional, so when one
/// side (and only one) asks for a recommended pick it resolves last, after
/// the counterpart it will consult is concrete; otherwise the order is a
/// coinflip.
pub fn resolve_species_job(
    build: &mut CharacterBuild,
    choice: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<(), NewGameError> {
    let species_first = choice.species != Selection::RandomViable
        && choice.job == Selection::RandomViable;
    let job_first = choice.species == Selection::RandomViable
        && choice.job != Selection::RandomViable;

    if species_first || (!job_first && rng.coinflip()) {
        resolve_species(build, choice, rng)?;
        resolve_job(build, choice, rng)
    } else {
        resolve_job(build, choice, rng)?;
        resolve_species(build, choice, rng)
    }
}

/// Upgraded form of each base weapon for backgrounds with good weapon
/// training. Small-bodied Fighters keep the spear: a trident won't fit
/// beside their shield.
fn starting_weapon_upgrade(wp: WeaponType, job: Job, species: Species) -> WeaponType {
    use crate::species::BodySize;
    match wp {
        WeaponType::ShortSword => WeaponType::Rapier,
        WeaponType::Mace => WeaponType::Flail,
        WeaponType::HandAxe => WeaponType::WarAxe,
        WeaponType::Spear => {
            if job == Job::Fighter && species.size() <= BodySize::Small {
                wp
            } else {
                WeaponType::Trident
            }
        }
        WeaponType::Falchion => WeaponType::LongSword,
        _ => wp,
    }
}

/// Build the weapon menu for a resolved species/job pair, banned entries
/// already filtered out.
pub fn starting_weapons(species: Species, job: Job) -> Vec<WeaponChoice> {
    let base: &[WeaponType] = if job.gets_ranged_weapons() {
        &[
            WeaponType::Thrown,
            WeaponType::HuntingSling,
            WeaponType::Shortbow,
            WeaponType::HandCrossbow,
        ]
    } else {
        &[
            WeaponType::ShortSword,
            WeaponType::Mace,
            WeaponType::HandAxe,
            WeaponType::Spear,
            WeaponType::Falchion,
            WeaponType::Quarterstaff,
            WeaponType::Unarmed,
        ]
    };

    base.iter()
        .map(|&wp| {
            if job.gets_good_weapons() {
                starting_weapon_upgrade(wp, job, species)
            } else {
                wp
            }
        })
        .map(|wp| (wp, weapon_restriction(wp, species, job)))
        .filter(|(_, restriction)| !restriction.is_banned())
        .collect()
}

/// With exactly one legal candidate there is nothing to ask; the weapon
/// stage takes it without prompting.
pub fn sole_weapon(weapons: &[WeaponChoice]) -> Option<WeaponType> {
    match weapons {
        [(wp, _)] => Some(*wp),
        _ => None,
    }
}

/// Clamp a picked weapon to the candidate list; anything else (including a
/// stale default) becomes Unset so the prompt runs.
pub fn fixup_weapon(
    wp: Selection<WeaponType>,
    weapons: &[WeaponChoice],
) -> Selection<WeaponType> {
    match wp {
        Selection::Picked(w) if !weapons.iter().any(|&(cand, _)| cand == w) => Selection::Unset,
        other => other,
    }
}

/// Resolve the weapon axis against a prepared candidate list.
pub fn resolve_weapon(
    build: &mut CharacterBuild,
    choice: &NewGameChoice,
    weapons: &[WeaponChoice],
    rng: &mut GameRng,
) -> Result<(), NewGameError> {
    if build.weapon.is_some() {
        return Ok(());
    }
    if weapons.is_empty() {
        return Err(NewGameError::NoLegalCombination {
            axis: ChoiceAxis::Weapon,
        });
    }

    let mut want = if choice.allowed_weapons.is_empty() {
        choice.weapon
    } else {
        rng.choose(&choice.allowed_weapons)
            .copied()
            .map(Selection::Picked)
            .unwrap_or(Selection::Unset)
    };

    if want == Selection::RandomViable {
        let mut good_choices = 0;
        for &(wp, restriction) in weapons {
            if restriction != CharChoiceRestriction::Unrestricted {
                continue;
            }
            good_choices += 1;
            if rng.one_chance_in(good_choices) {
                build.weapon = Some(wp);
            }
        }
        if good_choices > 0 {
            return Ok(());
        }
        want = Selection::RandomAny;
    }

    match want {
        Selection::Unset => Ok(()),
        Selection::RandomAny => {
            build.weapon = rng.choose(weapons).map(|&(wp, _)| wp);
            Ok(())
        }
        other => {
            build.weapon = fixup_weapon(other, weapons).picked();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restrictions::job_allowed;
    use proptest::prelude::*;

    fn random_choice() -> NewGameChoice {
        NewGameChoice {
            species: Selection::RandomAny,
            job: Selection::RandomAny,
            ..Default::default()
        }
    }

    #[test]
    fn fully_random_is_never_banned() {
        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            let mut build = CharacterBuild::default();
            resolve_species_job(&mut build, &random_choice(), &mut rng).unwrap();
            let (sp, job) = (build.species.unwrap(), build.job.unwrap());
            assert!(!job_allowed(sp, job).is_banned(), "seed {seed}: {sp:?} {job:?}");
        }
    }

    #[test]
    fn resolution_is_deterministic_per_seed() {
        for seed in [1u64, 17, 99] {
            let mut a = CharacterBuild::default();
            let mut b = CharacterBuild::default();
            resolve_species_job(&mut a, &random_choice(), &mut GameRng::new(seed)).unwrap();
            resolve_species_job(&mut b, &random_choice(), &mut GameRng::new(seed)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn picked_values_are_not_overwritten() {
        let mut rng = GameRng::new(3);
        let mut build = CharacterBuild::default();
        build.species = Some(Species::Minotaur);
        let choice = NewGameChoice {
            species: Selection::Picked(Species::Felid),
            job: Selection::RandomAny,
            ..Default::default()
        };
        resolve_species_job(&mut build, &choice, &mut rng).unwrap();
        assert_eq!(build.species, Some(Species::Minotaur));
    }

    #[test]
    fn viable_resolves_to_recommended_pair() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let mut build = CharacterBuild::default();
            let choice = NewGameChoice {
                species: Selection::Picked(Species::Minotaur),
                job: Selection::RandomViable,
                ..Default::default()
            };
            resolve_species_job(&mut build, &choice, &mut rng).unwrap();
            let job = build.job.unwrap();
            assert!(
                crate::restrictions::species_recommends(Species::Minotaur).contains(&job),
                "seed {seed}: {job:?} not recommended for Minotaur"
            );
        }
    }

    #[test]
    fn viable_side_sees_concrete_counterpart() {
        // Species is explicit, job asks for recommended: the job picked must
        // come from that species' list, which only works if the job resolves
        // second. Covered across many seeds so a wrong coinflip would show.
        for seed in 0..100 {
            let mut rng = GameRng::new(seed);
            let mut build = CharacterBuild::default();
            let choice = NewGameChoice {
                species: Selection::Picked(Species::Ogre),
                job: Selection::RandomViable,
                ..Default::default()
            };
            resolve_species_job(&mut build, &choice, &mut rng).unwrap();
            assert!(crate::restrictions::species_recommends(Species::Ogre)
                .contains(&build.job.unwrap()));
        }
    }

    #[test]
    fn weapon_random_stays_in_melee_set_for_fighter() {
        for seed in 0..100 {
            let mut rng = GameRng::new(seed);
            let weapons = starting_weapons(Species::Human, Job::Fighter);
            let mut build = CharacterBuild::default();
            build.species = Some(Species::Human);
            build.job = Some(Job::Fighter);
            let choice = NewGameChoice {
                weapon: Selection::RandomAny,
                ..Default::default()
            };
            resolve_weapon(&mut build, &choice, &weapons, &mut rng).unwrap();
            let wp = build.weapon.unwrap();
            assert!(!wp.is_ranged(), "seed {seed}: fighter got ranged {wp:?}");
        }
    }

    #[test]
    fn fighter_gets_upgraded_weapons() {
        let weapons = starting_weapons(Species::Human, Job::Fighter);
        let names: Vec<WeaponType> = weapons.iter().map(|&(wp, _)| wp).collect();
        assert!(names.contains(&WeaponType::Rapier));
        assert!(!names.contains(&WeaponType::ShortSword));
        assert!(names.contains(&WeaponType::Trident));
    }

    #[test]
    fn small_fighter_keeps_spear() {
        let weapons = starting_weapons(Species::Kobold, Job::Fighter);
        let names: Vec<WeaponType> = weapons.iter().map(|&(wp, _)| wp).collect();
        assert!(names.contains(&WeaponType::Spear));
        assert!(!names.contains(&WeaponType::Trident));
    }

    #[test]
    fn sole_candidate_is_taken_without_prompting() {
        let weapons = vec![(WeaponType::Quarterstaff, CharChoiceRestriction::Restricted)];
        assert_eq!(sole_weapon(&weapons), Some(WeaponType::Quarterstaff));
        assert_eq!(sole_weapon(&starting_weapons(Species::Human, Job::Fighter)), None);
        assert_eq!(sole_weapon(&[]), None);
    }

    #[test]
    fn stale_picked_weapon_is_cleared() {
        let weapons = starting_weapons(Species::Human, Job::Hunter);
        assert_eq!(
            fixup_weapon(Selection::Picked(WeaponType::Mace), &weapons),
            Selection::Unset
        );
        assert_eq!(
            fixup_weapon(Selection::RandomAny, &weapons),
            Selection::RandomAny
        );
    }

    #[test]
    fn viable_weapon_degrades_to_random() {
        // A candidate list with no unrestricted entries must still resolve.
        let weapons = vec![
            (WeaponType::Mace, CharChoiceRestriction::Restricted),
            (WeaponType::Spear, CharChoiceRestriction::Restricted),
        ];
        let mut rng = GameRng::new(11);
        let mut build = CharacterBuild::default();
        let choice = NewGameChoice {
            weapon: Selection::RandomViable,
            ..Default::default()
        };
        resolve_weapon(&mut build, &choice, &weapons, &mut rng).unwrap();
        assert!(build.weapon.is_some());
    }

    proptest! {
        #[test]
        fn prop_fully_random_never_banned(seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let mut build = CharacterBuild::default();
            resolve_species_job(&mut build, &random_choice(), &mut rng).unwrap();
            prop_assert!(!job_allowed(build.species.unwrap(), build.job.unwrap()).is_banned());
        }

        #[test]
        fn prop_viable_never_fails(seed in any::<u64>()) {
            // RandomViable must always produce something, degrading to
            // RandomAny semantics when no recommended pair exists.
            let mut rng = GameRng::new(seed);
            let mut build = CharacterBuild::default();
            let choice = NewGameChoice {
                species: Selection::RandomViable,
                job: Selection::RandomViable,
                ..Default::default()
            };
            resolve_species_job(&mut build, &choice, &mut rng).unwrap();
            prop_assert!(build.species.is_some() && build.job.is_some());
        }
    }
}
