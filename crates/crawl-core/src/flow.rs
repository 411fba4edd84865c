//! The new-game flow itself
//!
//! A state machine over {game-mode map → species/job → weapon → name},
//! driven against a [`NewGameUi`]. Stages loop until their part of the
//! choice record is concrete; backing out of the weapon stage restores the
//! snapshot taken before species/job and restarts with the abandoned picks
//! as the new defaults.

use crate::errors::{ChoiceAxis, NewGameError};
use crate::job::Job;
use crate::maps::{maps_for_mode, resolve_map};
use crate::name::is_good_name;
use crate::restrictions::job_allowed;
use crate::resolver::{resolve_species_job, resolve_weapon, sole_weapon, starting_weapons};
use crate::rng::GameRng;
use crate::selection::{
    CharacterBuild, CharacterDef, GameMode, NewGameChoice, Selection,
};
use crate::species::Species;
use crate::ui::{NamePromptExit, NewGameUi, PromptExit, RerollDecision, SaveRegistry};
use crate::weapon::WeaponType;

/// What the flow produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewGameOutcome {
    /// A fully-resolved new character.
    Play(CharacterDef),
    /// The typed name matches an existing save the player wants to resume.
    LoadExisting(String),
    /// The player backed out of the whole flow.
    Abandoned,
    /// The player asked to quit the application.
    QuitGame,
}

/// The fixed tutorial character.
pub fn tutorial_character(choice: &mut NewGameChoice) {
    choice.species = Selection::Picked(Species::Human);
    choice.job = Selection::Picked(Job::Fighter);
    choice.weapon = Selection::Picked(WeaponType::Flail);
    choice.allowed_combos.clear();
    choice.allowed_species.clear();
    choice.allowed_jobs.clear();
    choice.allowed_weapons.clear();
}

/// Switch the choice to a fully-random character. Clears the build so
/// re-resolution starts from nothing.
pub fn mark_fully_random(build: &mut CharacterBuild, choice: &mut NewGameChoice, viable: bool) {
    build.clear_character();
    choice.fully_random = true;
    if viable {
        choice.species = Selection::RandomViable;
        choice.job = Selection::RandomViable;
    } else {
        choice.species = Selection::RandomAny;
        choice.job = Selection::RandomAny;
    }
}

/// Replace the choice with the previous game's defaults, keeping the name
/// and mode already entered.
pub fn set_default_choice(
    build: &mut CharacterBuild,
    choice: &mut NewGameChoice,
    defaults: &NewGameChoice,
) {
    build.clear_character();
    let name = std::mem::take(&mut choice.name);
    let mode = choice.mode;
    *choice = defaults.clone();
    choice.name = name;
    choice.mode = mode;
}

/// Parse a scripted combo string: either abbreviation pairs ("MiBe") or
/// "Species Job" names, optionally followed by ".weapon".
fn parse_combo(combo: &str) -> (Option<Species>, Option<Job>, Option<WeaponType>) {
    let (character, weapon) = match combo.split_once('.') {
        Some((c, w)) => (c.trim(), WeaponType::from_name(w.trim())),
        None => (combo.trim(), None),
    };

    if character.len() == 4 {
        let species = Species::from_abbrev(&character[..2]);
        let job = Job::from_abbrev(&character[2..]);
        return (species, job, weapon);
    }

    // A species display name that prefixes the string, then a job name.
    let species = <Species as strum::IntoEnumIterator>::iter().find(|sp| {
        character.len() >= sp.name().len()
            && character[..sp.name().len()].eq_ignore_ascii_case(sp.name())
    });
    let job = species.and_then(|sp| Job::from_name(character[sp.name().len()..].trim()));
    (species, job, weapon)
}

/// Sample the scripted alternative lists into the choice, if any.
fn apply_scripted_picks(choice: &mut NewGameChoice, rng: &mut GameRng) {
    if !choice.allowed_combos.is_empty() {
        choice.species = Selection::Unset;
        choice.job = Selection::Unset;
        choice.weapon = Selection::Unset;

        if let Some(combo) = rng.choose(&choice.allowed_combos).cloned() {
            let (species, job, weapon) = parse_combo(&combo);
            if let Some(sp) = species {
                choice.species = Selection::Picked(sp);
            }
            if let Some(j) = job {
                choice.job = Selection::Picked(j);
            }
            if let Some(wp) = weapon {
                choice.weapon = Selection::Picked(wp);
            }
        }
        return;
    }

    if let Some(&sp) = rng.choose(&choice.allowed_species) {
        choice.species = Selection::Picked(sp);
    }
    if let Some(&job) = rng.choose(&choice.allowed_jobs) {
        choice.job = Selection::Picked(job);
    }
    // allowed_weapons is sampled by resolve_weapon, where the candidate
    // list is known.
}

fn choose_species_job(
    ui: &mut dyn NewGameUi,
    build: &mut CharacterBuild,
    choice: &mut NewGameChoice,
    defaults: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<PromptExit, NewGameError> {
    resolve_species_job(build, choice, rng)?;

    // Either prompt may switch to a fully-random character or clear the
    // other axis ("pick background first"), so both are re-checked each
    // pass.
    while choice.species.is_unset() || choice.job.is_unset() {
        if choice.species.is_unset() {
            match ui.prompt_species(build, choice, defaults) {
                PromptExit::Done => {}
                other => return Ok(other),
            }
            resolve_species_job(build, choice, rng)?;
        }
        if choice.job.is_unset() {
            match ui.prompt_job(build, choice, defaults) {
                PromptExit::Done => {}
                other => return Ok(other),
            }
            resolve_species_job(build, choice, rng)?;
        }
    }

    let (Some(species), Some(job)) = (build.species, build.job) else {
        return Err(NewGameError::NoLegalCombination {
            axis: ChoiceAxis::Species,
        });
    };
    if job_allowed(species, job).is_banned() {
        // An invalid combination was passed in through options, or the
        // tables are inconsistent.
        return Err(NewGameError::IncompatibleCombination { species, job });
    }
    Ok(PromptExit::Done)
}

fn choose_weapon(
    ui: &mut dyn NewGameUi,
    build: &mut CharacterBuild,
    choice: &mut NewGameChoice,
    defaults: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<PromptExit, NewGameError> {
    let (Some(species), Some(job)) = (build.species, build.job) else {
        return Err(NewGameError::NoLegalCombination {
            axis: ChoiceAxis::Weapon,
        });
    };

    // No weapon at all for weaponless species and fixed-kit backgrounds.
    if species.is_weaponless() || !job.has_weapon_choice() {
        return Ok(PromptExit::Done);
    }

    let weapons = starting_weapons(species, job);
    if weapons.is_empty() {
        return Err(NewGameError::NoLegalCombination {
            axis: ChoiceAxis::Weapon,
        });
    }
    if let Some(wp) = sole_weapon(&weapons) {
        build.weapon = Some(wp);
        choice.weapon = Selection::Picked(wp);
        return Ok(PromptExit::Done);
    }

    resolve_weapon(build, choice, &weapons, rng)?;
    while build.weapon.is_none() {
        match ui.prompt_weapon(build, choice, defaults, &weapons) {
            PromptExit::Done => {}
            other => return Ok(other),
        }
        resolve_weapon(build, choice, &weapons, rng)?;
    }
    Ok(PromptExit::Done)
}

fn choose_gamemode_map(
    ui: &mut dyn NewGameUi,
    build: &mut CharacterBuild,
    choice: &mut NewGameChoice,
    defaults: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<PromptExit, NewGameError> {
    let maps = maps_for_mode(build.mode);
    if maps.is_empty() {
        return Err(NewGameError::NoMapsForMode(build.mode));
    }

    if choice.map.is_unset() {
        if maps.len() > 1 {
            match ui.prompt_map(build, choice, defaults, &maps) {
                PromptExit::Done => {}
                other => return Ok(other),
            }
        } else {
            choice.map = Selection::Picked(maps[0].name.to_string());
        }
    }

    build.map = Some(resolve_map(build.mode, &choice.map, rng)?);
    Ok(PromptExit::Done)
}

/// Species/job, reroll confirmation and weapon, with snapshot-restore on
/// reroll or weapon back-out.
fn choose_char(
    ui: &mut dyn NewGameUi,
    build: &mut CharacterBuild,
    choice: &mut NewGameChoice,
    defaults: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<PromptExit, NewGameError> {
    let snapshot = build.clone();
    let mut defaults = defaults.clone();

    if build.mode == GameMode::Tutorial {
        tutorial_character(choice);
    }

    loop {
        apply_scripted_picks(choice, rng);

        match choose_species_job(ui, build, choice, &defaults, rng)? {
            PromptExit::Done => {}
            other => return Ok(other),
        }

        if choice.fully_random {
            match ui.confirm_combination(build) {
                RerollDecision::Accept => {}
                RerollDecision::Reroll => {
                    *build = snapshot.clone();
                    continue;
                }
                RerollDecision::Abandon => return Ok(PromptExit::Abandon),
                RerollDecision::Quit => return Ok(PromptExit::Quit),
            }
        }

        match choose_weapon(ui, build, choice, &defaults, rng)? {
            PromptExit::Done => return Ok(PromptExit::Done),
            PromptExit::Back => {
                // Choose again; the abandoned picks become the defaults,
                // name and mode stay.
                defaults = choice.clone();
                *build = snapshot.clone();
                *choice = NewGameChoice {
                    name: snapshot.name.clone(),
                    mode: snapshot.mode,
                    ..Default::default()
                };
            }
            other => return Ok(other),
        }
    }
}

/// Run the whole selection flow.
///
/// `choice` carries whatever was already decided (command line, defaults
/// file); `defaults` is the previous game's accepted choice, offered behind
/// the Tab shortcut. On success the caller receives either a character to
/// start or a request to load an existing save.
pub fn choose_game(
    ui: &mut dyn NewGameUi,
    saves: &dyn SaveRegistry,
    choice: &mut NewGameChoice,
    defaults: &NewGameChoice,
    rng: &mut GameRng,
) -> Result<NewGameOutcome, NewGameError> {
    let mut build = CharacterBuild::new(choice.name.clone(), choice.mode);

    if build.mode.has_map_stage() {
        match choose_gamemode_map(ui, &mut build, choice, defaults, rng)? {
            PromptExit::Done => {}
            PromptExit::Quit => return Ok(NewGameOutcome::QuitGame),
            _ => return Ok(NewGameOutcome::Abandoned),
        }
    }

    match choose_char(ui, &mut build, choice, defaults, rng)? {
        PromptExit::Done => {}
        PromptExit::Quit => return Ok(NewGameOutcome::QuitGame),
        _ => return Ok(NewGameOutcome::Abandoned),
    }

    // Marking a character fully random clears the build; the name decided
    // so far lives in the choice.
    build.name = choice.name.trim().to_string();

    if build.name.is_empty() {
        match ui.prompt_name(&build, choice, saves, rng) {
            NamePromptExit::Named => build.name = choice.name.trim().to_string(),
            NamePromptExit::LoadExisting => {
                return Ok(NewGameOutcome::LoadExisting(choice.name.trim().to_string()));
            }
            NamePromptExit::Abandon => return Ok(NewGameOutcome::Abandoned),
            NamePromptExit::Quit => return Ok(NewGameOutcome::QuitGame),
        }
    }

    if build.name.is_empty() {
        return Err(NewGameError::EmptyName);
    }
    debug_assert!(is_good_name(&build.name));

    let (Some(species), Some(job)) = (build.species, build.job) else {
        return Err(NewGameError::NoLegalCombination {
            axis: ChoiceAxis::Species,
        });
    };
    if job_allowed(species, job).is_banned() {
        return Err(NewGameError::IncompatibleCombination { species, job });
    }

    Ok(NewGameOutcome::Play(CharacterDef {
        name: build.name,
        mode: build.mode,
        species,
        job,
        weapon: build.weapon,
        map: build.map,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_abbrev_form() {
        let (sp, job, wp) = parse_combo("MiBe");
        assert_eq!(sp, Some(Species::Minotaur));
        assert_eq!(job, Some(Job::Berserker));
        assert_eq!(wp, None);
    }

    #[test]
    fn combo_name_form_with_weapon() {
        let (sp, job, wp) = parse_combo("Minotaur Berserker.war axe");
        assert_eq!(sp, Some(Species::Minotaur));
        assert_eq!(job, Some(Job::Berserker));
        assert_eq!(wp, Some(WeaponType::WarAxe));
    }

    #[test]
    fn combo_garbage_parses_to_nothing() {
        let (sp, job, wp) = parse_combo("zzzz");
        assert_eq!(sp, None);
        assert_eq!(job, None);
        assert_eq!(wp, None);
    }

    #[test]
    fn tutorial_preset_is_human_fighter() {
        let mut choice = NewGameChoice {
            allowed_combos: vec!["MiBe".into()],
            ..Default::default()
        };
        tutorial_character(&mut choice);
        assert_eq!(choice.species, Selection::Picked(Species::Human));
        assert_eq!(choice.job, Selection::Picked(Job::Fighter));
        assert_eq!(choice.weapon, Selection::Picked(WeaponType::Flail));
        assert!(choice.allowed_combos.is_empty());
    }

    #[test]
    fn set_default_choice_keeps_name_and_mode() {
        let mut build = CharacterBuild::default();
        build.species = Some(Species::Troll);
        let mut choice = NewGameChoice {
            name: "Urk".into(),
            mode: GameMode::Sprint,
            ..Default::default()
        };
        let defaults = NewGameChoice {
            name: "Old".into(),
            species: Selection::Picked(Species::Minotaur),
            job: Selection::Picked(Job::Berserker),
            ..Default::default()
        };
        set_default_choice(&mut build, &mut choice, &defaults);
        assert_eq!(choice.name, "Urk");
        assert_eq!(choice.mode, GameMode::Sprint);
        assert_eq!(choice.species, Selection::Picked(Species::Minotaur));
        assert!(build.species.is_none());
    }

    #[test]
    fn mark_fully_random_sets_both_axes() {
        let mut build = CharacterBuild::default();
        build.species = Some(Species::Troll);
        let mut choice = NewGameChoice::default();
        mark_fully_random(&mut build, &mut choice, true);
        assert!(choice.fully_random);
        assert_eq!(choice.species, Selection::RandomViable);
        assert_eq!(choice.job, Selection::RandomViable);
        assert!(build.species.is_none());
    }
}
