//! Choice records for the new-game flow
//!
//! A [`Selection`] keeps the "random"/"recommended" placeholders out of the
//! concrete value space, so a placeholder can never be mistaken for a real
//! pick once the flow completes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::job::Job;
use crate::species::Species;
use crate::weapon::WeaponType;

/// One axis of the character choice: either a concrete pick, a request for
/// random resolution, or not chosen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T> {
    /// Nothing chosen; the player must be prompted.
    Unset,
    /// Resolve to any legal value.
    RandomAny,
    /// Resolve to a recommended value, falling back to any legal one.
    RandomViable,
    /// An explicit pick.
    Picked(T),
}

impl<T> Selection<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Selection::Unset)
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Selection::RandomAny | Selection::RandomViable)
    }

    pub fn as_picked(&self) -> Option<&T> {
        match self {
            Selection::Picked(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Copy> Selection<T> {
    pub fn picked(&self) -> Option<T> {
        self.as_picked().copied()
    }
}

// A derived Default would require `T: Default`.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Unset
    }
}

/// Game mode being started
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum GameMode {
    #[default]
    Normal,
    Sprint,
    Tutorial,
}

impl GameMode {
    /// Sprint and Tutorial start by picking a map
    pub const fn has_map_stage(&self) -> bool {
        matches!(self, GameMode::Sprint | GameMode::Tutorial)
    }
}

/// The player's requested character, as accumulated by prompts, command-line
/// arguments and the defaults file. Mutable working state for the flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGameChoice {
    pub name: String,
    pub mode: GameMode,
    pub species: Selection<Species>,
    pub job: Selection<Job>,
    pub weapon: Selection<WeaponType>,
    /// Map name for modes with a map stage; `RandomAny` picks uniformly.
    pub map: Selection<String>,

    /// Scripted alternatives: when non-empty, one entry is sampled before
    /// each attempt. Combos are "SpJb" abbreviation pairs or
    /// "Species Job.weapon" strings.
    pub allowed_combos: Vec<String>,
    pub allowed_species: Vec<Species>,
    pub allowed_jobs: Vec<Job>,
    pub allowed_weapons: Vec<WeaponType>,

    /// Keep rerolling whole characters until the player accepts one.
    pub fully_random: bool,
}

impl NewGameChoice {
    /// Both axes explicitly picked (used to decide whether the previous
    /// defaults are worth a Tab shortcut).
    pub fn char_defined(&self) -> bool {
        self.species.picked().is_some() && self.job.picked().is_some()
    }

    /// Forget the character part of the choice, keeping name and mode.
    pub fn clear_character(&mut self) {
        self.species = Selection::Unset;
        self.job = Selection::Unset;
        self.weapon = Selection::Unset;
    }

    /// Human-readable description of a (possibly still random) choice,
    /// used for the previous-choice menu shortcut.
    pub fn description(&self) -> String {
        match (&self.species, &self.job) {
            (Selection::RandomViable, s) if s.is_random() => "Recommended character".into(),
            (s, Selection::RandomViable) if s.is_random() => "Recommended character".into(),
            (s, j) if s.is_random() && j.is_random() => "Random character".into(),
            (Selection::Picked(sp), Selection::RandomAny) => format!("Random {}", sp.name()),
            (Selection::Picked(sp), Selection::RandomViable) => {
                format!("Recommended {}", sp.name())
            }
            (Selection::RandomAny, Selection::Picked(job)) => format!("Random {}", job.name()),
            (Selection::RandomViable, Selection::Picked(job)) => {
                format!("Recommended {}", job.name())
            }
            (Selection::Picked(sp), Selection::Picked(job)) => {
                format!("{} {}", sp.name(), job.name())
            }
            _ => "Character".into(),
        }
    }
}

/// The resolution target: concrete values only, never overwritten once set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterBuild {
    pub name: String,
    pub mode: GameMode,
    pub species: Option<Species>,
    pub job: Option<Job>,
    pub weapon: Option<WeaponType>,
    pub map: Option<String>,
}

impl CharacterBuild {
    pub fn new(name: String, mode: GameMode) -> Self {
        Self {
            name,
            mode,
            ..Default::default()
        }
    }

    pub fn char_defined(&self) -> bool {
        self.species.is_some() && self.job.is_some()
    }

    /// Forget species, job and weapon so a rerolled character can resolve.
    pub fn clear_character(&mut self) {
        self.species = None;
        self.job = None;
        self.weapon = None;
    }

    /// Welcome banner shown above every prompt
    pub fn welcome_message(&self) -> String {
        let mut what = String::new();
        if let Some(sp) = self.species {
            what.push_str(sp.name());
        }
        if let Some(job) = self.job {
            if !what.is_empty() {
                what.push(' ');
            }
            what.push_str(job.name());
        }
        let who = if !self.name.is_empty() {
            if what.is_empty() {
                self.name.clone()
            } else {
                format!("{} the {}", self.name, what)
            }
        } else if !what.is_empty() {
            format!("unnamed {what}")
        } else {
            String::new()
        };
        if who.is_empty() {
            "Welcome.".into()
        } else {
            format!("Welcome, {who}.")
        }
    }
}

/// A fully-resolved character, immutable once the flow completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub name: String,
    pub mode: GameMode,
    pub species: Species,
    pub job: Job,
    /// `None` for weaponless species and fixed-kit backgrounds
    pub weapon: Option<WeaponType>,
    /// Set for modes with a map stage
    pub map: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_of_placeholders() {
        let mut choice = NewGameChoice {
            species: Selection::RandomViable,
            job: Selection::RandomViable,
            ..Default::default()
        };
        assert_eq!(choice.description(), "Recommended character");

        choice.species = Selection::RandomAny;
        choice.job = Selection::RandomAny;
        assert_eq!(choice.description(), "Random character");

        choice.species = Selection::Picked(Species::Minotaur);
        assert_eq!(choice.description(), "Random Minotaur");

        choice.job = Selection::Picked(Job::Berserker);
        assert_eq!(choice.description(), "Minotaur Berserker");
    }

    #[test]
    fn welcome_variants() {
        let mut build = CharacterBuild::new(String::new(), GameMode::Normal);
        assert_eq!(build.welcome_message(), "Welcome.");

        build.species = Some(Species::Troll);
        build.job = Some(Job::Monk);
        assert_eq!(build.welcome_message(), "Welcome, unnamed Troll Monk.");

        build.name = "Grog".into();
        assert_eq!(build.welcome_message(), "Welcome, Grog the Troll Monk.");
    }

    #[test]
    fn character_def_serde_round_trip() {
        let def = CharacterDef {
            name: "Sigmund".into(),
            mode: GameMode::Sprint,
            species: Species::Minotaur,
            job: Job::Berserker,
            weapon: Some(WeaponType::WarAxe),
            map: Some("sprint_iv".into()),
        };
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(serde_json::from_str::<CharacterDef>(&json).unwrap(), def);
    }

    #[test]
    fn clear_character_keeps_name_and_mode() {
        let mut choice = NewGameChoice {
            name: "Mina".into(),
            mode: GameMode::Sprint,
            species: Selection::Picked(Species::Vampire),
            job: Selection::Picked(Job::Enchanter),
            weapon: Selection::RandomAny,
            ..Default::default()
        };
        choice.clear_character();
        assert_eq!(choice.name, "Mina");
        assert_eq!(choice.mode, GameMode::Sprint);
        assert!(choice.species.is_unset());
        assert!(choice.job.is_unset());
        assert!(choice.weapon.is_unset());
    }
}
