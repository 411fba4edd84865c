//! Capability interface between the flow and whatever presents it
//!
//! The orchestrator never builds widgets; it asks a [`NewGameUi`] to run one
//! prompt at a time. Prompts communicate their result by mutating the shared
//! [`NewGameChoice`] and returning an exit signal, so a scripted
//! implementation can drive the whole flow in tests.

use crate::maps::MapDef;
use crate::resolver::WeaponChoice;
use crate::rng::GameRng;
use crate::selection::{CharacterBuild, NewGameChoice};

/// How a menu prompt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptExit {
    /// The choice record was updated; carry on.
    Done,
    /// Back out of this stage (weapon menu Bksp, map menu escape).
    Back,
    /// Abandon the whole selection flow.
    Abandon,
    /// Quit the application.
    Quit,
}

/// How the name prompt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePromptExit {
    /// `choice.name` holds a good, non-colliding (or approved-overwrite) name.
    Named,
    /// The typed name matches an existing save the player wants to resume.
    LoadExisting,
    /// Abandon the whole selection flow.
    Abandon,
    /// Quit the application.
    Quit,
}

/// Verdict on a fully-random combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerollDecision {
    Accept,
    Reroll,
    Abandon,
    Quit,
}

/// Save-file collaborator: existence checks only, actual save I/O lives
/// elsewhere.
pub trait SaveRegistry {
    fn save_exists(&self, filename: &str) -> bool;
}

/// A directory-backed registry over [`crate::name::default_save_dir`]
pub struct DirSaveRegistry {
    dir: std::path::PathBuf,
}

impl DirSaveRegistry {
    pub fn new(dir: std::path::PathBuf) -> Self {
        Self { dir }
    }
}

impl Default for DirSaveRegistry {
    fn default() -> Self {
        Self::new(crate::name::default_save_dir())
    }
}

impl SaveRegistry for DirSaveRegistry {
    fn save_exists(&self, filename: &str) -> bool {
        self.dir.join(filename).exists()
    }
}

/// The prompts the orchestrator can ask for.
///
/// Implementations must filter and color entries by the current partial
/// state in `build` (banned entries hidden, restricted ones dimmed) and are
/// expected to honor the standard shortcuts: recommended (`+`), random
/// (`*`), recommended/random character (`#`/`!`), previous default (Tab),
/// aptitudes (`%`), help (`?`), back (Space/Bksp/Esc) and quit (`X`).
pub trait NewGameUi {
    /// Present the species menu.
    fn prompt_species(
        &mut self,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
    ) -> PromptExit;

    /// Present the background menu.
    fn prompt_job(
        &mut self,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
    ) -> PromptExit;

    /// Present the starting-weapon menu over a prepared candidate list.
    fn prompt_weapon(
        &mut self,
        build: &CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
        weapons: &[WeaponChoice],
    ) -> PromptExit;

    /// Present the starting-map menu for Sprint/Tutorial games.
    fn prompt_map(
        &mut self,
        build: &CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
        maps: &[&'static MapDef],
    ) -> PromptExit;

    /// Ask for the character's name. Empty submissions should fall back to
    /// [`crate::name::random_name`]; silly names block submission.
    fn prompt_name(
        &mut self,
        build: &CharacterBuild,
        choice: &mut NewGameChoice,
        saves: &dyn SaveRegistry,
        rng: &mut GameRng,
    ) -> NamePromptExit;

    /// Show the rolled combination of a fully-random character and ask
    /// whether to keep it.
    fn confirm_combination(&mut self, build: &CharacterBuild) -> RerollDecision;
}
