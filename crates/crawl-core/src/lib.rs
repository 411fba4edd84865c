//! crawl-core: character creation logic for a Crawl-like roguelike
//!
//! This crate contains the selection and resolution logic with no terminal
//! dependencies. It is designed to be pure and testable: the interactive
//! parts are expressed through the [`ui::NewGameUi`] capability trait, which
//! `crawl-tui` implements with ratatui and tests implement with scripts.

pub mod defaults;
pub mod errors;
pub mod flow;
pub mod groups;
pub mod job;
pub mod maps;
pub mod name;
pub mod resolver;
pub mod restrictions;
pub mod selection;
pub mod species;
pub mod ui;
pub mod weapon;

mod rng;

pub use errors::NewGameError;
pub use flow::{choose_game, NewGameOutcome};
pub use job::Job;
pub use rng::GameRng;
pub use selection::{CharacterBuild, CharacterDef, GameMode, NewGameChoice, Selection};
pub use species::Species;
pub use weapon::WeaponType;
