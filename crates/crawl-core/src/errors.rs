//! Fatal new-game errors
//!
//! These conditions mean the static tables or supplied configuration are
//! inconsistent. They are not user errors; user cancellation travels through
//! [`crate::flow::NewGameOutcome`] instead.

use thiserror::Error;

use crate::job::Job;
use crate::selection::GameMode;
use crate::species::Species;

/// Which axis failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceAxis {
    Species,
    Job,
    Weapon,
}

impl std::fmt::Display for ChoiceAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChoiceAxis::Species => "species",
            ChoiceAxis::Job => "background",
            ChoiceAxis::Weapon => "weapon",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewGameError {
    #[error("Failed to find a legal {axis}.")]
    NoLegalCombination { axis: ChoiceAxis },

    #[error("Incompatible species and background ({} {}) selected.", species.name(), job.name())]
    IncompatibleCombination { species: Species, job: Job },

    #[error("No player name specified.")]
    EmptyName,

    #[error("No {0} maps found.")]
    NoMapsForMode(GameMode),

    #[error("Unknown {mode} map '{name}'.")]
    UnknownMap { mode: GameMode, name: String },
}
