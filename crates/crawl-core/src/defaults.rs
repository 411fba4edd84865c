//! Last-used startup choices, persisted between games
//!
//! Stored in a small line-based rc file (`newgame.rc`) under the game's data
//! directory. Unknown values load as Unset rather than failing the whole
//! file, so stale entries from older versions don't lock the player out.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::job::Job;
use crate::selection::{GameMode, NewGameChoice, Selection};
use crate::species::Species;
use crate::weapon::WeaponType;

#[derive(Error, Debug)]
pub enum DefaultsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for option: {0}")]
    MissingValue(String),
}

/// File name under [`default_config_dir`]
pub const DEFAULTS_FILE: &str = "newgame.rc";

pub fn default_config_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("crawl-rs");
    path
}

fn selection_to_str<T>(sel: &Selection<T>, picked: impl Fn(&T) -> String) -> Option<String> {
    match sel {
        Selection::Unset => None,
        Selection::RandomAny => Some("random".into()),
        Selection::RandomViable => Some("viable".into()),
        Selection::Picked(v) => Some(picked(v)),
    }
}

fn parse_selection<T>(value: &str, lookup: impl Fn(&str) -> Option<T>) -> Selection<T> {
    match value {
        "random" => Selection::RandomAny,
        "viable" => Selection::RandomViable,
        other => lookup(other).map(Selection::Picked).unwrap_or(Selection::Unset),
    }
}

/// Serialize a choice record to rc text.
pub fn to_rc(choice: &NewGameChoice) -> String {
    let mut out = String::from("# crawl-rs newgame defaults\n");
    if !choice.name.is_empty() {
        out.push_str(&format!("name = {}\n", choice.name));
    }
    out.push_str(&format!("mode = {}\n", choice.mode.to_string().to_lowercase()));
    if let Some(v) = selection_to_str(&choice.species, |sp| sp.abbrev().to_string()) {
        out.push_str(&format!("species = {v}\n"));
    }
    if let Some(v) = selection_to_str(&choice.job, |job| job.abbrev().to_string()) {
        out.push_str(&format!("job = {v}\n"));
    }
    if let Some(v) = selection_to_str(&choice.weapon, |wp| wp.name().to_string()) {
        out.push_str(&format!("weapon = {v}\n"));
    }
    if let Some(v) = selection_to_str(&choice.map, |m| m.clone()) {
        out.push_str(&format!("map = {v}\n"));
    }
    if choice.fully_random {
        out.push_str("fully_random = true\n");
    }
    out
}

/// Parse rc text into a choice record.
pub fn parse_rc(contents: &str) -> Result<NewGameChoice, DefaultsError> {
    let mut choice = NewGameChoice::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| DefaultsError::MissingValue(line.to_string()))?;
        let (key, value) = (key.trim(), value.trim());

        match key {
            "name" => choice.name = value.to_string(),
            "mode" => {
                choice.mode = match value {
                    "sprint" => GameMode::Sprint,
                    "tutorial" => GameMode::Tutorial,
                    _ => GameMode::Normal,
                }
            }
            "species" => choice.species = parse_selection(value, Species::from_abbrev),
            "job" => choice.job = parse_selection(value, Job::from_abbrev),
            "weapon" => choice.weapon = parse_selection(value, WeaponType::from_name),
            "map" => choice.map = Selection::Picked(value.to_string()),
            "fully_random" => choice.fully_random = value == "true",
            _ => return Err(DefaultsError::UnknownOption(key.to_string())),
        }
    }

    Ok(choice)
}

/// Load defaults, falling back to an empty record when the file is missing
/// or unreadable.
pub fn load_defaults(path: &Path) -> NewGameChoice {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| parse_rc(&contents).ok())
        .unwrap_or_default()
}

/// Write the accepted choice back as the next game's defaults.
pub fn save_defaults(path: &Path, choice: &NewGameChoice) -> Result<(), DefaultsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DefaultsError::Io(e.to_string()))?;
    }
    std::fs::write(path, to_rc(choice)).map_err(|e| DefaultsError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_round_trip() {
        let choice = NewGameChoice {
            name: "Sigmund".into(),
            mode: GameMode::Sprint,
            species: Selection::Picked(Species::Minotaur),
            job: Selection::Picked(Job::Berserker),
            weapon: Selection::Picked(WeaponType::WarAxe),
            map: Selection::Picked("sprint_iv".into()),
            ..Default::default()
        };
        let parsed = parse_rc(&to_rc(&choice)).unwrap();
        assert_eq!(parsed.name, "Sigmund");
        assert_eq!(parsed.mode, GameMode::Sprint);
        assert_eq!(parsed.species, Selection::Picked(Species::Minotaur));
        assert_eq!(parsed.job, Selection::Picked(Job::Berserker));
        assert_eq!(parsed.weapon, Selection::Picked(WeaponType::WarAxe));
        assert_eq!(parsed.map, Selection::Picked("sprint_iv".into()));
    }

    #[test]
    fn placeholders_survive() {
        let choice = NewGameChoice {
            species: Selection::RandomViable,
            job: Selection::RandomAny,
            ..Default::default()
        };
        let parsed = parse_rc(&to_rc(&choice)).unwrap();
        assert_eq!(parsed.species, Selection::RandomViable);
        assert_eq!(parsed.job, Selection::RandomAny);
    }

    #[test]
    fn comments_and_blanks_skipped() {
        let parsed = parse_rc("# comment\n\nspecies = Tr\n").unwrap();
        assert_eq!(parsed.species, Selection::Picked(Species::Troll));
    }

    #[test]
    fn stale_species_loads_as_unset() {
        let parsed = parse_rc("species = Zz\n").unwrap();
        assert!(parsed.species.is_unset());
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(matches!(
            parse_rc("tiles = true\n"),
            Err(DefaultsError::UnknownOption(_))
        ));
    }
}
