//! Starting-map registry for modes that begin on a fixed map

use crate::errors::NewGameError;
use crate::rng::GameRng;
use crate::selection::{GameMode, Selection};

/// A selectable starting map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Menu sort key; ties break on description.
    pub order: u8,
}

static SPRINT_MAPS: &[MapDef] = &[
    MapDef { name: "sprint_i", description: "Sprint I: \"Red Sonja\"", order: 0 },
    MapDef { name: "sprint_ii", description: "Sprint II: \"The Violet Keep of Menkaure\"", order: 1 },
    MapDef { name: "sprint_iii", description: "Sprint III: \"The Ten Rune Challenge\"", order: 2 },
    MapDef { name: "sprint_iv", description: "Sprint IV: \"Fedhas' Mad Dash\"", order: 3 },
    MapDef { name: "sprint_v", description: "Sprint V: \"Ziggurat Sprint\"", order: 4 },
    MapDef { name: "sprint_vi", description: "Sprint VI: \"Thunderdome\"", order: 5 },
    MapDef { name: "sprint_vii", description: "Sprint VII: \"The Pits\"", order: 6 },
    MapDef { name: "sprint_viii", description: "Sprint VIII: \"Arena of Blood\"", order: 7 },
    MapDef { name: "sprint_ix", description: "Sprint IX: \"|||||||||||||||||||||||||||||\"", order: 8 },
];

static TUTORIAL_MAPS: &[MapDef] = &[
    MapDef { name: "tutorial_lesson1", description: "Lesson 1: Movement and Exploration", order: 0 },
    MapDef { name: "tutorial_lesson2", description: "Lesson 2: Monsters and Combat", order: 1 },
    MapDef { name: "tutorial_lesson3", description: "Lesson 3: Items and Inventory", order: 2 },
    MapDef { name: "tutorial_lesson4", description: "Lesson 4: Casting Spells", order: 3 },
    MapDef { name: "tutorial_lesson5", description: "Lesson 5: Gods and Divine Abilities", order: 4 },
];

/// All maps for a mode, in menu order.
pub fn maps_for_mode(mode: GameMode) -> Vec<&'static MapDef> {
    let mut maps: Vec<&'static MapDef> = match mode {
        GameMode::Sprint => SPRINT_MAPS.iter().collect(),
        GameMode::Tutorial => TUTORIAL_MAPS.iter().collect(),
        GameMode::Normal => Vec::new(),
    };
    maps.sort_by(|a, b| a.order.cmp(&b.order).then(a.description.cmp(b.description)));
    maps
}

pub fn map_by_name(mode: GameMode, name: &str) -> Option<&'static MapDef> {
    maps_for_mode(mode).into_iter().find(|m| m.name == name)
}

/// Turn a map selection into a concrete map name. Unset and RandomAny both
/// draw uniformly from the registry; a picked name must exist for the mode.
pub fn resolve_map(
    mode: GameMode,
    selection: &Selection<String>,
    rng: &mut GameRng,
) -> Result<String, NewGameError> {
    let maps = maps_for_mode(mode);
    if maps.is_empty() {
        return Err(NewGameError::NoMapsForMode(mode));
    }
    match selection {
        Selection::Picked(name) => map_by_name(mode, name)
            .map(|m| m.name.to_string())
            .ok_or_else(|| NewGameError::UnknownMap {
                mode,
                name: name.clone(),
            }),
        // Recommended and random mean the same thing for maps.
        _ => Ok(maps[rng.rn2(maps.len() as u32) as usize].name.to_string()),
    }
}
