//! Player names: validation, generation, and save-file naming

use std::path::PathBuf;

use crate::rng::GameRng;
use crate::ui::SaveRegistry;

pub const MAX_NAME_LENGTH: usize = 30;

/// How many generated names to try against existing saves before giving up
const NAME_ATTEMPTS: usize = 100;

/// Soft validation: a bad name blocks submission but the player may retry.
pub fn is_good_name(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return false;
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_' || c == '.')
    {
        return false;
    }
    // All-digit names collide with numbered save slots.
    if name.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    true
}

/// Derive the save file name for a player name: non-portable characters
/// become underscores.
pub fn save_filename(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{stem}.cs")
}

/// Default save directory derivation, mirroring where the rest of the game
/// keeps its data.
pub fn default_save_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("crawl-rs");
    path.push("saves");
    path
}

const NAME_STARTS: &[&str] = &[
    "al", "be", "ca", "do", "el", "fa", "go", "hi", "is", "jo", "ka", "lu", "mo", "ne", "or",
    "pha", "qui", "ro", "sa", "tu", "ul", "vo", "wy", "xa", "yo", "ze",
];

const NAME_MIDDLES: &[&str] = &[
    "la", "ri", "nda", "mo", "ve", "ta", "shi", "go", "ru", "ze", "ki", "ber", "ran", "del",
];

const NAME_ENDS: &[&str] = &[
    "n", "r", "s", "th", "la", "ra", "dor", "wyn", "mir", "gar", "lis", "na", "m", "x",
];

/// Generate a pronounceable name from syllable tables.
pub fn make_name(rng: &mut GameRng) -> String {
    let mut name = String::new();
    name.push_str(NAME_STARTS[rng.rn2(NAME_STARTS.len() as u32) as usize]);
    if rng.coinflip() {
        name.push_str(NAME_MIDDLES[rng.rn2(NAME_MIDDLES.len() as u32) as usize]);
    }
    name.push_str(NAME_ENDS[rng.rn2(NAME_ENDS.len() as u32) as usize]);

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => name,
    }
}

/// Attempt to generate a random name that doesn't collide with an existing
/// save. Returns `None` if no good name could be generated after a bounded
/// number of tries.
pub fn random_name(saves: &dyn SaveRegistry, rng: &mut GameRng) -> Option<String> {
    for _ in 0..NAME_ATTEMPTS {
        let name = make_name(rng);
        if !saves.save_exists(&save_filename(&name)) {
            return Some(name);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FixedSaves(HashSet<String>);

    impl SaveRegistry for FixedSaves {
        fn save_exists(&self, filename: &str) -> bool {
            self.0.contains(filename)
        }
    }

    #[test]
    fn good_and_silly_names() {
        assert!(is_good_name("Sigmund"));
        assert!(is_good_name("Red Sonja"));
        assert!(!is_good_name(""));
        assert!(!is_good_name("   "));
        assert!(!is_good_name("12345"));
        assert!(!is_good_name("Bad\tName"));
        assert!(!is_good_name(&"x".repeat(MAX_NAME_LENGTH + 1)));
    }

    #[test]
    fn filenames_are_portable() {
        assert_eq!(save_filename("Red Sonja"), "Red_Sonja.cs");
        assert_eq!(save_filename("a/b"), "a_b.cs");
    }

    #[test]
    fn generated_names_are_good() {
        let mut rng = GameRng::new(2024);
        for _ in 0..200 {
            let name = make_name(&mut rng);
            assert!(is_good_name(&name), "generated silly name {name:?}");
        }
    }

    #[test]
    fn random_name_avoids_collisions() {
        // Mark the first name this seed would generate as taken; the
        // generator must skip past it.
        let first = make_name(&mut GameRng::new(9));
        let taken = FixedSaves(HashSet::from([save_filename(&first)]));

        let mut rng = GameRng::new(9);
        let name = random_name(&taken, &mut rng).unwrap();
        assert_ne!(name, first);
        assert!(!taken.save_exists(&save_filename(&name)));
    }

    #[test]
    fn random_name_gives_up_when_everything_collides() {
        struct AllTaken;
        impl SaveRegistry for AllTaken {
            fn save_exists(&self, _: &str) -> bool {
                true
            }
        }
        let mut rng = GameRng::new(1);
        assert_eq!(random_name(&AllTaken, &mut rng), None);
    }
}
