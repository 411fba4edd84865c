//! End-to-end flow tests driven by a scripted UI

use std::collections::HashSet;

use crawl_core::flow::{choose_game, mark_fully_random, NewGameOutcome};
use crawl_core::maps::MapDef;
use crawl_core::resolver::WeaponChoice;
use crawl_core::ui::{
    NamePromptExit, NewGameUi, PromptExit, RerollDecision, SaveRegistry,
};
use crawl_core::{
    CharacterBuild, GameMode, GameRng, Job, NewGameChoice, Selection, Species, WeaponType,
};

/// A save registry with a fixed set of taken file names
#[derive(Default)]
struct FakeSaves(HashSet<String>);

impl SaveRegistry for FakeSaves {
    fn save_exists(&self, filename: &str) -> bool {
        self.0.contains(filename)
    }
}

/// One scripted reaction per prompt invocation
enum Step {
    PickSpecies(Species),
    PickJob(Job),
    PickWeapon(WeaponType),
    RandomWeapon,
    PickMap(&'static str),
    FullyRandom { viable: bool },
    AcceptCombination,
    RejectCombination,
    BackOutOfWeapons,
    Name(&'static str),
    AbandonHere,
}

/// Replays a fixed script against whatever prompt the flow asks for next.
struct ScriptedUi {
    steps: std::vec::IntoIter<Step>,
    prompts_seen: Vec<&'static str>,
}

impl ScriptedUi {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into_iter(),
            prompts_seen: Vec::new(),
        }
    }

    fn next_step(&mut self, prompt: &'static str) -> Step {
        self.prompts_seen.push(prompt);
        self.steps.next().unwrap_or_else(|| panic!("script exhausted at {prompt} prompt"))
    }
}

impl NewGameUi for ScriptedUi {
    fn prompt_species(
        &mut self,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        _defaults: &NewGameChoice,
    ) -> PromptExit {
        match self.next_step("species") {
            Step::PickSpecies(sp) => {
                choice.species = Selection::Picked(sp);
                PromptExit::Done
            }
            Step::FullyRandom { viable } => {
                mark_fully_random(build, choice, viable);
                PromptExit::Done
            }
            Step::AbandonHere => PromptExit::Abandon,
            other_step => panic!("species prompt got unexpected step {}", step_name(&other_step)),
        }
    }

    fn prompt_job(
        &mut self,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        _defaults: &NewGameChoice,
    ) -> PromptExit {
        match self.next_step("job") {
            Step::PickJob(job) => {
                choice.job = Selection::Picked(job);
                PromptExit::Done
            }
            Step::FullyRandom { viable } => {
                mark_fully_random(build, choice, viable);
                PromptExit::Done
            }
            Step::AbandonHere => PromptExit::Abandon,
            other_step => panic!("job prompt got unexpected step {}", step_name(&other_step)),
        }
    }

    fn prompt_weapon(
        &mut self,
        _build: &CharacterBuild,
        choice: &mut NewGameChoice,
        _defaults: &NewGameChoice,
        weapons: &[WeaponChoice],
    ) -> PromptExit {
        match self.next_step("weapon") {
            Step::PickWeapon(wp) => {
                assert!(
                    weapons.iter().any(|&(cand, _)| cand == wp),
                    "scripted weapon {wp:?} not offered"
                );
                choice.weapon = Selection::Picked(wp);
                PromptExit::Done
            }
            Step::RandomWeapon => {
                choice.weapon = Selection::RandomAny;
                PromptExit::Done
            }
            Step::BackOutOfWeapons => PromptExit::Back,
            other_step => panic!("weapon prompt got unexpected step {}", step_name(&other_step)),
        }
    }

    fn prompt_map(
        &mut self,
        _build: &CharacterBuild,
        choice: &mut NewGameChoice,
        _defaults: &NewGameChoice,
        maps: &[&'static MapDef],
    ) -> PromptExit {
        match self.next_step("map") {
            Step::PickMap(name) => {
                assert!(maps.iter().any(|m| m.name == name), "map {name} not offered");
                choice.map = Selection::Picked(name.to_string());
                PromptExit::Done
            }
            Step::AbandonHere => PromptExit::Abandon,
            other_step => panic!("map prompt got unexpected step {}", step_name(&other_step)),
        }
    }

    fn prompt_name(
        &mut self,
        _build: &CharacterBuild,
        choice: &mut NewGameChoice,
        saves: &dyn SaveRegistry,
        rng: &mut GameRng,
    ) -> NamePromptExit {
        match self.next_step("name") {
            Step::Name("") => {
                // Empty submission: generated-name fallback, like the real UI.
                match crawl_core::name::random_name(saves, rng) {
                    Some(generated) => {
                        choice.name = generated;
                        NamePromptExit::Named
                    }
                    None => NamePromptExit::Abandon,
                }
            }
            Step::Name(n) => {
                choice.name = n.to_string();
                NamePromptExit::Named
            }
            Step::AbandonHere => NamePromptExit::Abandon,
            other_step => panic!("name prompt got unexpected step {}", step_name(&other_step)),
        }
    }

    fn confirm_combination(&mut self, _build: &CharacterBuild) -> RerollDecision {
        match self.next_step("confirm") {
            Step::AcceptCombination => RerollDecision::Accept,
            Step::RejectCombination => RerollDecision::Reroll,
            other_step => panic!("confirm prompt got unexpected step {}", step_name(&other_step)),
        }
    }
}

fn step_name(step: &Step) -> &'static str {
    match step {
        Step::PickSpecies(_) => "PickSpecies",
        Step::PickJob(_) => "PickJob",
        Step::PickWeapon(_) => "PickWeapon",
        Step::RandomWeapon => "RandomWeapon",
        Step::PickMap(_) => "PickMap",
        Step::FullyRandom { .. } => "FullyRandom",
        Step::AcceptCombination => "AcceptCombination",
        Step::RejectCombination => "RejectCombination",
        Step::BackOutOfWeapons => "BackOutOfWeapons",
        Step::Name(_) => "Name",
        Step::AbandonHere => "AbandonHere",
    }
}

fn run(
    steps: Vec<Step>,
    choice: &mut NewGameChoice,
    seed: u64,
) -> (Result<NewGameOutcome, crawl_core::NewGameError>, Vec<&'static str>) {
    let mut ui = ScriptedUi::new(steps);
    let saves = FakeSaves::default();
    let defaults = NewGameChoice::default();
    let mut rng = GameRng::new(seed);
    let outcome = choose_game(&mut ui, &saves, choice, &defaults, &mut rng);
    (outcome, ui.prompts_seen)
}

#[test]
fn plain_picked_flow() {
    let mut choice = NewGameChoice::default();
    let (outcome, _) = run(
        vec![
            Step::PickSpecies(Species::Minotaur),
            Step::PickJob(Job::Fighter),
            Step::PickWeapon(WeaponType::WarAxe),
            Step::Name("Urk"),
        ],
        &mut choice,
        1,
    );
    match outcome.unwrap() {
        NewGameOutcome::Play(def) => {
            assert_eq!(def.name, "Urk");
            assert_eq!(def.species, Species::Minotaur);
            assert_eq!(def.job, Job::Fighter);
            assert_eq!(def.weapon, Some(WeaponType::WarAxe));
            assert_eq!(def.map, None);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn human_fighter_random_weapon_is_melee() {
    for seed in 0..50 {
        let mut choice = NewGameChoice {
            species: Selection::Picked(Species::Human),
            job: Selection::Picked(Job::Fighter),
            weapon: Selection::RandomAny,
            name: "Edmund".into(),
            ..Default::default()
        };
        let (outcome, prompts) = run(vec![], &mut choice, seed);
        match outcome.unwrap() {
            NewGameOutcome::Play(def) => {
                let wp = def.weapon.expect("fighter must get a weapon");
                assert!(!wp.is_ranged(), "seed {seed}: got ranged {wp:?}");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        // Everything was preset; no prompt should have run.
        assert!(prompts.is_empty(), "unexpected prompts {prompts:?}");
    }
}

#[test]
fn felid_skips_the_weapon_stage() {
    let mut choice = NewGameChoice {
        species: Selection::Picked(Species::Felid),
        job: Selection::Picked(Job::Berserker),
        weapon: Selection::RandomAny,
        name: "Mogget".into(),
        ..Default::default()
    };
    let (outcome, prompts) = run(vec![], &mut choice, 3);
    match outcome.unwrap() {
        NewGameOutcome::Play(def) => assert_eq!(def.weapon, None),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(!prompts.contains(&"weapon"));
}

#[test]
fn fixed_kit_background_skips_the_weapon_stage() {
    let mut choice = NewGameChoice {
        species: Selection::Picked(Species::DeepElf),
        job: Selection::Picked(Job::Wizard),
        name: "Eloise".into(),
        ..Default::default()
    };
    let (outcome, prompts) = run(vec![], &mut choice, 3);
    match outcome.unwrap() {
        NewGameOutcome::Play(def) => assert_eq!(def.weapon, None),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(!prompts.contains(&"weapon"));
}

#[test]
fn fully_random_reroll_loops_until_accept() {
    // Name is preset and the trailing weapon step may go unused: whether the
    // rolled background opens the weapon menu depends on the roll.
    let mut choice = NewGameChoice {
        name: "Xom".into(),
        ..Default::default()
    };
    let (outcome, prompts) = run(
        vec![
            Step::FullyRandom { viable: false },
            Step::RejectCombination,
            Step::RejectCombination,
            Step::AcceptCombination,
            Step::RandomWeapon,
        ],
        &mut choice,
        7,
    );
    let def = match outcome.unwrap() {
        NewGameOutcome::Play(def) => def,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(prompts.iter().filter(|p| **p == "confirm").count(), 3);
    assert!(!crawl_core::restrictions::job_allowed(def.species, def.job).is_banned());
}

#[test]
fn weapon_backout_restarts_species_selection() {
    let mut choice = NewGameChoice::default();
    let (outcome, prompts) = run(
        vec![
            Step::PickSpecies(Species::Minotaur),
            Step::PickJob(Job::Fighter),
            Step::BackOutOfWeapons,
            Step::PickSpecies(Species::Troll),
            Step::PickJob(Job::Hunter),
            Step::RandomWeapon,
            Step::Name("Hrun"),
        ],
        &mut choice,
        11,
    );
    let def = match outcome.unwrap() {
        NewGameOutcome::Play(def) => def,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(def.species, Species::Troll);
    assert_eq!(def.job, Job::Hunter);
    assert_eq!(
        prompts,
        vec!["species", "job", "weapon", "species", "job", "weapon", "name"]
    );
}

#[test]
fn sprint_flow_includes_map_stage() {
    let mut choice = NewGameChoice {
        mode: GameMode::Sprint,
        ..Default::default()
    };
    let (outcome, prompts) = run(
        vec![
            Step::PickMap("sprint_iv"),
            Step::PickSpecies(Species::Merfolk),
            Step::PickJob(Job::Skald),
            Step::RandomWeapon,
            Step::Name("Nami"),
        ],
        &mut choice,
        13,
    );
    let def = match outcome.unwrap() {
        NewGameOutcome::Play(def) => def,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(def.mode, GameMode::Sprint);
    assert_eq!(def.map.as_deref(), Some("sprint_iv"));
    assert_eq!(prompts[0], "map");
}

#[test]
fn empty_name_falls_back_to_generated() {
    let mut choice = NewGameChoice {
        species: Selection::Picked(Species::Human),
        job: Selection::Picked(Job::Conjurer),
        ..Default::default()
    };
    let (outcome, _) = run(vec![Step::Name("")], &mut choice, 17);
    match outcome.unwrap() {
        NewGameOutcome::Play(def) => {
            assert!(!def.name.is_empty());
            assert!(crawl_core::name::is_good_name(&def.name));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn abandoning_the_species_menu_abandons_the_flow() {
    let mut choice = NewGameChoice::default();
    let (outcome, _) = run(vec![Step::AbandonHere], &mut choice, 19);
    assert_eq!(outcome.unwrap(), NewGameOutcome::Abandoned);
}

#[test]
fn tutorial_needs_no_character_prompts() {
    let mut choice = NewGameChoice {
        mode: GameMode::Tutorial,
        name: "Student".into(),
        ..Default::default()
    };
    let (outcome, prompts) = run(vec![Step::PickMap("tutorial_lesson1")], &mut choice, 23);
    let def = match outcome.unwrap() {
        NewGameOutcome::Play(def) => def,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(def.species, Species::Human);
    assert_eq!(def.job, Job::Fighter);
    assert_eq!(def.weapon, Some(WeaponType::Flail));
    assert_eq!(prompts, vec!["map"]);
}

#[test]
fn scripted_combos_bypass_prompts() {
    for seed in 0..20 {
        let mut choice = NewGameChoice {
            name: "Bot".into(),
            allowed_combos: vec!["MiBe".into(), "Troll Hunter.hand axe".into()],
            ..Default::default()
        };
        let (outcome, _) = run(vec![Step::RandomWeapon], &mut choice, seed);
        let def = match outcome.unwrap() {
            NewGameOutcome::Play(def) => def,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert!(
            (def.species, def.job) == (Species::Minotaur, Job::Berserker)
                || (def.species, def.job) == (Species::Troll, Job::Hunter),
            "seed {seed}: {:?} {:?}",
            def.species,
            def.job
        );
    }
}
