//! Character creation for a Crawl-like roguelike
//!
//! Runs the selection flow in the terminal and prints the resolved
//! character. Command-line arguments pre-fill the choice record; anything
//! left open is prompted for.

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crawl_core::defaults::{DEFAULTS_FILE, default_config_dir, load_defaults, save_defaults};
use crawl_core::flow::choose_game;
use crawl_core::ui::DirSaveRegistry;
use crawl_core::{GameMode, GameRng, Job, NewGameChoice, NewGameOutcome, Selection, Species};

/// Character creation for a Crawl-like roguelike
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(author, version, about = "Choose your next adventurer", long_about = None)]
struct Args {
    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Species (name or abbreviation, e.g. Minotaur or Mi)
    #[arg(short = 's', long = "species")]
    species: Option<String>,

    /// Background (name or abbreviation, e.g. Berserker or Be)
    #[arg(short = 'j', long = "job")]
    job: Option<String>,

    /// Game mode: normal, sprint or tutorial
    #[arg(short = 'm', long = "mode", default_value = "normal")]
    mode: String,

    /// Starting map name (sprint/tutorial only)
    #[arg(long = "map")]
    map: Option<String>,

    /// Fully random character (reroll until accepted)
    #[arg(long = "random")]
    random: bool,

    /// Recommended random character (reroll until accepted)
    #[arg(long = "recommended")]
    recommended: bool,

    /// RNG seed, for reproducible selection
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Ignore the saved defaults file
    #[arg(long = "no-defaults")]
    no_defaults: bool,
}

fn choice_from_args(args: &Args) -> NewGameChoice {
    let mut choice = NewGameChoice {
        name: args.name.clone().unwrap_or_default(),
        mode: match args.mode.to_lowercase().as_str() {
            "sprint" => GameMode::Sprint,
            "tutorial" => GameMode::Tutorial,
            _ => GameMode::Normal,
        },
        ..Default::default()
    };

    if let Some(ref s) = args.species {
        if let Some(sp) = Species::from_abbrev(s).or_else(|| Species::from_name(s)) {
            choice.species = Selection::Picked(sp);
        }
    }
    if let Some(ref s) = args.job {
        if let Some(job) = Job::from_abbrev(s).or_else(|| Job::from_name(s)) {
            choice.job = Selection::Picked(job);
        }
    }
    if let Some(ref map) = args.map {
        choice.map = Selection::Picked(map.clone());
    }

    if args.random || args.recommended {
        choice.fully_random = true;
        let want = args.recommended;
        choice.species = if want {
            Selection::RandomViable
        } else {
            Selection::RandomAny
        };
        choice.job = if want {
            Selection::RandomViable
        } else {
            Selection::RandomAny
        };
    }

    choice
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let defaults_path = default_config_dir().join(DEFAULTS_FILE);
    let defaults = if args.no_defaults {
        NewGameChoice::default()
    } else {
        load_defaults(&defaults_path)
    };

    let mut choice = choice_from_args(&args);
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let saves = DirSaveRegistry::default();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut ui = crawl_tui::TuiNewGame::new(terminal, crawl_tui::Theme::detect());
    let outcome = choose_game(&mut ui, &saves, &mut choice, &defaults, &mut rng);

    // Restore terminal before reporting anything
    let mut terminal = ui.into_terminal();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match outcome {
        Ok(NewGameOutcome::Play(def)) => {
            if let Err(e) = save_defaults(&defaults_path, &choice) {
                eprintln!("Could not save newgame defaults: {e}");
            }
            println!(
                "Welcome, {} the {} {}.",
                def.name,
                def.species.name(),
                def.job.name()
            );
            if let Some(wp) = def.weapon {
                println!("Starting weapon: {}", wp.name());
            }
            if let Some(map) = def.map {
                println!("Starting map: {map} ({})", def.mode);
            }
        }
        Ok(NewGameOutcome::LoadExisting(name)) => {
            println!("Loading the existing game of {name}.");
        }
        Ok(NewGameOutcome::Abandoned) => {
            println!("Character selection cancelled.");
        }
        Ok(NewGameOutcome::QuitGame) => {
            println!("Goodbye!");
        }
        Err(e) => {
            eprintln!("crawl: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
