//! Terminal implementation of the new-game prompts
//!
//! Each prompt runs its own small event loop: draw, read one key, update,
//! until its part of the choice record is decided. Terminal I/O failures
//! surface as a quit signal so the flow unwinds cleanly.

use std::io::Stdout;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crawl_core::flow::{mark_fully_random, set_default_choice};
use crawl_core::groups::{JOB_GROUPS, SPECIES_GROUPS};
use crawl_core::maps::MapDef;
use crawl_core::name::{MAX_NAME_LENGTH, is_good_name, random_name, save_filename};
use crawl_core::resolver::{WeaponChoice, fixup_weapon};
use crawl_core::restrictions::{
    CharChoiceRestriction, job_allowed, job_recommends, species_allowed, species_recommends,
};
use crawl_core::ui::{NamePromptExit, NewGameUi, PromptExit, RerollDecision, SaveRegistry};
use crawl_core::{CharacterBuild, GameRng, Job, NewGameChoice, Selection, Species, WeaponType};

use crate::menu::{EntryStatus, GroupedMenu, MenuEntry, next_letter};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
enum CharAction {
    PickSpecies(Species),
    PickJob(Job),
    Recommended,
    Random,
    RecommendedChar,
    RandomChar,
    Aptitudes,
    Help,
}

#[derive(Debug, Clone, Copy)]
enum WeaponAction {
    Pick(WeaponType),
    Recommended,
    Random,
    Aptitudes,
    Help,
}

#[derive(Debug, Clone, Copy)]
enum MapAction {
    Pick(&'static str),
    Random,
    Aptitudes,
    Help,
}

/// Which of the two character menus is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharMenuKind {
    Species,
    Job,
}

/// The ratatui front end for the selection flow
pub struct TuiNewGame {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiNewGame {
    pub fn new(terminal: Terminal<CrosstermBackend<Stdout>>, theme: Theme) -> Self {
        Self { terminal, theme }
    }

    /// Hand the terminal back for teardown.
    pub fn into_terminal(self) -> Terminal<CrosstermBackend<Stdout>> {
        self.terminal
    }

    /// Read the next key event; `None` means the terminal is gone.
    fn next_key(&mut self) -> Option<KeyEvent> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => return Some(key),
                // Resize redraws on the caller's next pass anyway.
                Ok(_) => continue,
                Err(_) => return None,
            }
        }
    }

    fn is_quit_key(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('X')
            || (key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Modal text overlay; returns false if the terminal failed.
    fn show_overlay(&mut self, title: &str, body: &str) -> bool {
        loop {
            let theme = self.theme;
            let drew = self
                .terminal
                .draw(|frame| {
                    let area = centered_rect(70, 80, frame.area());
                    frame.render_widget(Clear, area);
                    let block = Block::default()
                        .title(title.to_string())
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border));
                    let paragraph = Paragraph::new(body.to_string())
                        .block(block)
                        .style(Style::default().fg(theme.text))
                        .wrap(Wrap { trim: false });
                    frame.render_widget(paragraph, area);
                })
                .is_ok();
            if !drew {
                return false;
            }
            match self.next_key() {
                Some(key) => match key.code {
                    KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Enter => return true,
                    _ => {}
                },
                None => return false,
            }
        }
    }

    fn show_help(&mut self) -> bool {
        self.show_overlay(
            "Help",
            "Pick an entry with its letter, or move with the arrow keys and\n\
             press Enter.\n\n\
             Shortcuts:\n\
               +    Recommended pick for the current menu\n\
               *    Random pick for the current menu\n\
               #    Recommended character (reroll until accepted)\n\
               !    Random character (reroll until accepted)\n\
               Tab  Your previous choice\n\
               %    List aptitudes\n\
             Space  Switch to the other menu\n\
              Bksp  Clear this menu's pick\n\
               Esc  Cancel character selection\n\
                 X  Quit the game\n\n\
             Press Escape or Space to close.",
        )
    }

    fn show_aptitudes(&mut self, build: &CharacterBuild) -> bool {
        let mut body = String::new();
        match (build.species, build.job) {
            (Some(sp), _) => {
                body.push_str(&format!("Recommended backgrounds for {}:\n\n", sp.name()));
                for job in species_recommends(sp) {
                    body.push_str(&format!("  {}\n", job.name()));
                }
            }
            (None, Some(job)) => {
                body.push_str(&format!("Recommended species for {}:\n\n", job.name()));
                for sp in job_recommends(job) {
                    body.push_str(&format!("  {}\n", sp.name()));
                }
            }
            (None, None) => {
                body.push_str("Recommended backgrounds by species:\n\n");
                for group in SPECIES_GROUPS {
                    for &sp in group.members {
                        let jobs: Vec<&str> =
                            species_recommends(sp).iter().map(|j| j.name()).collect();
                        body.push_str(&format!("  {:<14} {}\n", sp.name(), jobs.join(", ")));
                    }
                }
            }
        }
        body.push_str("\nPress Escape or Space to close.");
        self.show_overlay("Aptitudes", &body)
    }

    fn species_menu(
        &self,
        build: &CharacterBuild,
        defaults: &NewGameChoice,
    ) -> GroupedMenu<CharAction> {
        let mut menu = GroupedMenu::new();
        let mut letter = 'a';
        for group in SPECIES_GROUPS {
            let visible: Vec<Species> = group
                .members
                .iter()
                .copied()
                .filter(|&sp| match build.job {
                    Some(job) => !species_allowed(job, sp).is_banned(),
                    None => true,
                })
                .collect();
            if visible.is_empty() {
                continue;
            }
            menu.add_group(group.name, group.position.0 as usize);
            for sp in visible {
                let status = match build.job {
                    None => EntryStatus::Neutral,
                    Some(job) => match species_allowed(job, sp) {
                        CharChoiceRestriction::Unrestricted => EntryStatus::Recommended,
                        _ => EntryStatus::Restricted,
                    },
                };
                menu.add_entry(MenuEntry {
                    action: CharAction::PickSpecies(sp),
                    hotkey: letter,
                    label: sp.name().to_string(),
                    description: sp.blurb().to_string(),
                    status,
                });
                if defaults.species.picked() == Some(sp) {
                    menu.focus_last();
                }
                letter = next_letter(letter);
            }
        }
        self.add_char_shortcuts(&mut menu, CharMenuKind::Species, build, defaults);
        menu
    }

    fn job_menu(&self, build: &CharacterBuild, defaults: &NewGameChoice) -> GroupedMenu<CharAction> {
        let mut menu = GroupedMenu::new();
        let mut letter = 'a';
        for group in JOB_GROUPS {
            let visible: Vec<Job> = group
                .members
                .iter()
                .copied()
                .filter(|&job| match build.species {
                    Some(sp) => !job_allowed(sp, job).is_banned(),
                    None => true,
                })
                .collect();
            if visible.is_empty() {
                continue;
            }
            menu.add_group(group.name, group.position.0 as usize);
            for job in visible {
                let status = match build.species {
                    None => EntryStatus::Neutral,
                    Some(sp) => match job_allowed(sp, job) {
                        CharChoiceRestriction::Unrestricted => EntryStatus::Recommended,
                        _ => EntryStatus::Restricted,
                    },
                };
                menu.add_entry(MenuEntry {
                    action: CharAction::PickJob(job),
                    hotkey: letter,
                    label: job.name().to_string(),
                    description: job.blurb().to_string(),
                    status,
                });
                if defaults.job.picked() == Some(job) {
                    menu.focus_last();
                }
                letter = next_letter(letter);
            }
        }
        self.add_char_shortcuts(&mut menu, CharMenuKind::Job, build, defaults);
        menu
    }

    fn add_char_shortcuts(
        &self,
        menu: &mut GroupedMenu<CharAction>,
        kind: CharMenuKind,
        build: &CharacterBuild,
        defaults: &NewGameChoice,
    ) {
        let (this, other) = match kind {
            CharMenuKind::Species => ("species", "background"),
            CharMenuKind::Job => ("background", "species"),
        };
        let other_known = match kind {
            CharMenuKind::Species => build.job.is_some(),
            CharMenuKind::Job => build.species.is_some(),
        };

        menu.add_shortcut('+', format!("+ - Recommended {this}"), CharAction::Recommended);
        menu.add_shortcut('*', format!("* - Random {this}"), CharAction::Random);
        menu.add_shortcut('#', "# - Recommended character", CharAction::RecommendedChar);
        menu.add_shortcut('!', "! - Random character", CharAction::RandomChar);
        menu.add_shortcut('%', "% - List aptitudes", CharAction::Aptitudes);
        menu.add_shortcut('?', "? - Help", CharAction::Help);
        if other_known {
            menu.add_label(format!("Space - Change {other}"));
        } else {
            menu.add_label(format!("Space - Pick {other} first"));
        }
        if defaults.char_defined() {
            menu.add_label(format!("Tab - {}", defaults.description()));
        }
    }

    fn draw_menu<A: Copy>(
        &mut self,
        banner: &str,
        instruction: &str,
        menu: &GroupedMenu<A>,
    ) -> bool {
        let theme = self.theme;
        self.terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(2), Constraint::Min(4)])
                    .split(frame.area());
                let header = Line::from(vec![
                    Span::styled(banner.to_string(), Style::default().fg(theme.banner)),
                    Span::styled(
                        format!(" {instruction}"),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                ]);
                frame.render_widget(Paragraph::new(header), chunks[0]);
                menu.render(frame, chunks[1], &theme);
            })
            .is_ok()
    }

    /// Shared key handling for the species and background menus.
    fn run_char_menu(
        &mut self,
        kind: CharMenuKind,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
    ) -> PromptExit {
        let mut menu = match kind {
            CharMenuKind::Species => self.species_menu(build, defaults),
            CharMenuKind::Job => self.job_menu(build, defaults),
        };
        let instruction = match kind {
            CharMenuKind::Species => "Please select your species.",
            CharMenuKind::Job => "Please select your background.",
        };

        loop {
            if !self.draw_menu(&build.welcome_message(), instruction, &menu) {
                return PromptExit::Quit;
            }
            let Some(key) = self.next_key() else {
                return PromptExit::Quit;
            };

            if Self::is_quit_key(&key) {
                return PromptExit::Quit;
            }

            let action = match key.code {
                KeyCode::Esc => return PromptExit::Abandon,
                KeyCode::Char(' ') => {
                    // Switch to (or pick first) the other menu.
                    build.clear_character();
                    choice.species = Selection::Unset;
                    choice.job = Selection::Unset;
                    return PromptExit::Done;
                }
                KeyCode::Backspace => {
                    match kind {
                        CharMenuKind::Species => {
                            build.species = None;
                            choice.species = Selection::Unset;
                        }
                        CharMenuKind::Job => {
                            build.job = None;
                            choice.job = Selection::Unset;
                        }
                    }
                    menu = match kind {
                        CharMenuKind::Species => self.species_menu(build, defaults),
                        CharMenuKind::Job => self.job_menu(build, defaults),
                    };
                    continue;
                }
                KeyCode::Tab => {
                    if defaults.char_defined() {
                        set_default_choice(build, choice, defaults);
                        return PromptExit::Done;
                    }
                    continue;
                }
                KeyCode::Up => {
                    menu.move_up();
                    continue;
                }
                KeyCode::Down => {
                    menu.move_down();
                    continue;
                }
                KeyCode::Left => {
                    menu.move_left();
                    continue;
                }
                KeyCode::Right => {
                    menu.move_right();
                    continue;
                }
                KeyCode::Enter => menu.current(),
                KeyCode::Char(c) => menu.by_hotkey(c),
                _ => None,
            };

            let Some(action) = action else { continue };
            match action {
                CharAction::PickSpecies(sp) => {
                    choice.species = Selection::Picked(sp);
                    return PromptExit::Done;
                }
                CharAction::PickJob(job) => {
                    choice.job = Selection::Picked(job);
                    return PromptExit::Done;
                }
                CharAction::Recommended => {
                    // With the counterpart fixed this is a real recommendation,
                    // otherwise just a random pick.
                    match kind {
                        CharMenuKind::Species => {
                            choice.species = if build.job.is_some() {
                                Selection::RandomViable
                            } else {
                                Selection::RandomAny
                            };
                        }
                        CharMenuKind::Job => {
                            choice.job = if build.species.is_some() {
                                Selection::RandomViable
                            } else {
                                Selection::RandomAny
                            };
                        }
                    }
                    return PromptExit::Done;
                }
                CharAction::Random => {
                    match kind {
                        CharMenuKind::Species => choice.species = Selection::RandomAny,
                        CharMenuKind::Job => choice.job = Selection::RandomAny,
                    }
                    return PromptExit::Done;
                }
                CharAction::RecommendedChar => {
                    mark_fully_random(build, choice, true);
                    return PromptExit::Done;
                }
                CharAction::RandomChar => {
                    mark_fully_random(build, choice, false);
                    return PromptExit::Done;
                }
                CharAction::Aptitudes => {
                    if !self.show_aptitudes(build) {
                        return PromptExit::Quit;
                    }
                }
                CharAction::Help => {
                    if !self.show_help() {
                        return PromptExit::Quit;
                    }
                }
            }
        }
    }
}

impl NewGameUi for TuiNewGame {
    fn prompt_species(
        &mut self,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
    ) -> PromptExit {
        self.run_char_menu(CharMenuKind::Species, build, choice, defaults)
    }

    fn prompt_job(
        &mut self,
        build: &mut CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
    ) -> PromptExit {
        self.run_char_menu(CharMenuKind::Job, build, choice, defaults)
    }

    fn prompt_weapon(
        &mut self,
        build: &CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
        weapons: &[WeaponChoice],
    ) -> PromptExit {
        let species = build.species.unwrap_or_default();
        let default_weapon = fixup_weapon(defaults.weapon, weapons);

        let mut menu: GroupedMenu<WeaponAction> = GroupedMenu::new();
        menu.add_group("You have a choice of weapons:", 0);
        let mut letter = 'a';
        for &(wp, restriction) in weapons {
            menu.add_entry(MenuEntry {
                action: WeaponAction::Pick(wp),
                hotkey: letter,
                label: wp.menu_label(species),
                description: String::new(),
                status: if restriction == CharChoiceRestriction::Unrestricted {
                    EntryStatus::Recommended
                } else {
                    EntryStatus::Restricted
                },
            });
            if default_weapon.picked() == Some(wp) {
                menu.focus_last();
            }
            letter = next_letter(letter);
        }
        menu.add_shortcut('+', "+ - Recommended random choice", WeaponAction::Recommended);
        menu.add_shortcut('*', "* - Random weapon", WeaponAction::Random);
        menu.add_shortcut('%', "% - List aptitudes", WeaponAction::Aptitudes);
        menu.add_shortcut('?', "? - Help", WeaponAction::Help);
        menu.add_label("Bksp - Return to character menu");
        match default_weapon {
            Selection::Unset => {}
            Selection::RandomAny => menu.add_label("Tab - Random"),
            Selection::RandomViable => menu.add_label("Tab - Recommended"),
            Selection::Picked(wp) => {
                menu.add_label(format!("Tab - {}", wp.menu_label(species)));
            }
        }

        loop {
            if !self.draw_menu(&build.welcome_message(), "Please select your weapon.", &menu) {
                return PromptExit::Quit;
            }
            let Some(key) = self.next_key() else {
                return PromptExit::Quit;
            };
            if Self::is_quit_key(&key) {
                return PromptExit::Quit;
            }

            let action = match key.code {
                KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Backspace => {
                    return PromptExit::Back;
                }
                KeyCode::Tab => {
                    if !default_weapon.is_unset() {
                        choice.weapon = default_weapon;
                        return PromptExit::Done;
                    }
                    continue;
                }
                KeyCode::Up => {
                    menu.move_up();
                    continue;
                }
                KeyCode::Down => {
                    menu.move_down();
                    continue;
                }
                KeyCode::Enter => menu.current(),
                KeyCode::Char(c) => menu.by_hotkey(c),
                _ => None,
            };

            let Some(action) = action else { continue };
            match action {
                WeaponAction::Pick(wp) => {
                    choice.weapon = Selection::Picked(wp);
                    return PromptExit::Done;
                }
                WeaponAction::Recommended => {
                    choice.weapon = Selection::RandomViable;
                    return PromptExit::Done;
                }
                WeaponAction::Random => {
                    choice.weapon = Selection::RandomAny;
                    return PromptExit::Done;
                }
                WeaponAction::Aptitudes => {
                    if !self.show_aptitudes(build) {
                        return PromptExit::Quit;
                    }
                }
                WeaponAction::Help => {
                    if !self.show_help() {
                        return PromptExit::Quit;
                    }
                }
            }
        }
    }

    fn prompt_map(
        &mut self,
        build: &CharacterBuild,
        choice: &mut NewGameChoice,
        defaults: &NewGameChoice,
        maps: &[&'static MapDef],
    ) -> PromptExit {
        let mut menu: GroupedMenu<MapAction> = GroupedMenu::new();
        let title = if build.mode == crawl_core::GameMode::Tutorial {
            "You have a choice of lessons:"
        } else {
            "You have a choice of maps:"
        };
        menu.add_group(title, 0);
        let mut letter = 'a';
        for map in maps {
            menu.add_entry(MenuEntry {
                action: MapAction::Pick(map.name),
                hotkey: letter,
                label: map.description.to_string(),
                description: String::new(),
                status: EntryStatus::Neutral,
            });
            if defaults.map.as_picked().map(String::as_str) == Some(map.name) {
                menu.focus_last();
            }
            letter = next_letter(letter);
        }
        menu.add_shortcut('*', "* - Random map", MapAction::Random);
        menu.add_shortcut('%', "% - List aptitudes", MapAction::Aptitudes);
        menu.add_shortcut('?', "? - Help", MapAction::Help);
        let tab_default = defaults.map.as_picked().is_some() && defaults.char_defined();
        if let Some(map) = defaults.map.as_picked()
            && tab_default
        {
            menu.add_label(format!("Tab - {map}"));
        }

        loop {
            if !self.draw_menu(&build.welcome_message(), "Please select a map.", &menu) {
                return PromptExit::Quit;
            }
            let Some(key) = self.next_key() else {
                return PromptExit::Quit;
            };
            if Self::is_quit_key(&key) {
                return PromptExit::Quit;
            }

            let action = match key.code {
                KeyCode::Esc => return PromptExit::Abandon,
                // Close and let random resolution fill the map in.
                KeyCode::Char(' ') => return PromptExit::Done,
                KeyCode::Tab => {
                    if tab_default {
                        // Previous map and character in one go.
                        let name = std::mem::take(&mut choice.name);
                        let mode = choice.mode;
                        *choice = defaults.clone();
                        choice.name = name;
                        choice.mode = mode;
                        return PromptExit::Done;
                    }
                    continue;
                }
                KeyCode::Up => {
                    menu.move_up();
                    continue;
                }
                KeyCode::Down => {
                    menu.move_down();
                    continue;
                }
                KeyCode::Enter => menu.current(),
                KeyCode::Char(c) => menu.by_hotkey(c),
                _ => None,
            };

            let Some(action) = action else { continue };
            match action {
                MapAction::Pick(name) => {
                    choice.map = Selection::Picked(name.to_string());
                    return PromptExit::Done;
                }
                MapAction::Random => {
                    choice.map = Selection::RandomAny;
                    return PromptExit::Done;
                }
                MapAction::Aptitudes => {
                    if !self.show_aptitudes(build) {
                        return PromptExit::Quit;
                    }
                }
                MapAction::Help => {
                    if !self.show_help() {
                        return PromptExit::Quit;
                    }
                }
            }
        }
    }

    fn prompt_name(
        &mut self,
        build: &CharacterBuild,
        choice: &mut NewGameChoice,
        saves: &dyn SaveRegistry,
        rng: &mut GameRng,
    ) -> NamePromptExit {
        let mut buf = String::new();
        let mut message: Option<String> = None;
        let mut overwrite_prompt = false;

        let combo = match (build.species, build.job) {
            (Some(sp), Some(job)) => {
                format!("You are {} {} {}.", sp.article(), sp.name(), job.name())
            }
            _ => "You are almost ready.".to_string(),
        };

        loop {
            let theme = self.theme;
            let drew = self
                .terminal
                .draw(|frame| {
                    let area = centered_rect(60, 40, frame.area());
                    frame.render_widget(Clear, area);
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border));
                    let inner = block.inner(area);
                    frame.render_widget(block, area);

                    let mut lines = vec![
                        Line::styled(combo.clone(), Style::default().fg(theme.banner)),
                        Line::default(),
                        Line::from(vec![
                            Span::styled(
                                "What is your name today? ",
                                Style::default().fg(theme.prompt),
                            ),
                            Span::styled(format!("{buf}_"), Style::default().fg(theme.text)),
                        ]),
                        Line::default(),
                        Line::styled(
                            "Leave blank for a random name, or use Escape to cancel this character.",
                            Style::default().fg(theme.text_dim),
                        ),
                    ];
                    if overwrite_prompt {
                        lines.push(Line::default());
                        lines.push(Line::styled(
                            "A game is already saved under that name. Overwrite? [Y/n], or l to load it",
                            Style::default().fg(theme.bad),
                        ));
                    } else if let Some(msg) = &message {
                        lines.push(Line::default());
                        lines.push(Line::styled(msg.clone(), Style::default().fg(theme.bad)));
                    }
                    frame.render_widget(Paragraph::new(lines), inner);
                })
                .is_ok();
            if !drew {
                return NamePromptExit::Quit;
            }

            let Some(key) = self.next_key() else {
                return NamePromptExit::Quit;
            };

            if overwrite_prompt {
                match key.code {
                    KeyCode::Char('Y') => {
                        choice.name = buf.trim().to_string();
                        return NamePromptExit::Named;
                    }
                    KeyCode::Char('l') | KeyCode::Char('L') => {
                        choice.name = buf.trim().to_string();
                        return NamePromptExit::LoadExisting;
                    }
                    _ => {
                        overwrite_prompt = false;
                    }
                }
                continue;
            }

            match key.code {
                KeyCode::Esc => return NamePromptExit::Abandon,
                KeyCode::Backspace => {
                    buf.pop();
                    message = None;
                }
                KeyCode::Enter => {
                    let mut name = buf.trim().to_string();
                    if name.is_empty() {
                        match random_name(saves, rng) {
                            Some(generated) => name = generated,
                            None => {
                                message =
                                    Some("Could not come up with a name; type one.".to_string());
                                continue;
                            }
                        }
                    }
                    if !is_good_name(&name) {
                        message = Some("That's a silly name!".to_string());
                        continue;
                    }
                    buf = name.clone();
                    if saves.save_exists(&save_filename(&name)) {
                        overwrite_prompt = true;
                        continue;
                    }
                    choice.name = name;
                    return NamePromptExit::Named;
                }
                KeyCode::Char(c) if buf.len() < MAX_NAME_LENGTH => {
                    buf.push(c);
                    message = None;
                }
                _ => {}
            }
        }
    }

    fn confirm_combination(&mut self, build: &CharacterBuild) -> RerollDecision {
        let combo = match (build.species, build.job) {
            (Some(sp), Some(job)) => {
                format!("You are {} {} {}.", sp.article(), sp.name(), job.name())
            }
            _ => "You are nothing in particular.".to_string(),
        };

        loop {
            let theme = self.theme;
            let drew = self
                .terminal
                .draw(|frame| {
                    let area = centered_rect(50, 25, frame.area());
                    frame.render_widget(Clear, area);
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border));
                    let inner = block.inner(area);
                    frame.render_widget(block, area);
                    let lines = vec![
                        Line::styled(combo.clone(), Style::default().fg(theme.text)),
                        Line::default(),
                        Line::styled(
                            "Do you want to play this combination? (ynq) [y]",
                            Style::default().fg(theme.prompt),
                        ),
                    ];
                    frame.render_widget(Paragraph::new(lines), inner);
                })
                .is_ok();
            if !drew {
                return RerollDecision::Quit;
            }

            let Some(key) = self.next_key() else {
                return RerollDecision::Quit;
            };
            if Self::is_quit_key(&key) {
                return RerollDecision::Quit;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    return RerollDecision::Accept;
                }
                KeyCode::Char('n')
                | KeyCode::Char('N')
                | KeyCode::Tab
                | KeyCode::Char('!')
                | KeyCode::Char('#') => return RerollDecision::Reroll,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return RerollDecision::Abandon;
                }
                _ => {}
            }
        }
    }
}

/// Centered sub-rectangle taking the given percentages of `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
