//! Grouped hotkey menu for the startup screens
//!
//! Entries are laid out in columns of titled groups, colored by their
//! compatibility with the current partial character. A shortcut row below
//! the columns carries the recommended/random/default actions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Compatibility coloring of one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// No counterpart chosen yet; nothing to judge against.
    Neutral,
    Recommended,
    Restricted,
}

#[derive(Debug, Clone)]
pub struct MenuEntry<A> {
    pub action: A,
    pub hotkey: char,
    pub label: String,
    /// One-liner shown below the columns while the entry is focused
    pub description: String,
    pub status: EntryStatus,
}

#[derive(Debug, Clone)]
struct Group<A> {
    title: &'static str,
    column: usize,
    entries: Vec<MenuEntry<A>>,
}

/// One line of the shortcut row; display-only lines carry no action.
#[derive(Debug, Clone)]
struct Shortcut<A> {
    action: Option<A>,
    hotkey: char,
    label: String,
}

/// A menu of grouped entries plus a shortcut row.
#[derive(Debug, Clone)]
pub struct GroupedMenu<A> {
    groups: Vec<Group<A>>,
    shortcuts: Vec<Shortcut<A>>,
    /// (group index, entry index) of the focused entry
    cursor: (usize, usize),
}

impl<A: Copy> GroupedMenu<A> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            shortcuts: Vec::new(),
            cursor: (0, 0),
        }
    }

    pub fn add_group(&mut self, title: &'static str, column: usize) {
        self.groups.push(Group {
            title,
            column,
            entries: Vec::new(),
        });
    }

    pub fn add_entry(&mut self, entry: MenuEntry<A>) {
        if let Some(group) = self.groups.last_mut() {
            group.entries.push(entry);
        }
    }

    pub fn add_shortcut(&mut self, hotkey: char, label: impl Into<String>, action: A) {
        self.shortcuts.push(Shortcut {
            action: Some(action),
            hotkey,
            label: label.into(),
        });
    }

    /// A shortcut-row line whose key is handled elsewhere (Tab, Space, Bksp).
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.shortcuts.push(Shortcut {
            action: None,
            hotkey: ' ',
            label: label.into(),
        });
    }

    /// Focus the most recently added entry.
    pub fn focus_last(&mut self) {
        if let Some((gi, group)) = self
            .groups
            .iter()
            .enumerate()
            .rev()
            .find(|(_, g)| !g.entries.is_empty())
        {
            self.cursor = (gi, group.entries.len() - 1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.entries.is_empty())
    }

    /// Action of the focused entry
    pub fn current(&self) -> Option<A> {
        self.current_entry().map(|e| e.action)
    }

    /// Description of the focused entry
    pub fn current_description(&self) -> Option<&str> {
        self.current_entry()
            .map(|e| e.description.as_str())
            .filter(|d| !d.is_empty())
    }

    fn current_entry(&self) -> Option<&MenuEntry<A>> {
        self.groups
            .get(self.cursor.0)
            .and_then(|g| g.entries.get(self.cursor.1))
    }

    /// Action bound to a hotkey, searching entries then shortcuts
    pub fn by_hotkey(&self, key: char) -> Option<A> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .find(|e| e.hotkey == key)
            .map(|e| e.action)
            .or_else(|| {
                self.shortcuts
                    .iter()
                    .find(|s| s.action.is_some() && s.hotkey == key)
                    .and_then(|s| s.action)
            })
    }

    pub fn move_down(&mut self) {
        let (gi, ei) = self.cursor;
        let Some(group) = self.groups.get(gi) else { return };
        if ei + 1 < group.entries.len() {
            self.cursor = (gi, ei + 1);
        } else if let Some(next) = self.next_group(gi) {
            self.cursor = (next, 0);
        }
    }

    pub fn move_up(&mut self) {
        let (gi, ei) = self.cursor;
        if ei > 0 {
            self.cursor = (gi, ei - 1);
        } else if let Some(prev) = self.prev_group(gi) {
            self.cursor = (prev, self.groups[prev].entries.len() - 1);
        }
    }

    /// Jump to the first entry of the next column.
    pub fn move_right(&mut self) {
        let column = self.groups.get(self.cursor.0).map_or(0, |g| g.column);
        if let Some(gi) = self
            .groups
            .iter()
            .position(|g| g.column > column && !g.entries.is_empty())
        {
            self.cursor = (gi, 0);
        }
    }

    /// Jump to the first entry of the previous column.
    pub fn move_left(&mut self) {
        let column = self.groups.get(self.cursor.0).map_or(0, |g| g.column);
        if let Some(gi) = self
            .groups
            .iter()
            .rposition(|g| g.column < column && !g.entries.is_empty())
        {
            self.cursor = (gi, 0);
        }
    }

    fn next_group(&self, from: usize) -> Option<usize> {
        (from + 1..self.groups.len()).find(|&gi| !self.groups[gi].entries.is_empty())
    }

    fn prev_group(&self, from: usize) -> Option<usize> {
        (0..from).rev().find(|&gi| !self.groups[gi].entries.is_empty())
    }

    fn entry_style(&self, status: EntryStatus, theme: &Theme) -> Style {
        let fg = match status {
            EntryStatus::Neutral => theme.entry_neutral,
            EntryStatus::Recommended => theme.entry_recommended,
            EntryStatus::Restricted => theme.entry_restricted,
        };
        Style::default().fg(fg)
    }

    /// Render the grouped columns into `area`, shortcuts underneath.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let columns: Vec<usize> = {
            let mut cols: Vec<usize> = self.groups.iter().map(|g| g.column).collect();
            cols.sort_unstable();
            cols.dedup();
            cols
        };
        let n = columns.len().max(1);

        let shortcut_height = (self.shortcuts.len() as u16).div_ceil(2) + 1;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(2),
                Constraint::Length(shortcut_height),
            ])
            .split(area);

        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, n as u32); n])
            .split(chunks[0]);

        for (ci, &column) in columns.iter().enumerate() {
            let mut lines: Vec<Line> = Vec::new();
            for (gi, group) in self.groups.iter().enumerate() {
                if group.column != column {
                    continue;
                }
                lines.push(Line::styled(
                    group.title,
                    Style::default().fg(theme.group_title),
                ));
                for (ei, entry) in group.entries.iter().enumerate() {
                    let mut style = self.entry_style(entry.status, theme);
                    if self.cursor == (gi, ei) {
                        style = style.bg(theme.cursor_bg).add_modifier(Modifier::BOLD);
                    }
                    lines.push(Line::from(Span::styled(
                        format!("{} - {}", entry.hotkey, entry.label),
                        style,
                    )));
                }
                lines.push(Line::default());
            }
            frame.render_widget(Paragraph::new(lines), col_areas[ci]);
        }

        if let Some(desc) = self.current_description() {
            frame.render_widget(
                Paragraph::new(Line::styled(desc, Style::default().fg(theme.text_dim))),
                chunks[1],
            );
        }

        // Shortcuts in two columns, dimmed.
        let mut left: Vec<Line> = Vec::new();
        let mut right: Vec<Line> = Vec::new();
        for (i, entry) in self.shortcuts.iter().enumerate() {
            let line = Line::styled(entry.label.clone(), Style::default().fg(theme.text_dim));
            if i % 2 == 0 {
                left.push(line);
            } else {
                right.push(line);
            }
        }
        let sc_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        frame.render_widget(Paragraph::new(left), sc_areas[0]);
        frame.render_widget(Paragraph::new(right), sc_areas[1]);
    }
}

impl<A: Copy> Default for GroupedMenu<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu letters run a-z then A-Z, like the original startup menus.
pub fn next_letter(letter: char) -> char {
    match letter {
        'z' => 'A',
        'Z' => 'a',
        c => (c as u8 + 1) as char,
    }
}
