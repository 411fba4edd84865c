//! crawl-tui: ratatui front end for the character creation flow

pub mod app;
pub mod menu;
pub mod theme;

pub use app::TuiNewGame;
pub use theme::Theme;
