//! Terminal color theme
//!
//! Adaptive palette for dark and light terminal backgrounds. Auto-detects
//! via the COLORFGBG env var, with a CRAWL_LIGHT_BG=1 override.

use ratatui::style::Color;

/// Color theme for the startup menus.
/// UI code uses theme roles instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, shortcut rows)
    pub text_dim: Color,
    /// Welcome banner
    pub banner: Color,
    /// Group titles in the species/background menus
    pub group_title: Color,
    /// Prompt questions ("What is your name today?")
    pub prompt: Color,
    /// Default border color
    pub border: Color,
    /// Menu entry with no compatibility information yet
    pub entry_neutral: Color,
    /// Recommended entry for the current partial character
    pub entry_recommended: Color,
    /// Legal but discouraged entry
    pub entry_restricted: Color,
    /// Cursor background
    pub cursor_bg: Color,
    /// Validation messages ("That's a silly name!")
    pub bad: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            banner: Color::Yellow,
            group_title: Color::LightBlue,
            prompt: Color::Cyan,
            border: Color::White,
            entry_neutral: Color::Gray,
            entry_recommended: Color::White,
            entry_restricted: Color::DarkGray,
            cursor_bg: Color::DarkGray,
            bad: Color::LightRed,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            banner: Color::Yellow,
            group_title: Color::Blue,
            prompt: Color::Blue,
            border: Color::DarkGray,
            entry_neutral: Color::DarkGray,
            entry_recommended: Color::Black,
            entry_restricted: Color::Gray,
            cursor_bg: Color::Gray,
            bad: Color::Red,
        }
    }

    /// Auto-detect terminal background and return the appropriate theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("CRAWL_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG format: "fg;bg", light backgrounds have bg index >= 7
        // (excluding 8, bright black).
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_text_is_white() {
        assert_eq!(Theme::dark().text, Color::White);
    }

    #[test]
    fn light_theme_text_is_black() {
        assert_eq!(Theme::light().text, Color::Black);
    }
}
