//! Theme system for the UI chrome
//!
//! These palettes style the frame around the content: header, borders, key
//! hints and the preference sidebar. The resume text itself always follows
//! the user's display preferences, not the theme.

use ratatui::prelude::Color;

// Re-export ThemeName from core
pub use resume_view_core::ThemeName;

/// Chrome color palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color (titles, selection markers, key hints)
    pub accent: Color,
    /// Main chrome text color
    pub text: Color,
    /// Subtle/dimmed text color
    pub subtle: Color,
    /// Border color
    pub border: Color,
    /// Background for the selected preference row
    pub selection_bg: Color,
}

impl Theme {
    /// Warm ivory-and-ink default
    pub fn paper_theme() -> Self {
        Self {
            accent: Color::Rgb(196, 130, 61),       // aged-paper amber
            text: Color::Rgb(232, 227, 214),        // ivory
            subtle: Color::Rgb(148, 141, 125),      // faded ink
            border: Color::Rgb(108, 101, 88),       // dark sepia
            selection_bg: Color::Rgb(56, 52, 44),   // candlelight shadow
        }
    }

    /// Cool blue palette
    pub fn ocean_theme() -> Self {
        Self {
            accent: Color::Rgb(100, 180, 255),      // ocean blue
            text: Color::Rgb(200, 220, 240),        // light blue-white
            subtle: Color::Rgb(120, 150, 180),      // dimmed blue-gray
            border: Color::Rgb(80, 120, 160),       // mid blue
            selection_bg: Color::Rgb(40, 60, 90),   // selection blue
        }
    }

    /// Grayscale palette
    pub fn monochrome_theme() -> Self {
        Self {
            accent: Color::White,
            text: Color::Rgb(220, 220, 220),        // bright gray
            subtle: Color::Rgb(128, 128, 128),      // mid gray
            border: Color::Rgb(100, 100, 100),      // border gray
            selection_bg: Color::Rgb(60, 60, 60),   // selection gray
        }
    }

    /// Get theme by name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Paper => Self::paper_theme(),
            ThemeName::Ocean => Self::ocean_theme(),
            ThemeName::Monochrome => Self::monochrome_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper_theme()
    }
}

/// Global theme instance for easy access
/// This uses thread-local storage for safety
use std::cell::RefCell;

thread_local! {
    static CURRENT_THEME: RefCell<Theme> = RefCell::new(Theme::default());
}

/// Set the current global theme
pub fn set_theme(name: ThemeName) {
    CURRENT_THEME.with(|t| {
        *t.borrow_mut() = Theme::from_name(name);
    });
}

/// Get the current accent color
pub fn accent() -> Color {
    CURRENT_THEME.with(|t| t.borrow().accent)
}

/// Get the current chrome text color
pub fn text() -> Color {
    CURRENT_THEME.with(|t| t.borrow().text)
}

/// Get the current subtle text color
pub fn subtle() -> Color {
    CURRENT_THEME.with(|t| t.borrow().subtle)
}

/// Get the current border color
pub fn border() -> Color {
    CURRENT_THEME.with(|t| t.borrow().border)
}

/// Get the current selection background color
pub fn selection_bg() -> Color {
    CURRENT_THEME.with(|t| t.borrow().selection_bg)
}
