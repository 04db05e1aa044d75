//! Display preferences for the resume panel
//!
//! Preferences live for the lifetime of the screen. They are never written
//! to disk and never interact with the fetch lifecycle.

use std::fmt;

/// Smallest selectable body font size
pub const MIN_FONT_SIZE: u16 = 12;
/// Largest selectable body font size
pub const MAX_FONT_SIZE: u16 = 24;
/// Initial body font size
pub const DEFAULT_FONT_SIZE: u16 = 16;

/// User-adjustable display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreferences {
    font_size: u16,
    pub font_family: FontFamily,
    pub background: BackgroundColor,
    pub text_color: TextColor,
}

impl DisplayPreferences {
    /// Current body font size, always within [MIN_FONT_SIZE, MAX_FONT_SIZE]
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Set the body font size, clamping to the allowed range
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Step the font size up one point
    pub fn increase_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_add(1));
    }

    /// Step the font size down one point
    pub fn decrease_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_sub(1));
    }
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            background: BackgroundColor::default(),
            text_color: TextColor::default(),
        }
    }
}

/// Font family choices offered by the family picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    Default,
    Serif,
    Monospace,
}

impl FontFamily {
    const ALL: [FontFamily; 3] = [FontFamily::Default, FontFamily::Serif, FontFamily::Monospace];

    /// Next option, wrapping at the end
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous option, wrapping at the start
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Default => write!(f, "Default"),
            FontFamily::Serif => write!(f, "Serif"),
            FontFamily::Monospace => write!(f, "Monospace"),
        }
    }
}

/// Background color choices for the resume panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackgroundColor {
    #[default]
    White,
    LightGray,
    Beige,
    LightRed,
}

impl BackgroundColor {
    const ALL: [BackgroundColor; 4] = [
        BackgroundColor::White,
        BackgroundColor::LightGray,
        BackgroundColor::Beige,
        BackgroundColor::LightRed,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }

    /// RGB value for the rendering surface
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BackgroundColor::White => (255, 255, 255),
            BackgroundColor::LightGray => (240, 240, 240),
            BackgroundColor::Beige => (253, 245, 230),
            BackgroundColor::LightRed => (255, 127, 127),
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundColor::White => write!(f, "White"),
            BackgroundColor::LightGray => write!(f, "Light Gray"),
            BackgroundColor::Beige => write!(f, "Beige"),
            BackgroundColor::LightRed => write!(f, "Light Red"),
        }
    }
}

/// Body text color choices for the resume panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextColor {
    #[default]
    Black,
    DarkGray,
    Blue,
    DarkRed,
    Teal,
}

impl TextColor {
    const ALL: [TextColor; 5] = [
        TextColor::Black,
        TextColor::DarkGray,
        TextColor::Blue,
        TextColor::DarkRed,
        TextColor::Teal,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }

    /// RGB value for the rendering surface
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            TextColor::Black => (0, 0, 0),
            TextColor::DarkGray => (51, 51, 51),
            TextColor::Blue => (0, 0, 255),
            TextColor::DarkRed => (139, 0, 0),
            TextColor::Teal => (0, 128, 128),
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::Black => write!(f, "Black"),
            TextColor::DarkGray => write!(f, "Dark Gray"),
            TextColor::Blue => write!(f, "Blue"),
            TextColor::DarkRed => write!(f, "Dark Red"),
            TextColor::Teal => write!(f, "Teal"),
        }
    }
}

/// Step through a fixed option list with wraparound
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: isize) -> T {
    let len = options.len() as isize;
    let idx = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[((idx + step).rem_euclid(len)) as usize]
}
