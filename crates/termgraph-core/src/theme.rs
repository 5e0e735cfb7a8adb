// File: crates/termgraph-core/src/theme.rs
// Summary: ANSI colour palette for bar segments and heatmap cells.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Bright foreground colours, stored as their SGR codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    Black = 90,
    Red = 91,
    Green = 92,
    Yellow = 93,
    Blue = 94,
    Magenta = 95,
    Cyan = 96,
}

pub const RESET: &str = "\x1b[0m";

impl Colour {
    pub const fn code(self) -> u8 { self as u8 }

    pub const fn name(self) -> &'static str {
        match self {
            Colour::Black => "black",
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Yellow => "yellow",
            Colour::Blue => "blue",
            Colour::Magenta => "magenta",
            Colour::Cyan => "cyan",
        }
    }

    /// Escape sequence that switches the terminal to this colour.
    pub fn start(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    /// Wrap `text` in this colour, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.start(), text, RESET)
    }
}

/// Return the built-in palette in SGR order.
pub fn presets() -> [Colour; 7] {
    [
        Colour::Black,
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Magenta,
        Colour::Cyan,
    ]
}

/// Find a colour by name (case-insensitive) or by its numeric SGR code.
pub fn find(name: &str) -> Option<Colour> {
    let name = name.trim();
    if let Ok(code) = name.parse::<u8>() {
        return presets().into_iter().find(|c| c.code() == code);
    }
    presets().into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
}

impl FromStr for Colour {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s).ok_or_else(|| ConfigError::UnknownColour(s.to_string()))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
