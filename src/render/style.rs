// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Defines colors and text attributes carried by visual nodes.
//! Colors deserialize from either a 0xRRGGBB integer or a color name.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Modifier: u16 {
        const BOLD              = 0b0000_0000_0001;
        const DIM               = 0b0000_0000_0010;
        const ITALIC            = 0b0000_0000_0100;
        const UNDERLINED        = 0b0000_0000_1000;
        const REVERSED          = 0b0000_0100_0000;
        const CROSSED_OUT       = 0b0001_0000_0000;
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Modifier::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    White,
    Rgba(u8, u8, u8, u8),
}

const NAMED: [(&str, Color); 11] = [
    ("reset", Color::Reset),
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("white", Color::White),
];

impl Color {
    /// Opaque color from a 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Color {
        Color::Rgba(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
            255,
        )
    }

    pub fn from_name(name: &str) -> Option<Color> {
        let lower = name.to_ascii_lowercase();
        NAMED.iter().find(|(n, _)| *n == lower).map(|(_, c)| *c)
    }

    /// 0xRRGGBB for concrete colors, None for named terminal colors.
    pub fn to_hex(self) -> Option<u32> {
        match self {
            Color::Rgba(r, g, b, _) => Some(((r as u32) << 16) | ((g as u32) << 8) | b as u32),
            _ => None,
        }
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::from_hex(hex)
    }
}

/// Serialized form of a Color: 0xRRGGBB integer or name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRepr {
    Hex(u32),
    Name(String),
}

#[derive(Debug)]
pub struct UnknownColor(String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name: {}", self.0)
    }
}

impl TryFrom<ColorRepr> for Color {
    type Error = UnknownColor;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => Ok(Color::from_hex(hex)),
            ColorRepr::Name(name) => {
                if let Some(hex) = name.strip_prefix('#') {
                    return u32::from_str_radix(hex, 16)
                        .map(Color::from_hex)
                        .map_err(|_| UnknownColor(name.clone()));
                }
                Color::from_name(&name).ok_or(UnknownColor(name))
            }
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        match color.to_hex() {
            Some(hex) => ColorRepr::Hex(hex),
            None => {
                let name = NAMED
                    .iter()
                    .find(|(_, c)| *c == color)
                    .map(|(n, _)| *n)
                    .unwrap_or("reset");
                ColorRepr::Name(name.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub fg: Option<Color>,
    #[serde(default)]
    pub bg: Option<Color>,
    #[serde(default)]
    pub modifier: Modifier,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Style {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Style {
        self.bg = Some(color);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Style {
        self.modifier.insert(modifier);
        self
    }

    pub fn remove_modifier(mut self, modifier: Modifier) -> Style {
        self.modifier.remove(modifier);
        self
    }
}
