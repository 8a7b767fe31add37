//! Icon palette and hex color handling.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default badge color, `#667eea`.
pub const DEFAULT_BACKGROUND: (u8, u8, u8) = (102, 126, 234);

/// Default glyph color, white.
pub const DEFAULT_FOREGROUND: (u8, u8, u8) = (255, 255, 255);

// ============================================================================
// Color
// ============================================================================

/// An opaque sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Srgb<u8>);

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    pub fn from_tuple((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }

    pub fn as_tuple(&self) -> (u8, u8, u8) {
        self.0.into_components()
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.as_tuple();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rrggbb`, `rrggbb` or the short `#rgb` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Srgb<u8>>()
            .map(Self)
            .map_err(|source| Error::InvalidColor {
                value: s.to_string(),
                source,
            })
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Colors used to draw an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Fill of the circular badge.
    pub background: Color,
    /// Stroke of the camera glyph.
    pub foreground: Color,
}

impl Palette {
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            Color::from_tuple(DEFAULT_BACKGROUND),
            Color::from_tuple(DEFAULT_FOREGROUND),
        )
    }
}
